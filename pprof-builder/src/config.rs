// Copyright 2024-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::ProfileError;
use serde::{Deserialize, Serialize};

/// Controls how [`crate::Builder::emit`] writes the profile.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// gzip compression level, from 0 (store) to 9 (best).
    pub compression_level: u32,
    /// Initial capacity of the compressed output buffer, in bytes.
    pub initial_buffer_capacity: usize,
}

impl EncoderConfig {
    pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;
    pub const MAX_COMPRESSION_LEVEL: u32 = 9;

    // Compressed profiles are rarely under 18 KiB, so starting at 32 KiB
    // avoids most regrowth.
    pub const DEFAULT_INITIAL_BUFFER_CAPACITY: usize = 32 * 1024;

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.compression_level > Self::MAX_COMPRESSION_LEVEL {
            return Err(ProfileError::invalid_config(format!(
                "compression_level must be between 0 and {}, got {}",
                Self::MAX_COMPRESSION_LEVEL,
                self.compression_level
            )));
        }
        Ok(())
    }

    pub(crate) fn compression(&self) -> flate2::Compression {
        flate2::Compression::new(self.compression_level)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            compression_level: Self::DEFAULT_COMPRESSION_LEVEL,
            initial_buffer_capacity: Self::DEFAULT_INITIAL_BUFFER_CAPACITY,
        }
    }
}
