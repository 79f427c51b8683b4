// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::io;

/// Represents errors that occur while building or emitting a profile.
///
/// Inputs to the builder are trusted, so none of these are caused by the
/// contents of a trace. They cover configuration, capacity limits, misuse of
/// the single-use builder, and failures of the compression stream.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// [`crate::Builder::populate`] was called on a builder which already
    /// holds a profile.
    #[error("profile was already populated")]
    AlreadyPopulated,
    #[error(transparent)]
    Encode(#[from] prost::EncodeError),
    /// The configuration was rejected when the builder was created.
    #[error("invalid configuration: {0}")]
    InvalidConfig(Cow<'static, str>),
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The id space of a table is exhausted. Ids are 32-bit, and the pprof
    /// format reserves 0 for functions and locations.
    #[error("storage full")]
    StorageFull,
}

impl ProfileError {
    pub fn invalid_config(error: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfig(error.into())
    }
}
