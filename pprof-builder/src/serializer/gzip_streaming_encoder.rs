// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{EncoderConfig, ProfileError};
use flate2::write::GzEncoder;
use std::io::Write;

/// Serializes protobuf messages for pprof, and gzips them as it goes.
///
/// Each message is encoded into a scratch buffer which is then handed to the
/// compressor, so the uncompressed profile never exists as a whole.
pub struct GzipProtobufSerializer {
    buffer: Vec<u8>,
    zipper: GzEncoder<Vec<u8>>,
    uncompressed_len: usize,
}

impl GzipProtobufSerializer {
    pub fn encode(&mut self, item: impl prost::Message) -> Result<(), ProfileError> {
        item.encode(&mut self.buffer)?;
        self.zipper.write_all(&self.buffer)?;
        self.uncompressed_len += self.buffer.len();
        self.buffer.clear();
        Ok(())
    }

    /// The number of protobuf bytes written so far, before compression.
    pub fn uncompressed_len(&self) -> usize {
        self.uncompressed_len
    }

    pub fn finish(self) -> Result<Vec<u8>, ProfileError> {
        Ok(self.zipper.finish()?)
    }

    pub fn with_config(config: &EncoderConfig) -> Self {
        // Messages other than the string table entries are small; the
        // scratch buffer grows to the largest one and is reused after.
        let buffer = Vec::with_capacity(256);
        let zipper = GzEncoder::new(
            Vec::with_capacity(config.initial_buffer_capacity),
            config.compression(),
        );
        Self {
            buffer,
            zipper,
            uncompressed_len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pprof;
    use flate2::read::GzDecoder;
    use prost::Message;
    use std::io::Read;

    #[test]
    fn output_is_gzip_of_concatenated_messages() {
        let mut encoder = GzipProtobufSerializer::with_config(&EncoderConfig::default());
        let value_type = pprof::ValueType { r#type: 1, unit: 2 };
        encoder
            .encode(pprof::sliced::ProfileSampleTypesEntry::from(value_type))
            .unwrap();
        encoder
            .encode(pprof::sliced::ProfileStringTableEntry::from(String::new()))
            .unwrap();
        let uncompressed_len = encoder.uncompressed_len();
        let compressed = encoder.finish().unwrap();

        // gzip magic
        assert_eq!(&[0x1f, 0x8b], &compressed[..2]);

        let mut bytes = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut bytes)
            .unwrap();
        assert_eq!(uncompressed_len, bytes.len());

        let profile = pprof::Profile::decode(bytes.as_slice()).unwrap();
        assert_eq!(vec![value_type], profile.sample_types);
        assert_eq!(vec![String::new()], profile.string_table);
    }

    #[test]
    fn store_only_level_still_produces_gzip() {
        let config = EncoderConfig {
            compression_level: 0,
            initial_buffer_capacity: 0,
        };
        let mut encoder = GzipProtobufSerializer::with_config(&config);
        encoder
            .encode(pprof::sliced::ProfileStringTableEntry::from("x".to_string()))
            .unwrap();
        let compressed = encoder.finish().unwrap();

        let mut bytes = Vec::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_end(&mut bytes)
            .unwrap();
        assert_eq!(vec![0x32, 0x01, b'x'], bytes);
    }
}
