// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::{Function, Location, Profile, Sample};
use flate2::read::GzDecoder;
use prost::Message;
use std::io::Read;

/// Decompresses and decodes the output of [`crate::Builder::emit`].
pub fn roundtrip_to_pprof(encoded: &[u8]) -> anyhow::Result<Profile> {
    let mut decoder = GzDecoder::new(encoded);
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(Profile::decode(bytes.as_slice())?)
}

pub fn string_table_fetch(profile: &Profile, id: i64) -> &String {
    profile
        .string_table
        .get(id as usize)
        .unwrap_or_else(|| panic!("String {id} not found"))
}

pub fn function_fetch(profile: &Profile, id: u64) -> &Function {
    profile
        .functions
        .iter()
        .find(|function| function.id == id)
        .unwrap_or_else(|| panic!("Function {id} not found"))
}

pub fn location_fetch(profile: &Profile, id: u64) -> &Location {
    profile
        .locations
        .iter()
        .find(|location| location.id == id)
        .unwrap_or_else(|| panic!("Location {id} not found"))
}

/// Resolves a sample's stack into `(function name, filename, line)`, leaf
/// first.
pub fn resolve_stack<'a>(profile: &'a Profile, sample: &Sample) -> Vec<(&'a str, &'a str, i64)> {
    sample
        .location_ids
        .iter()
        .map(|id| {
            let location = location_fetch(profile, *id);
            assert_eq!(1, location.lines.len());
            let line = location.lines[0];
            let function = function_fetch(profile, line.function_id);
            (
                string_table_fetch(profile, function.name).as_str(),
                string_table_fetch(profile, function.filename).as_str(),
                line.line,
            )
        })
        .collect()
}
