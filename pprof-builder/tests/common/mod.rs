// Copyright 2024-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use flate2::read::GzDecoder;
use pprof_builder::pprof;
use prost::Message;
use std::io::Read;

pub fn decode(encoded: &[u8]) -> anyhow::Result<pprof::Profile> {
    let mut bytes = Vec::new();
    GzDecoder::new(encoded).read_to_end(&mut bytes)?;
    Ok(pprof::Profile::decode(bytes.as_slice())?)
}

#[allow(dead_code)]
pub fn string(profile: &pprof::Profile, id: i64) -> &str {
    profile
        .string_table
        .get(id as usize)
        .unwrap_or_else(|| panic!("String {id} not found"))
}

/// Resolves each sample into its frames as `(name, filename, start_line,
/// line)`, leaf first, alongside its values.
pub fn resolved_samples(profile: &pprof::Profile) -> Vec<(Vec<(&str, &str, i64, i64)>, Vec<i64>)> {
    profile
        .samples
        .iter()
        .map(|sample| {
            let frames = sample
                .location_ids
                .iter()
                .map(|id| {
                    let location = profile
                        .locations
                        .iter()
                        .find(|l| l.id == *id)
                        .unwrap_or_else(|| panic!("Location {id} not found"));
                    let line = location.lines[0];
                    let function = profile
                        .functions
                        .iter()
                        .find(|f| f.id == line.function_id)
                        .unwrap_or_else(|| panic!("Function {} not found", line.function_id));
                    (
                        string(profile, function.name),
                        string(profile, function.filename),
                        function.start_line,
                        line.line,
                    )
                })
                .collect();
            (frames, sample.values.clone())
        })
        .collect()
}
