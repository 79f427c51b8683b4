// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

/// Every sample carries this many values: the raw event count, then the
/// measurement in the profile's period unit.
pub const SAMPLE_VALUES_LEN: usize = 2;

/// A sample as held by the builder. Samples are not deduplicated; the builder
/// keeps one per trace it was given.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Sample {
    /// The leaf is at `locations[0]`.
    pub locations: Vec<LocationId>,
    pub values: [i64; SAMPLE_VALUES_LEN],
}

impl From<Sample> for pprof::Sample {
    fn from(sample: Sample) -> Self {
        Self {
            location_ids: sample.locations.iter().map(Id::to_raw_id).collect(),
            values: sample.values.to_vec(),
            labels: vec![],
        }
    }
}
