// Copyright 2024-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Converts memory snapshots, grouped by traceback, into heap profiles.

use crate::api::{Frame, SampleValues, Samples, Trace};
use crate::{Builder, EncoderConfig, ProfileError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const HEAP_PROFILE_TYPE: &str = "HEAP";
pub const HEAP_PERIOD_UNIT: &str = "bytes";

/// Heap snapshots are instantaneous, so the profile has a nominal duration.
pub const HEAP_PROFILE_DURATION: Duration = Duration::from_nanos(1);

/// One frame of a traceback, as the allocation tracker reports it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TracebackFrame {
    pub name: String,
    pub filename: String,
    /// The first line of the function's definition.
    #[serde(rename = "firstlineno", alias = "first_lineno")]
    pub first_lineno: i64,
    /// The line which was executing when the allocation happened.
    pub lineno: i64,
}

/// Live allocations which share a traceback.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HeapStatistic {
    /// Number of live allocations.
    pub count: i64,
    /// Total size of the live allocations, in bytes.
    pub size: i64,
    /// The leaf frame is at `traceback[0]`.
    pub traceback: Vec<TracebackFrame>,
}

/// A point-in-time view of sampled live allocations.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HeapSnapshot {
    /// Average number of bytes between samples.
    pub sample_rate: i64,
    pub statistics: Vec<HeapStatistic>,
}

impl TracebackFrame {
    fn as_frame(&self) -> Frame<'_> {
        Frame::new(&self.name, &self.filename, self.first_lineno, self.lineno)
    }
}

/// Groups the snapshot's statistics by trace, summing count and size of
/// statistics whose tracebacks resolve to the same frames. Traces keep the
/// order in which they were first seen.
pub fn aggregate_heap_samples(snapshot: &HeapSnapshot) -> Samples<'_> {
    let mut samples = Samples::default();
    for statistic in snapshot.statistics.iter() {
        let trace: Trace = statistic
            .traceback
            .iter()
            .map(TracebackFrame::as_frame)
            .collect();
        *samples.entry(trace).or_default() += SampleValues::new(statistic.count, statistic.size);
    }
    samples
}

/// Builds a gzip-compressed pprof heap profile from the snapshot.
pub fn build_heap_profile(snapshot: &HeapSnapshot) -> Result<Vec<u8>, ProfileError> {
    build_heap_profile_with_config(snapshot, EncoderConfig::default())
}

pub fn build_heap_profile_with_config(
    snapshot: &HeapSnapshot,
    config: EncoderConfig,
) -> Result<Vec<u8>, ProfileError> {
    let mut builder = Builder::with_config(config)?;
    let samples = aggregate_heap_samples(snapshot);
    builder.populate(
        &samples,
        HEAP_PROFILE_TYPE,
        HEAP_PERIOD_UNIT,
        snapshot.sample_rate,
        HEAP_PROFILE_DURATION,
    )?;
    builder.emit()
}
