// Copyright 2021-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::collections::identifiable::FxIndexMap;
use std::ops::AddAssign;

/// One stack entry as captured by a profiler.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Frame<'a> {
    /// Name of the function.
    pub name: &'a str,
    /// Source file which holds the function.
    pub filename: &'a str,
    /// The first line of the function's definition.
    pub start_line: i64,
    /// The line which was executing when the frame was captured.
    pub line: i64,
}

impl<'a> Frame<'a> {
    pub fn new(name: &'a str, filename: &'a str, start_line: i64, line: i64) -> Self {
        Self {
            name,
            filename,
            start_line,
            line,
        }
    }
}

/// An ordered call path. The leaf frame is at `trace[0]`.
pub type Trace<'a> = Vec<Frame<'a>>;

/// The values recorded for one trace.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SampleValues {
    /// How many times the trace was observed.
    pub count: i64,
    /// The measurement for the trace, in the profile's period unit.
    pub value: i64,
}

impl SampleValues {
    pub fn new(count: i64, value: i64) -> Self {
        Self { count, value }
    }
}

impl AddAssign for SampleValues {
    /// Sums both fields, saturating at the bounds of `i64`.
    fn add_assign(&mut self, rhs: Self) {
        self.count = self.count.saturating_add(rhs.count);
        self.value = self.value.saturating_add(rhs.value);
    }
}

/// Traces mapped to their values. Each trace appears once; traces which are
/// logically the same must be summed before they're inserted, because the
/// builder does not aggregate. Iteration follows insertion order, so a map
/// filled in the same order always produces the same profile bytes.
pub type Samples<'a> = FxIndexMap<Trace<'a>, SampleValues>;
