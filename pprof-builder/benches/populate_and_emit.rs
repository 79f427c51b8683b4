// Copyright 2024-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use criterion::*;
use pprof_builder::heap::{build_heap_profile, HeapSnapshot, HeapStatistic, TracebackFrame};

/// A snapshot with deep, overlapping tracebacks so that most frames are
/// shared between statistics.
fn synthetic_snapshot(statistics: usize, depth: usize) -> HeapSnapshot {
    let statistics = (0..statistics)
        .map(|i| HeapStatistic {
            count: 1 + (i % 5) as i64,
            size: 64 * (1 + (i % 13) as i64),
            traceback: (0..depth)
                .map(|d| TracebackFrame {
                    name: format!("function_{}", (i + d) % 211),
                    filename: format!("/srv/app/module_{}.py", d % 17),
                    first_lineno: d as i64 * 10,
                    lineno: d as i64 * 10 + (i % 7) as i64,
                })
                .collect(),
        })
        .collect();
    HeapSnapshot {
        sample_rate: 512 * 1024,
        statistics,
    }
}

pub fn heap_profile(c: &mut Criterion) {
    let snapshot = synthetic_snapshot(5000, 32);
    c.bench_function("benching heap profile of 5000 tracebacks", |b| {
        b.iter(|| black_box(build_heap_profile(black_box(&snapshot)).unwrap()))
    });
}

criterion_group!(benches, heap_profile);
