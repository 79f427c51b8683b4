// Copyright 2021-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Turns aggregated call-stack samples into gzip-compressed [pprof] profiles.
//!
//! A [`Builder`] owns the function, location and string tables of one
//! profile. Feed it a [`Samples`](api::Samples) map once with
//! [`Builder::populate`], then call [`Builder::emit`] to get the compressed
//! bytes:
//!
//! ```
//! use pprof_builder::api::{Frame, SampleValues, Samples};
//! use pprof_builder::Builder;
//! use std::time::Duration;
//!
//! let mut samples = Samples::default();
//! let trace = vec![Frame::new("f1", "a.py", 1, 5)];
//! samples.insert(trace, SampleValues::new(3, 300));
//!
//! let mut builder = Builder::new();
//! builder
//!     .populate(&samples, "HEAP", "bytes", 1, Duration::from_nanos(1))
//!     .unwrap();
//! let bytes = builder.emit().unwrap();
//! assert!(!bytes.is_empty());
//! ```
//!
//! Memory snapshots grouped by traceback can be converted directly with
//! [`heap::build_heap_profile`].
//!
//! [pprof]: https://github.com/google/pprof/blob/main/proto/profile.proto

pub mod api;
pub mod collections;
pub mod config;
pub mod error;
pub mod heap;
pub mod internal;
pub mod pprof;
pub mod serializer;

pub use config::EncoderConfig;
pub use error::ProfileError;
pub use internal::Builder;
