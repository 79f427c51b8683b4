// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! This crate holds the [`profiles`] message definitions as `prost` derives:
//!
//! - [Profile]
//! - [Sample]
//! - [ValueType]
//! - [Label]
//! - [Mapping]
//! - [Location] and [Line]
//! - [Function]
//!
//! The [sliced] module holds single-field companions of [Profile] which let
//! a profile be serialized one entry at a time.
//!
//! Indices into the string table are `i64`, and ids are `u64`, matching the
//! upstream schema. An id of zero is never valid for functions, locations
//! and mappings.
//!
//! [`profiles`]: https://github.com/google/pprof/blob/main/proto/profile.proto

mod messages;
pub mod sliced;

pub use messages::*;
