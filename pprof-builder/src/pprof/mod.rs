// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub use pprof_builder_protobuf::*;

#[cfg(test)]
pub mod test_utils;
