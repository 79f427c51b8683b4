// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

mod gzip_streaming_encoder;

pub use gzip_streaming_encoder::*;
