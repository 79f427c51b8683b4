// Copyright 2021-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::api::{Frame, Samples};
use crate::collections::string_table::StringTable;
use crate::pprof::sliced::*;
use crate::serializer::GzipProtobufSerializer;
use crate::{EncoderConfig, ProfileError};
use std::time::{Duration, SystemTime};
use tracing::debug;

/// Builds one pprof profile.
///
/// The builder owns the function, location and string tables and the sample
/// list. It is single-use: call [Builder::populate] once, then
/// [Builder::emit], which consumes it. A builder is not meant to be shared
/// between threads; build concurrent profiles with one builder each.
pub struct Builder {
    config: EncoderConfig,
    functions: FxIndexSet<Function>,
    locations: FxIndexSet<Location>,
    period: Option<(i64, ValueType)>,
    duration_nanos: i64,
    sample_types: Vec<ValueType>,
    samples: Vec<Sample>,
    start_time: Option<SystemTime>,
    strings: StringTable,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Public API
impl Builder {
    pub fn new() -> Self {
        Self::new_internal(EncoderConfig::default())
    }

    /// Creates a builder which emits with `config`. The configuration is
    /// checked here rather than at emit time.
    pub fn with_config(config: EncoderConfig) -> Result<Self, ProfileError> {
        config.validate()?;
        Ok(Self::new_internal(config))
    }

    /// Records when profiling started. It's emitted as the profile's
    /// `time_nanos`; without it, `time_nanos` is left at 0.
    pub fn with_start_time(mut self, start_time: SystemTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Fills the profile from `samples`.
    ///
    /// Every sample gets two values, `[count, value]`, described by the
    /// sample types `sample/count` and `profile_type/period_unit`, in that
    /// order. Frames are resolved to functions and locations, reusing the
    /// existing ids for frames seen before, and sample stacks keep the
    /// leaf-first order of the trace.
    ///
    /// * `period` - The interval between sampled occurrences, in
    ///   `period_unit`.
    /// * `duration` - How long profiling ran. Saturates at `i64::MAX`
    ///   nanoseconds.
    ///
    /// # Errors
    /// [ProfileError::AlreadyPopulated] if a previous call succeeded, and
    /// [ProfileError::StorageFull] if a table runs out of ids. Nothing is
    /// rejected based on the contents of the traces. After a failed call no
    /// samples or sample types are recorded, so the builder may be populated
    /// again; strings, functions and locations interned before the failure
    /// stay in their tables.
    pub fn populate(
        &mut self,
        samples: &Samples<'_>,
        profile_type: &str,
        period_unit: &str,
        period: i64,
        duration: Duration,
    ) -> Result<(), ProfileError> {
        if !self.sample_types.is_empty() {
            return Err(ProfileError::AlreadyPopulated);
        }

        // String ids are handed out on first use, so the order of these
        // interns decides the layout of the string table.
        let period_type = ValueType {
            r#type: self.intern(profile_type)?,
            unit: self.intern(period_unit)?,
        };
        let count_type = ValueType {
            r#type: self.intern("sample")?,
            unit: self.intern("count")?,
        };

        let mut resolved = Vec::with_capacity(samples.len());
        for (trace, values) in samples.iter() {
            let locations = trace
                .iter()
                .map(|frame| self.add_frame(frame))
                .collect::<Result<Vec<_>, _>>()?;
            resolved.push(Sample {
                locations,
                values: [values.count, values.value],
            });
        }

        // pprof consumers read value 0 as the event count and value 1 as
        // the measurement, so the order of the sample types is fixed.
        self.sample_types = vec![count_type, period_type];
        self.period = Some((period, period_type));
        self.duration_nanos = duration.as_nanos().min(i64::MAX as u128) as i64;
        self.samples = resolved;

        debug!(
            samples = self.samples.len(),
            functions = self.functions.len(),
            locations = self.locations.len(),
            strings = self.strings.len(),
            profile_type,
            period_unit,
            "Populated profile"
        );
        Ok(())
    }

    /// Serializes the profile and returns it gzip-compressed.
    ///
    /// Fields are written in field-number order and the gzip header carries
    /// no timestamp, so the same input always gives the same bytes.
    pub fn emit(self) -> Result<Vec<u8>, ProfileError> {
        let time_nanos = self
            .start_time
            .and_then(|start| start.duration_since(SystemTime::UNIX_EPOCH).ok())
            .map_or(0, |duration| {
                duration.as_nanos().min(i64::MAX as u128) as i64
            });
        let (period, period_type) = match self.period {
            Some((period, period_type)) => (period, Some(period_type.into())),
            None => (0, None),
        };

        let mut encoder = GzipProtobufSerializer::with_config(&self.config);

        for sample_type in self.sample_types.iter() {
            let item: pprof::ValueType = sample_type.into();
            encoder.encode(ProfileSampleTypesEntry::from(item))?;
        }

        let num_samples = self.samples.len();
        for sample in self.samples {
            encoder.encode(ProfileSamplesEntry::from(pprof::Sample::from(sample)))?;
        }

        for item in into_pprof_iter(self.locations) {
            encoder.encode(ProfileLocationsEntry::from(item))?;
        }

        for item in into_pprof_iter(self.functions) {
            encoder.encode(ProfileFunctionsEntry::from(item))?;
        }

        for item in self.strings {
            encoder.encode(ProfileStringTableEntry::from(item))?;
        }

        encoder.encode(ProfileSimpler {
            time_nanos,
            duration_nanos: self.duration_nanos,
            period_type,
            period,
        })?;

        let uncompressed_len = encoder.uncompressed_len();
        let buffer = encoder.finish()?;
        debug!(
            samples = num_samples,
            uncompressed_len,
            compressed_len = buffer.len(),
            "Emitted profile"
        );
        Ok(buffer)
    }
}

/// Private helper functions
impl Builder {
    fn new_internal(config: EncoderConfig) -> Self {
        Self {
            config,
            functions: Default::default(),
            locations: Default::default(),
            period: None,
            duration_nanos: 0,
            sample_types: vec![],
            samples: vec![],
            start_time: None,
            strings: StringTable::new(),
        }
    }

    fn add_frame(&mut self, frame: &Frame) -> Result<LocationId, ProfileError> {
        let function_id = self.function_id(frame.name, frame.filename, frame.start_line)?;
        self.location_id(function_id, frame.line)
    }

    /// Returns the id of the function, adding it if it's new. Ids start at 1.
    fn function_id(
        &mut self,
        name: &str,
        filename: &str,
        start_line: i64,
    ) -> Result<FunctionId, ProfileError> {
        let function = Function {
            name: self.intern(name)?,
            filename: self.intern(filename)?,
            start_line,
        };
        self.functions.checked_dedup(function)
    }

    /// Returns the id of the location, adding it if it's new. Ids start at 1.
    /// `function_id` must come from [Builder::function_id].
    fn location_id(
        &mut self,
        function_id: FunctionId,
        line: i64,
    ) -> Result<LocationId, ProfileError> {
        self.locations.checked_dedup(Location { function_id, line })
    }

    fn intern(&mut self, item: &str) -> Result<StringId, ProfileError> {
        self.strings.intern(item)
    }
}
