// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Single-field companions of [`Profile`](crate::Profile).
//!
//! The top level message of a protobuf has no length header, so the bytes of
//! one `Profile` are indistinguishable from the concatenation of several
//! smaller messages whose field numbers and types match the fields of
//! `Profile`. Each message here holds exactly one of those fields, which lets
//! a serializer write a profile entry by entry without first building the
//! whole `Profile` in memory.
//!
//! Repeated fields of `Profile` are modelled here with "required" fields.
//! A required field is written even when it holds the default value, which
//! keeps entries such as the empty string at index 0 of the string table.
//! An optional field would silently drop them.

use super::*;

#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileSampleTypesEntry {
    #[prost(message, required, tag = "1")]
    pub sample_types_entry: ValueType,
}

#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileSamplesEntry {
    #[prost(message, required, tag = "2")]
    pub samples_entry: Sample,
}

#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileLocationsEntry {
    #[prost(message, required, tag = "4")]
    pub locations_entry: Location,
}

#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileFunctionsEntry {
    #[prost(message, required, tag = "5")]
    pub functions_entry: Function,
}

#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileStringTableEntry {
    #[prost(string, required, tag = "6")]
    pub string_table_entry: String,
}

// These fields are not repeated so we can just make a combined struct for them.
#[derive(Eq, Hash, PartialEq, ::prost::Message)]
pub struct ProfileSimpler {
    #[prost(int64, tag = "9")]
    pub time_nanos: i64,
    #[prost(int64, tag = "10")]
    pub duration_nanos: i64,
    #[prost(message, optional, tag = "11")]
    pub period_type: Option<ValueType>,
    #[prost(int64, tag = "12")]
    pub period: i64,
}

impl From<ValueType> for ProfileSampleTypesEntry {
    fn from(item: ValueType) -> Self {
        Self {
            sample_types_entry: item,
        }
    }
}

impl From<Sample> for ProfileSamplesEntry {
    fn from(item: Sample) -> Self {
        Self {
            samples_entry: item,
        }
    }
}

impl From<Location> for ProfileLocationsEntry {
    fn from(item: Location) -> Self {
        Self {
            locations_entry: item,
        }
    }
}

impl From<Function> for ProfileFunctionsEntry {
    fn from(item: Function) -> Self {
        Self {
            functions_entry: item,
        }
    }
}

impl From<String> for ProfileStringTableEntry {
    fn from(item: String) -> Self {
        Self {
            string_table_entry: item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn slices_concatenate_into_a_profile() {
        let mut buffer = Vec::new();
        let sample_type = ValueType { r#type: 1, unit: 2 };
        ProfileSampleTypesEntry::from(sample_type)
            .encode(&mut buffer)
            .unwrap();
        ProfileSamplesEntry::from(Sample {
            location_ids: vec![1],
            values: vec![1, 2],
            labels: vec![],
        })
        .encode(&mut buffer)
        .unwrap();
        for s in ["", "sample", "count"] {
            ProfileStringTableEntry::from(s.to_string())
                .encode(&mut buffer)
                .unwrap();
        }
        ProfileSimpler {
            time_nanos: 0,
            duration_nanos: 7,
            period_type: Some(sample_type),
            period: 3,
        }
        .encode(&mut buffer)
        .unwrap();

        let profile = Profile::decode(buffer.as_slice()).unwrap();
        assert_eq!(vec![sample_type], profile.sample_types);
        assert_eq!(1, profile.samples.len());
        assert_eq!(vec!["", "sample", "count"], profile.string_table);
        assert_eq!(7, profile.duration_nanos);
        assert_eq!(Some(sample_type), profile.period_type);
        assert_eq!(3, profile.period);
    }

    #[test]
    fn default_entries_are_still_written() {
        let mut buffer = Vec::new();
        ProfileStringTableEntry::from(String::new())
            .encode(&mut buffer)
            .unwrap();
        // tag 6, length-delimited, zero length
        assert_eq!(vec![0x32, 0x00], buffer);
    }
}
