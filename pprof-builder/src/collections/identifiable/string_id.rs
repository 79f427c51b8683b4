// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

/// An index into the string table. The empty string is always at offset 0,
/// so unlike the other ids this one may be zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StringId(u32);

impl StringId {
    pub const ZERO: StringId = StringId(0);

    /// Converts the offset, returning None if it doesn't fit in 32 bits.
    #[inline]
    pub fn try_from_offset(offset: usize) -> Option<Self> {
        u32::try_from(offset).ok().map(Self)
    }
}

impl Id for StringId {
    type RawId = i64;

    fn from_offset(inner: usize) -> Self {
        #[allow(clippy::expect_used)]
        Self::try_from_offset(inner).expect("StringId to fit into a u32")
    }

    fn to_raw_id(&self) -> Self::RawId {
        self.0.into()
    }
}
