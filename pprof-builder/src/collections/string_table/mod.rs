// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::collections::identifiable::{FxIndexSet, Id, StringId};
use crate::ProfileError;

/// A StringTable holds unique strings in insertion order. The offset of a
/// string in the set is its [StringId], which never changes once assigned.
///
/// The empty string is always at offset 0, as pprof requires.
pub struct StringTable {
    strings: FxIndexSet<Box<str>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    pub fn new() -> Self {
        let mut strings = FxIndexSet::<Box<str>>::default();
        strings.insert("".into());
        Self { strings }
    }

    /// Returns the id of `item`, adding it to the table if it's new.
    ///
    /// Fails with [ProfileError::StorageFull] only if the table already
    /// holds `u32::MAX + 1` strings.
    pub fn intern(&mut self, item: &str) -> Result<StringId, ProfileError> {
        // Delay converting the &str to a Box<str> until after it has been
        // determined to not exist in the set, avoiding a temporary
        // allocation on hits.
        let index = match self.strings.get_index_of(item) {
            Some(index) => index,
            None => {
                let next = self.strings.len();
                StringId::try_from_offset(next).ok_or(ProfileError::StorageFull)?;
                let (index, _inserted) = self.strings.insert_full(item.into());
                debug_assert!(_inserted);
                index
            }
        };
        Ok(StringId::from_offset(index))
    }

    /// Looks up a string by id. Returns None for ids this table never
    /// handed out.
    pub fn get(&self, id: StringId) -> Option<&str> {
        let offset = usize::try_from(id.to_raw_id()).ok()?;
        self.strings.get_index(offset).map(|s| s.as_ref())
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Iterates over the strings in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(|s| s.as_ref())
    }
}

impl IntoIterator for StringTable {
    type Item = String;
    type IntoIter = std::iter::Map<indexmap::set::IntoIter<Box<str>>, fn(Box<str>) -> String>;

    fn into_iter(self) -> Self::IntoIter {
        self.strings
            .into_iter()
            .map(String::from as fn(Box<str>) -> String)
    }
}
