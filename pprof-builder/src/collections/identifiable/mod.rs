// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

mod string_id;

use crate::ProfileError;
use std::hash::{BuildHasherDefault, Hash};
use std::num::NonZeroU32;

pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type FxIndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<rustc_hash::FxHasher>>;

pub use string_id::*;

pub trait Id: Copy + Eq + Hash {
    type RawId;

    /// Convert from a usize offset into an Id. This should be loss-less
    /// except for certain edges.
    /// # Panics
    /// Panic if the usize cannot be represented in the Id, for instance if
    /// the offset cannot fit in the underlying integer type. Use
    /// [`Dedup::checked_dedup`] to get an error instead.
    fn from_offset(inner: usize) -> Self;

    fn to_raw_id(&self) -> Self::RawId;
}

pub trait Item: Eq + Hash {
    /// The Id associated with this Item, e.g. Function -> FunctionId.
    type Id: Id;
}

/// Used to associate an Item with a pprof::* type.
pub trait PprofItem: Item {
    /// The pprof::* type associated with this Item.
    /// For example, Function -> pprof::Function.
    type PprofMessage: prost::Message;

    // Items don't store their own id, so they can't do a simple .into() to
    // get a pprof message.
    fn to_pprof(&self, id: Self::Id) -> Self::PprofMessage;
}

/// Creates a non-zero, 32-bit unsigned id from the offset. It's guaranteed to
/// be the offset + 1, with guards to not overflow the size of u32.
///
/// pprof does not allow a function or location with an id of zero, even if
/// it's the first item in the collection.
#[inline]
pub fn small_non_zero_pprof_id(offset: usize) -> Option<NonZeroU32> {
    let small: u32 = offset.try_into().ok()?;
    let non_zero = small.checked_add(1)?;
    NonZeroU32::new(non_zero)
}

pub trait Dedup<T: Item> {
    /// Deduplicate the Item and return its associated Id, failing with
    /// [`ProfileError::StorageFull`] instead of panicking when the Id space
    /// is exhausted. The item is not inserted in that case.
    fn checked_dedup(&mut self, item: T) -> Result<<T as Item>::Id, ProfileError>;
}

impl<T: Item> Dedup<T> for FxIndexSet<T> {
    fn checked_dedup(&mut self, item: T) -> Result<<T as Item>::Id, ProfileError> {
        if let Some(offset) = self.get_index_of(&item) {
            return Ok(<T as Item>::Id::from_offset(offset));
        }
        let offset = self.len();
        small_non_zero_pprof_id(offset).ok_or(ProfileError::StorageFull)?;
        let (id, inserted) = self.insert_full(item);
        debug_assert!(inserted);
        debug_assert_eq!(offset, id);
        Ok(<T as Item>::Id::from_offset(id))
    }
}

pub fn into_pprof_iter<T: PprofItem>(
    collection: FxIndexSet<T>,
) -> impl Iterator<Item = T::PprofMessage> {
    collection
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.to_pprof(<T as Item>::Id::from_offset(index)))
}
