// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Identifiers for placed equipment and their link slots.
//!
//! `EquipmentId` values are handed out by the `EquipmentRegistry`, which owns
//! the counter. They start at 1, increase by one per successful insert, and
//! are never reused within a session, so a deleted equipment leaves no id
//! another one could pick up.

use std::fmt;

/// A unique identifier for one placed equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EquipmentId(u64);

impl EquipmentId {
    /// The first id a fresh registry assigns
    pub const FIRST: Self = Self(1);

    /// The raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of an outgoing link slot on one equipment (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkSlot(pub u32);
