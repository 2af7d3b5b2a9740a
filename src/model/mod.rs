// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Equipment data model

pub mod entity_id;
pub mod equipment;
pub mod icon;

pub use entity_id::{EquipmentId, LinkSlot};
pub use equipment::{Equipment, EquipmentKind, NameSequence};
pub use icon::{FileIconLoader, Icon, IconLoader};
