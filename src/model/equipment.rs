// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Network equipment records.
//!
//! An `Equipment` is one device placed on the canvas. Its kind is fixed at
//! creation; its name and icon can change afterwards. Default names come from
//! a `NameSequence`, a per-kind counter owned by the registry that is bumped
//! once per successful creation and never rewound, so names stay independent
//! of registry ids and of deletions.

use crate::error::CanvasError;
use crate::model::{Icon, IconLoader};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The closed set of equipment types the canvas knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    Switch,
    Router,
    Pc,
    Mobile,
}

impl EquipmentKind {
    /// All kinds, in menu order
    pub const ALL: [EquipmentKind; 4] = [Self::Switch, Self::Router, Self::Pc, Self::Mobile];

    /// Stable lowercase type name shared with the menu host
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Router => "router",
            Self::Pc => "pc",
            Self::Mobile => "mobile",
        }
    }

    /// Label of the "insert" entry in the Edit menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Switch => "Insert Switch",
            Self::Router => "Insert Router",
            Self::Pc => "Insert Laptop",
            Self::Mobile => "Insert Mobile",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| CanvasError::InvalidKind(s.to_string()))
    }
}

/// Per-kind counters used for default display names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSequence {
    issued: [u32; EquipmentKind::ALL.len()],
}

impl NameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many names of this kind have been issued so far
    pub fn issued(&self, kind: EquipmentKind) -> u32 {
        self.issued[kind.index()]
    }

    /// Issue the next default name for `kind`, e.g. `switch-3`.
    fn issue(&mut self, kind: EquipmentKind) -> String {
        let counter = &mut self.issued[kind.index()];
        *counter += 1;
        format!("{}-{}", kind, counter)
    }
}

/// One placed network device
#[derive(Debug, Clone)]
pub struct Equipment {
    kind: EquipmentKind,
    name: String,
    icon: Icon,
    link_count: u32,
}

impl Equipment {
    /// Create an equipment from a type name.
    ///
    /// The type is matched case-insensitively. The icon is loaded before the
    /// name counter moves, so a failed load leaves `names` untouched.
    pub fn create(
        kind: &str,
        loader: &impl IconLoader,
        names: &mut NameSequence,
    ) -> Result<Self, CanvasError> {
        let kind: EquipmentKind = kind.parse()?;
        let icon = loader.load_kind(kind)?;
        let name = names.issue(kind);

        Ok(Self {
            kind,
            name,
            icon,
            link_count: 0,
        })
    }

    pub fn kind(&self) -> EquipmentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Number of link drafts started from this equipment
    pub fn link_count(&self) -> u32 {
        self.link_count
    }

    /// Rename without validation; empty and duplicate names are allowed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the icon with the image at `path`.
    ///
    /// On failure the current icon is kept.
    pub fn set_icon(&mut self, path: &Path, loader: &impl IconLoader) -> Result<(), CanvasError> {
        self.icon = loader.load_path(path)?;
        Ok(())
    }

    /// Claim the next link slot index (1, 2, 3, ...).
    pub fn next_link_slot(&mut self) -> u32 {
        self.link_count += 1;
        self.link_count
    }
}
