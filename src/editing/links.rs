// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Link drafts: requested connections that do not have a target yet.
//!
//! Each equipment carries its own `LinkDrafts` table keyed by link slot. A
//! draft records where the pointer was when the link was requested and a
//! placeholder target of `(0, 0)`. Completing a draft against a target
//! equipment is not wired up yet; `LinkDraft::link_handle` and
//! `LinkDraft::target` are where that step will record its result.

use crate::model::{Equipment, LinkSlot};
use crate::surface::ItemHandle;
use kurbo::Point;
use std::collections::BTreeMap;

/// One outgoing link request
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDraft {
    /// Canvas item drawn for the link, once there is one
    pub link_handle: Option<ItemHandle>,
    /// Pointer position when the link was requested
    pub source: Point,
    /// Target position; `(0, 0)` until a target is chosen
    pub target: Point,
}

impl LinkDraft {
    fn new(source: Point) -> Self {
        Self {
            link_handle: None,
            source,
            target: Point::ZERO,
        }
    }

    /// True while no target has been chosen
    pub fn is_pending(&self) -> bool {
        self.link_handle.is_none()
    }
}

/// Link drafts of a single equipment, keyed by slot
#[derive(Debug, Clone, Default)]
pub struct LinkDrafts {
    drafts: BTreeMap<LinkSlot, LinkDraft>,
}

impl LinkDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new draft from `owner`, claiming its next link slot.
    ///
    /// Every call yields a fresh slot, so repeated requests never overwrite
    /// an earlier draft.
    pub fn begin(&mut self, owner: &mut Equipment, source: Point) -> LinkSlot {
        let slot = LinkSlot(owner.next_link_slot());
        self.drafts.insert(slot, LinkDraft::new(source));
        slot
    }

    pub fn get(&self, slot: LinkSlot) -> Option<&LinkDraft> {
        self.drafts.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LinkSlot, &LinkDraft)> {
        self.drafts.iter().map(|(slot, draft)| (*slot, draft))
    }

    /// Canvas items owned by the drafts, for cascade deletion
    pub fn artifacts(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.drafts.values().filter_map(|draft| draft.link_handle)
    }
}
