// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawing surface the canvas controller talks to.
//!
//! A surface owns item geometry and z-order. The controller only ever holds
//! opaque `ItemHandle`s and asks the surface to move, restack, restyle, or
//! delete the items behind them. Event routing works like tag bindings: an
//! item is bound to the interaction events it reacts to, and the surface
//! answers "which bound item is under this point".

mod display_list;

pub use display_list::{DisplayItem, DisplayList, ItemContent};

use crate::model::Icon;
use kurbo::{Point, Size};
use std::fmt;

/// Opaque identifier the surface assigns to a drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemHandle(pub u64);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an item on the surface is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Icon,
    Text,
}

/// Interaction events an item can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    PrimaryPress,
    PrimaryDrag,
    PrimaryDoubleClick,
    SecondaryPress,
}

impl Binding {
    /// Everything an equipment icon reacts to
    pub const EQUIPMENT: [Binding; 4] = [
        Self::PrimaryPress,
        Self::PrimaryDrag,
        Self::PrimaryDoubleClick,
        Self::SecondaryPress,
    ];
}

/// A retained-mode canvas
pub trait CanvasSurface {
    /// Draw an icon centred on `center`; the new item goes on top.
    fn draw_icon(&mut self, center: Point, icon: &Icon) -> ItemHandle;

    /// Draw a text item centred on `center`; the new item goes on top.
    fn draw_text(&mut self, center: Point, text: &str) -> ItemHandle;

    /// Place the item so the top-left corner of its bounds is at `top_left`.
    fn move_to(&mut self, handle: ItemHandle, top_left: Point);

    /// Put the item above every other item.
    fn raise(&mut self, handle: ItemHandle);

    /// Put the item below every other item.
    fn lower(&mut self, handle: ItemHandle);

    /// Remove the item and its bindings. Unknown handles are ignored.
    fn delete(&mut self, handle: ItemHandle);

    /// The item closest to `point`, topmost on ties, optionally limited to one
    /// kind of item.
    fn nearest_to(&self, point: Point, kind: Option<ItemKind>) -> Option<ItemHandle>;

    fn set_item_image(&mut self, handle: ItemHandle, icon: &Icon);

    fn set_item_text(&mut self, handle: ItemHandle, text: &str);

    /// Bind an item to interaction events, replacing earlier bindings.
    fn bind(&mut self, handle: ItemHandle, bindings: &[Binding]);

    /// The topmost item under `point` that is bound to `binding`.
    fn bound_item_at(&self, point: Point, binding: Binding) -> Option<ItemHandle>;

    /// Size of the drawable area
    fn size(&self) -> Size;
}
