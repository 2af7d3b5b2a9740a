// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory retained canvas.
//!
//! `DisplayList` keeps items bottom-to-top in a `Vec`, so z-order is just
//! vector order. The network canvas widget paints it directly, and the tests
//! use it as the canvas the controller drives.

use super::{Binding, CanvasSurface, ItemHandle, ItemKind};
use crate::model::Icon;
use crate::settings;
use kurbo::{Point, Rect, Size, Vec2};

/// What a display item shows
#[derive(Debug, Clone)]
pub enum ItemContent {
    Icon(Icon),
    Text(String),
}

/// One item on the canvas
#[derive(Debug, Clone)]
pub struct DisplayItem {
    handle: ItemHandle,
    content: ItemContent,
    origin: Point,
    bindings: Vec<Binding>,
}

impl DisplayItem {
    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    pub fn content(&self) -> &ItemContent {
        &self.content
    }

    pub fn kind(&self) -> ItemKind {
        match self.content {
            ItemContent::Icon(_) => ItemKind::Icon,
            ItemContent::Text(_) => ItemKind::Text,
        }
    }

    /// Top-left corner of the item bounds
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        content_size(&self.content)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size())
    }

    pub fn is_bound(&self, binding: Binding) -> bool {
        self.bindings.contains(&binding)
    }

    /// Swap the content, keeping the item centred where it was.
    fn replace_content(&mut self, content: ItemContent) {
        let center = self.bounds().center();
        self.content = content;
        self.origin = center - self.size().to_vec2() / 2.0;
    }
}

fn content_size(content: &ItemContent) -> Size {
    match content {
        ItemContent::Icon(icon) => Size::new(icon.width() as f64, icon.height() as f64),
        ItemContent::Text(text) => Size::new(
            text.chars().count() as f64 * settings::label::CHAR_WIDTH,
            settings::label::LINE_HEIGHT,
        ),
    }
}

/// Distance from a point to a rectangle (zero inside)
fn distance_to_rect(point: Point, rect: Rect) -> f64 {
    let dx = (rect.x0 - point.x).max(0.0).max(point.x - rect.x1);
    let dy = (rect.y0 - point.y).max(0.0).max(point.y - rect.y1);
    Vec2::new(dx, dy).hypot()
}

/// Retained list of canvas items, bottom to top
#[derive(Debug, Clone)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
    size: Size,
    next_handle: u64,
    /// Freed handles available for reuse (only when recycling is enabled)
    free_handles: Option<Vec<ItemHandle>>,
}

impl DisplayList {
    /// Create an empty canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            items: Vec::new(),
            size,
            next_handle: 1,
            free_handles: None,
        }
    }

    /// Create a canvas that hands out deleted handles again.
    pub fn with_handle_recycling(size: Size) -> Self {
        Self {
            free_handles: Some(Vec::new()),
            ..Self::new(size)
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from bottom to top
    pub fn items(&self) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&DisplayItem> {
        self.items.iter().find(|item| item.handle == handle)
    }

    /// Handles from bottom to top
    pub fn z_order(&self) -> Vec<ItemHandle> {
        self.items.iter().map(|item| item.handle).collect()
    }

    fn position(&self, handle: ItemHandle) -> Option<usize> {
        self.items.iter().position(|item| item.handle == handle)
    }

    fn get_mut(&mut self, handle: ItemHandle) -> Option<&mut DisplayItem> {
        self.items.iter_mut().find(|item| item.handle == handle)
    }

    fn allocate_handle(&mut self) -> ItemHandle {
        if let Some(handle) = self.free_handles.as_mut().and_then(|free| free.pop()) {
            return handle;
        }
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn push(&mut self, center: Point, content: ItemContent) -> ItemHandle {
        let handle = self.allocate_handle();
        let origin = center - content_size(&content).to_vec2() / 2.0;
        self.items.push(DisplayItem {
            handle,
            content,
            origin,
            bindings: Vec::new(),
        });
        handle
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(Size::new(
            settings::canvas::WIDTH,
            settings::canvas::HEIGHT,
        ))
    }
}

impl CanvasSurface for DisplayList {
    fn draw_icon(&mut self, center: Point, icon: &Icon) -> ItemHandle {
        self.push(center, ItemContent::Icon(icon.clone()))
    }

    fn draw_text(&mut self, center: Point, text: &str) -> ItemHandle {
        self.push(center, ItemContent::Text(text.to_string()))
    }

    fn move_to(&mut self, handle: ItemHandle, top_left: Point) {
        if let Some(item) = self.get_mut(handle) {
            item.origin = top_left;
        }
    }

    fn raise(&mut self, handle: ItemHandle) {
        if let Some(index) = self.position(handle) {
            let item = self.items.remove(index);
            self.items.push(item);
        }
    }

    fn lower(&mut self, handle: ItemHandle) {
        if let Some(index) = self.position(handle) {
            let item = self.items.remove(index);
            self.items.insert(0, item);
        }
    }

    fn delete(&mut self, handle: ItemHandle) {
        let Some(index) = self.position(handle) else {
            return;
        };
        self.items.remove(index);
        if let Some(free) = self.free_handles.as_mut() {
            free.push(handle);
        }
    }

    fn nearest_to(&self, point: Point, kind: Option<ItemKind>) -> Option<ItemHandle> {
        let mut best: Option<(f64, ItemHandle)> = None;
        // Walk top-down so the topmost item wins ties.
        for item in self.items.iter().rev() {
            if kind.is_some_and(|k| k != item.kind()) {
                continue;
            }
            let distance = distance_to_rect(point, item.bounds());
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, item.handle));
            }
        }
        best.map(|(_, handle)| handle)
    }

    fn set_item_image(&mut self, handle: ItemHandle, icon: &Icon) {
        if let Some(item) = self.get_mut(handle)
            && item.kind() == ItemKind::Icon
        {
            item.replace_content(ItemContent::Icon(icon.clone()));
        }
    }

    fn set_item_text(&mut self, handle: ItemHandle, text: &str) {
        if let Some(item) = self.get_mut(handle)
            && item.kind() == ItemKind::Text
        {
            item.replace_content(ItemContent::Text(text.to_string()));
        }
    }

    fn bind(&mut self, handle: ItemHandle, bindings: &[Binding]) {
        if let Some(item) = self.get_mut(handle) {
            item.bindings = bindings.to_vec();
        }
    }

    fn bound_item_at(&self, point: Point, binding: Binding) -> Option<ItemHandle> {
        self.items
            .iter()
            .rev()
            .find(|item| item.is_bound(binding) && item.bounds().contains(point))
            .map(|item| item.handle)
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::test_support::test_icon;

    fn canvas() -> DisplayList {
        DisplayList::new(Size::new(800.0, 800.0))
    }

    #[test]
    fn handles_start_at_one_and_increase() {
        let mut list = canvas();
        let a = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let b = list.draw_text(Point::new(100.0, 132.0), "switch-1");
        assert_eq!(a, ItemHandle(1));
        assert_eq!(b, ItemHandle(2));

        list.delete(a);
        let c = list.draw_text(Point::ZERO, "x");
        assert_eq!(c, ItemHandle(3));
    }

    #[test]
    fn recycling_reuses_deleted_handles() {
        let mut list = DisplayList::with_handle_recycling(Size::new(800.0, 800.0));
        let a = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        list.delete(a);
        let b = list.draw_icon(Point::new(300.0, 300.0), &test_icon());
        assert_eq!(a, b);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn items_are_centred_on_draw() {
        let mut list = canvas();
        let icon = list.draw_icon(Point::new(400.0, 400.0), &test_icon());
        let bounds = list.get(icon).unwrap().bounds();
        assert_eq!(bounds, Rect::new(368.0, 368.0, 432.0, 432.0));

        let text = list.draw_text(Point::new(400.0, 432.0), "pc-1");
        let bounds = list.get(text).unwrap().bounds();
        assert_eq!(bounds.center(), Point::new(400.0, 432.0));
        assert_eq!(bounds.width(), 4.0 * settings::label::CHAR_WIDTH);
    }

    #[test]
    fn move_to_places_top_left_corner() {
        let mut list = canvas();
        let icon = list.draw_icon(Point::new(400.0, 400.0), &test_icon());
        list.move_to(icon, Point::new(10.0, 20.0));
        assert_eq!(list.get(icon).unwrap().origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn raise_and_lower_restack() {
        let mut list = canvas();
        let a = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let b = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let c = list.draw_icon(Point::new(100.0, 100.0), &test_icon());

        list.raise(a);
        assert_eq!(list.z_order(), vec![b, c, a]);
        list.lower(c);
        assert_eq!(list.z_order(), vec![c, b, a]);
    }

    #[test]
    fn nearest_prefers_containing_then_topmost() {
        let mut list = canvas();
        let low = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let high = list.draw_icon(Point::new(110.0, 100.0), &test_icon());
        let far = list.draw_icon(Point::new(600.0, 600.0), &test_icon());

        assert_eq!(list.nearest_to(Point::new(100.0, 100.0), None), Some(high));
        list.raise(low);
        assert_eq!(list.nearest_to(Point::new(100.0, 100.0), None), Some(low));
        assert_eq!(list.nearest_to(Point::new(790.0, 790.0), None), Some(far));
    }

    #[test]
    fn nearest_can_filter_by_kind() {
        let mut list = canvas();
        let icon = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let label = list.draw_text(Point::new(400.0, 400.0), "router-1");

        let at_label = Point::new(400.0, 400.0);
        assert_eq!(list.nearest_to(at_label, None), Some(label));
        assert_eq!(list.nearest_to(at_label, Some(ItemKind::Icon)), Some(icon));
        assert_eq!(canvas().nearest_to(at_label, None), None);
    }

    #[test]
    fn bound_item_at_respects_bindings_and_bounds() {
        let mut list = canvas();
        let icon = list.draw_icon(Point::new(100.0, 100.0), &test_icon());
        let point = Point::new(100.0, 100.0);
        assert_eq!(list.bound_item_at(point, Binding::PrimaryPress), None);

        list.bind(icon, &[Binding::PrimaryPress]);
        assert_eq!(list.bound_item_at(point, Binding::PrimaryPress), Some(icon));
        assert_eq!(list.bound_item_at(point, Binding::SecondaryPress), None);
        assert_eq!(
            list.bound_item_at(Point::new(200.0, 200.0), Binding::PrimaryPress),
            None
        );

        list.delete(icon);
        assert_eq!(list.bound_item_at(point, Binding::PrimaryPress), None);
    }

    #[test]
    fn text_change_keeps_centre() {
        let mut list = canvas();
        let label = list.draw_text(Point::new(200.0, 200.0), "ab");
        list.set_item_text(label, "abcdef");

        let item = list.get(label).unwrap();
        assert_eq!(item.bounds().center(), Point::new(200.0, 200.0));
        match item.content() {
            ItemContent::Text(text) => assert_eq!(text, "abcdef"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn image_change_only_applies_to_icons() {
        let mut list = canvas();
        let label = list.draw_text(Point::new(200.0, 200.0), "ab");
        list.set_item_image(label, &test_icon());
        assert_eq!(list.get(label).unwrap().kind(), ItemKind::Text);
    }
}
