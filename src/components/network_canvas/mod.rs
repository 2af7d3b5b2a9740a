// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Network canvas widget - draws the equipment display list and turns
//! raw pointer events into `PointerInput` for the controller

mod paint;
mod pointer;
mod view;

pub use view::network_canvas_view;

use crate::editing::PointerInput;
use crate::settings;
use crate::surface::{DisplayList, ItemHandle};
use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;

/// Action emitted by the canvas for every interpreted pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasInput(pub PointerInput);

/// The network diagram canvas widget
pub struct NetworkCanvasWidget {
    /// Snapshot of the display list to draw
    pub list: Arc<DisplayList>,

    /// Item drawn with a focus outline
    pub focused: Option<ItemHandle>,

    /// Primary button is down (drag in progress)
    pub(super) primary_held: bool,

    /// Double-click detection
    pub(super) last_click_time: Option<std::time::Instant>,
    pub(super) last_click_position: Option<Point>,
}

impl NetworkCanvasWidget {
    pub fn new(list: Arc<DisplayList>, focused: Option<ItemHandle>) -> Self {
        Self {
            list,
            focused,
            primary_held: false,
            last_click_time: None,
            last_click_position: None,
        }
    }

    fn preferred_size() -> Size {
        Size::new(settings::canvas::WIDTH, settings::canvas::HEIGHT)
    }
}

impl Widget for NetworkCanvasWidget {
    type Action = CanvasInput;

    fn accepts_focus(&self) -> bool {
        false
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.constrain(Self::preferred_size())
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_background(scene, ctx.size());
        self.paint_items(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_primary_down(ctx, state);
            }

            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Secondary),
                state,
                ..
            }) => {
                self.handle_secondary_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_primary_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!("Network canvas: {} items", self.list.len()));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
