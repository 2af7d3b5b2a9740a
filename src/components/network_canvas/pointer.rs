// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for NetworkCanvasWidget

use super::{CanvasInput, NetworkCanvasWidget};
use crate::editing::PointerInput;
use crate::settings;
use kurbo::Point;
use masonry::core::{EventCtx, PointerState};
use std::time::Instant;

impl NetworkCanvasWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub(super) fn handle_primary_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.capture_pointer();
        self.primary_held = true;

        let local_pos = ctx.local_position(state.position);
        let input = if self.is_double_click(local_pos, Instant::now()) {
            tracing::debug!("Double-click at ({}, {})", local_pos.x, local_pos.y);
            PointerInput::DoubleClick(local_pos)
        } else {
            PointerInput::Press(local_pos)
        };
        self.emit(ctx, input);
    }

    pub(super) fn handle_secondary_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let local_pos = ctx.local_position(state.position);
        self.emit(ctx, PointerInput::SecondaryPress(local_pos));
    }

    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let local_pos = ctx.local_position(current.position);
        self.emit(
            ctx,
            PointerInput::Moved {
                position: local_pos,
                primary_held: self.primary_held,
            },
        );
    }

    pub(super) fn handle_primary_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        self.primary_held = false;
        ctx.release_pointer();

        let local_pos = ctx.local_position(state.position);
        self.emit(ctx, PointerInput::Release(local_pos));
    }

    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        if !self.primary_held {
            return;
        }
        self.primary_held = false;
        let last = self.last_click_position.unwrap_or(Point::ZERO);
        self.emit(ctx, PointerInput::Release(last));
    }

    fn emit(&self, ctx: &mut EventCtx<'_>, input: PointerInput) {
        ctx.submit_action::<CanvasInput>(CanvasInput(input));
        ctx.request_render();
    }

    /// Check whether a press at `position` completes a double click
    ///
    /// Always records the press, so a third quick press can pair with the
    /// second.
    pub(super) fn is_double_click(&mut self, position: Point, now: Instant) -> bool {
        let is_double = if let (Some(last_time), Some(last_pos)) =
            (self.last_click_time, self.last_click_position)
        {
            let time_diff = now.duration_since(last_time).as_millis();
            time_diff < settings::double_click::TIME_MS
                && position.distance(last_pos) < settings::double_click::DISTANCE_PX
        } else {
            false
        };

        self.last_click_time = Some(now);
        self.last_click_position = Some(position);
        is_double
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;
    use std::sync::Arc;
    use std::time::Duration;

    fn widget() -> NetworkCanvasWidget {
        NetworkCanvasWidget::new(Arc::new(DisplayList::default()), None)
    }

    #[test]
    fn quick_close_presses_are_a_double_click() {
        let mut w = widget();
        let t0 = Instant::now();
        assert!(!w.is_double_click(Point::new(100.0, 100.0), t0));
        assert!(w.is_double_click(
            Point::new(103.0, 104.0),
            t0 + Duration::from_millis(200)
        ));
    }

    #[test]
    fn slow_or_distant_presses_are_single_clicks() {
        let mut w = widget();
        let t0 = Instant::now();
        w.is_double_click(Point::new(100.0, 100.0), t0);
        assert!(!w.is_double_click(
            Point::new(100.0, 100.0),
            t0 + Duration::from_millis(600)
        ));

        let t1 = t0 + Duration::from_millis(1000);
        w.is_double_click(Point::new(100.0, 100.0), t1);
        assert!(!w.is_double_click(
            Point::new(150.0, 100.0),
            t1 + Duration::from_millis(100)
        ));
    }
}
