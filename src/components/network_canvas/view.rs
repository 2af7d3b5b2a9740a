// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for NetworkCanvasWidget

use super::{CanvasInput, NetworkCanvasWidget};
use crate::editing::PointerInput;
use crate::surface::{DisplayList, ItemHandle};
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view over a display list snapshot
///
/// The callback receives every pointer event the canvas interprets, in
/// canvas coordinates.
pub fn network_canvas_view<State, F>(
    list: Arc<DisplayList>,
    focused: Option<ItemHandle>,
    on_input: F,
) -> NetworkCanvasView<State, F>
where
    F: Fn(&mut State, PointerInput),
{
    NetworkCanvasView {
        list,
        focused,
        on_input,
        phantom: PhantomData,
    }
}

/// The Xilem View for NetworkCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct NetworkCanvasView<State, F> {
    list: Arc<DisplayList>,
    focused: Option<ItemHandle>,
    on_input: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for NetworkCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, PointerInput) + 'static> View<State, (), ViewCtx>
    for NetworkCanvasView<State, F>
{
    type Element = Pod<NetworkCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = NetworkCanvasWidget::new(self.list.clone(), self.focused);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if Arc::ptr_eq(&self.list, &prev.list) && self.focused == prev.focused {
            return;
        }

        let mut widget = element.downcast::<NetworkCanvasWidget>();
        widget.widget.list = self.list.clone();
        widget.widget.focused = self.focused;
        widget.ctx.request_render();
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<CanvasInput>() {
            Some(input) => {
                (self.on_input)(app_state, input.0);
                // Propagate so the whole app rebuilds from the new state
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
