// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Network view - menu bar, canvas, and the floating context menu and
//! rename prompt

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, ZStackExt, button, flex_col, label, sized_box,
    text_input, transformed, zstack,
};

use super::menu_bar;
use crate::components::network_canvas_view;
use crate::data::AppState;
use crate::editing::ContextAction;
use crate::theme;

// ===== Network Page =====

/// Menu bar over the canvas, with overlays layered on top
pub fn network_page(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let canvas = network_canvas_view(
        state.canvas_snapshot(),
        state.focused_item(),
        |state: &mut AppState, input| state.handle_pointer(input),
    );

    let anchor = state.controller.context_menu().anchor();
    let menu_offset = anchor.map_or((0.0, 0.0), |a| (a.x, a.y + theme::size::MENU_BAR_HEIGHT));
    let context_menu = match anchor {
        Some(_) => Either::A(context_menu_panel()),
        None => Either::B(label("")),
    };

    let prompt = if state.is_rename_open() {
        Either::A(rename_prompt(state.rename_text.clone()))
    } else {
        Either::B(label(""))
    };

    zstack((
        // Background: menu bar, canvas and status line
        flex_col((menu_bar(), canvas, status_line(state)))
            .gap(0.px())
            .cross_axis_alignment(CrossAxisAlignment::Start),
        // Context menu at the right-click point
        transformed(context_menu)
            .translate(menu_offset)
            .alignment(ChildAlignment::SelfAligned(UnitPoint::TOP_LEFT)),
        // Rename prompt in the middle of the window
        transformed(prompt).alignment(ChildAlignment::SelfAligned(UnitPoint::CENTER)),
    ))
}

// ===== Overlays =====

fn context_menu_panel() -> impl WidgetView<AppState> + use<> {
    let [name, icon, link, link_to_this] = ContextAction::ALL;

    sized_box(
        flex_col((
            context_entry(name),
            context_entry(icon),
            context_entry(link),
            context_entry(link_to_this),
        ))
        .gap(2.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .padding(4.0),
    )
    .width(theme::size::CONTEXT_MENU_WIDTH.px())
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// A clickable entry, or a greyed label for entries that are not available
fn context_entry(action: ContextAction) -> impl WidgetView<AppState> + use<> {
    if !action.is_enabled() {
        return Either::B(
            sized_box(
                label(action.label())
                    .text_size(theme::size::MENU_TEXT)
                    .color(theme::menu::DISABLED_TEXT),
            )
            .padding(6.0),
        );
    }

    Either::A(
        button(
            label(action.label())
                .text_size(theme::size::MENU_TEXT)
                .color(theme::text::PRIMARY),
            move |state: &mut AppState| state.run_context_action(action),
        )
        .background_color(theme::panel::BACKGROUND)
        .border_color(theme::panel::BACKGROUND),
    )
}

fn rename_prompt(text: String) -> impl WidgetView<AppState> + use<> {
    sized_box(
        flex_col((
            label("New name")
                .text_size(theme::size::MENU_TEXT)
                .color(theme::text::PROMPT),
            text_input(text, |state: &mut AppState, new_value| {
                state.set_rename_text(new_value);
            }),
            button(
                label("Submit")
                    .text_size(theme::size::MENU_TEXT)
                    .color(theme::text::PRIMARY),
                |state: &mut AppState| state.submit_rename(),
            )
            .border_color(theme::panel::OUTLINE),
        ))
        .gap(8.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .padding(12.0),
    )
    .width(theme::size::PROMPT_WIDTH.px())
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
    .corner_radius(theme::size::PANEL_RADIUS)
}

// ===== Status Line =====

fn status_line(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let line = match &state.error_message {
        Some(error) => Either::A(
            label(error.clone())
                .text_size(theme::size::MENU_TEXT)
                .color(theme::text::ERROR),
        ),
        None => Either::B(
            label(state.status_message.clone().unwrap_or_default())
                .text_size(theme::size::MENU_TEXT)
                .color(theme::text::SECONDARY),
        ),
    };
    sized_box(line)
        .height(theme::size::STATUS_LINE_HEIGHT.px())
        .padding(4.0)
}
