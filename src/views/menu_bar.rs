// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Menu bar - File and Edit menus above the canvas

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_row, label, sized_box};

use crate::data::AppState;
use crate::model::EquipmentKind;
use crate::theme;

// ===== Menu Bar =====

/// File menu with export, Edit menu with one insert entry per kind
pub fn menu_bar() -> impl WidgetView<AppState> + use<> {
    let [switch, router, pc, mobile] = EquipmentKind::ALL;

    sized_box(
        flex_row((
            menu_title("File"),
            menu_button("Export into PNG", |state: &mut AppState| state.export_png()),
            menu_title("Edit"),
            insert_button(switch),
            insert_button(router),
            insert_button(pc),
            insert_button(mobile),
        ))
        .gap(theme::size::MENU_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .padding(6.0),
    )
    .expand_width()
    .height(theme::size::MENU_BAR_HEIGHT.px())
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(theme::size::PANEL_BORDER_WIDTH)
}

// ===== Helpers =====

fn menu_title(text: &'static str) -> impl WidgetView<AppState> + use<> {
    label(text)
        .text_size(theme::size::MENU_TEXT)
        .color(theme::text::SECONDARY)
}

fn insert_button(kind: EquipmentKind) -> impl WidgetView<AppState> + use<> {
    menu_button(kind.menu_label(), move |state: &mut AppState| {
        state.insert_equipment(kind);
    })
}

fn menu_button<F>(text: &'static str, on_click: F) -> impl WidgetView<AppState>
where
    F: Fn(&mut AppState) + Send + Sync + 'static,
{
    button(
        label(text)
            .text_size(theme::size::MENU_TEXT)
            .color(theme::text::PRIMARY),
        on_click,
    )
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .corner_radius(theme::size::PANEL_RADIUS)
}
