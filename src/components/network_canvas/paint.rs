// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for NetworkCanvasWidget

use super::NetworkCanvasWidget;
use crate::model::Icon;
use crate::settings;
use crate::surface::{DisplayItem, ItemContent};
use crate::theme;
use kurbo::{Affine, Point, Rect, Stroke};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;
use parley::{FontContext, GenericFamily, LayoutContext};
use peniko::ImageBrush;

impl NetworkCanvasWidget {
    // ============================================================================
    // PAINT HELPER METHODS
    // ============================================================================

    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);
    }

    /// Paint every item bottom to top
    pub(super) fn paint_items(&self, scene: &mut Scene) {
        let mut font_cx = FontContext::default();
        let mut layout_cx = LayoutContext::new();
        let brushes = vec![Brush::Solid(theme::canvas::LABEL_TEXT)];

        for item in self.list.items() {
            match item.content() {
                ItemContent::Icon(icon) => {
                    paint_icon(scene, icon, item.origin());
                    if self.focused == Some(item.handle()) {
                        paint_focus_outline(scene, item.bounds());
                    }
                }
                ItemContent::Text(text) => {
                    paint_label(scene, &mut font_cx, &mut layout_cx, &brushes, item, text);
                }
            }
        }
    }
}

fn paint_icon(scene: &mut Scene, icon: &Icon, origin: Point) {
    let brush = ImageBrush::new(icon.image_data.clone());
    scene.draw_image(&brush, Affine::translate(origin.to_vec2()));
}

fn paint_focus_outline(scene: &mut Scene, bounds: Rect) {
    let stroke = Stroke::new(theme::size::FOCUS_OUTLINE_WIDTH);
    scene.stroke(
        &stroke,
        Affine::IDENTITY,
        &Brush::Solid(theme::canvas::FOCUS_OUTLINE),
        None,
        &bounds.inflate(2.0, 2.0),
    );
}

/// Draw a label centred horizontally on its item bounds
fn paint_label(
    scene: &mut Scene,
    font_cx: &mut FontContext,
    layout_cx: &mut LayoutContext<BrushIndex>,
    brushes: &[Brush],
    item: &DisplayItem,
    text: &str,
) {
    if text.is_empty() {
        return;
    }

    let mut builder = layout_cx.ranged_builder(font_cx, text, 1.0, false);
    builder.push_default(StyleProperty::FontSize(settings::label::FONT_SIZE));
    builder.push_default(StyleProperty::FontStack(parley::FontStack::Single(
        parley::FontFamily::Generic(GenericFamily::SansSerif),
    )));
    builder.push_default(StyleProperty::Brush(BrushIndex(0)));
    let mut layout = builder.build(text);
    layout.break_all_lines(None);

    let bounds = item.bounds();
    let x = bounds.center().x - layout.width() as f64 / 2.0;
    render_text(scene, Affine::translate((x, bounds.y0)), &layout, brushes, false);
}
