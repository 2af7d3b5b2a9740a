// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// CANVAS
// ============================================================================
// The drawing area stays white so exported sketches look like paper
const CANVAS_BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const CANVAS_LABEL_TEXT: Color = BASE_A;
const CANVAS_FOCUS_OUTLINE: Color = Color::from_rgb8(0x3d, 0x8b, 0xfd);

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;
const ERROR_UI_TEXT: Color = Color::from_rgb8(0xff, 0x7a, 0x6e);

// ============================================================================
// UI PANELS (menu bar, context menu, prompt)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;
const MENU_ITEM_DISABLED_TEXT: Color = BASE_F;
const PROMPT_TEXT: Color = BASE_O;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Network canvas colors
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
    pub const LABEL_TEXT: Color = super::CANVAS_LABEL_TEXT;
    pub const FOCUS_OUTLINE: Color = super::CANVAS_FOCUS_OUTLINE;
}

/// UI text colors
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const ERROR: Color = super::ERROR_UI_TEXT;
    pub const PROMPT: Color = super::PROMPT_TEXT;
}

/// Panel colors
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
}

/// Menu colors
pub mod menu {
    use super::Color;
    pub const DISABLED_TEXT: Color = super::MENU_ITEM_DISABLED_TEXT;
}

/// Sizes and spacing
pub mod size {
    pub const PANEL_RADIUS: f64 = 6.0;
    pub const PANEL_BORDER_WIDTH: f64 = 1.5;
    pub const FOCUS_OUTLINE_WIDTH: f64 = 1.5;
    pub const MENU_TEXT: f32 = 14.0;
    pub const MENU_GAP: f64 = 6.0;
    pub const MENU_BAR_HEIGHT: f64 = 44.0;
    pub const STATUS_LINE_HEIGHT: f64 = 24.0;
    pub const CONTEXT_MENU_WIDTH: f64 = 200.0;
    pub const PROMPT_WIDTH: f64 = 280.0;
}
