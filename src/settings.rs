// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
/// Canvas width in pixels (also the drag clamp on the x axis)
const CANVAS_WIDTH: f64 = 800.0;

/// Canvas height in pixels (also the drag clamp on the y axis)
const CANVAS_HEIGHT: f64 = 800.0;

// ============================================================================
// ICON SETTINGS
// ============================================================================
/// Side of the square every icon is resized to
const ICON_SIZE: u32 = 64;

/// Directory holding `{kind}.png` default icons
const ICON_DEFAULT_DIR: &str = "assets/icons";

// ============================================================================
// LABEL SETTINGS
// ============================================================================
/// Approximate advance of one label character, used for label bounds
const LABEL_CHAR_WIDTH: f64 = 7.0;

/// Label line height
const LABEL_LINE_HEIGHT: f64 = 14.0;

/// Label font size
const LABEL_FONT_SIZE: f32 = 12.0;

// ============================================================================
// POINTER SETTINGS
// ============================================================================
/// Two presses within this time count as a double click
const DOUBLE_CLICK_TIME_MS: u128 = 500;

/// ...and within this distance
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Canvas geometry
pub mod canvas {
    pub const WIDTH: f64 = super::CANVAS_WIDTH;
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;
}

/// Equipment icons
pub mod icon {
    /// Icons are square; this is their side in pixels
    pub const SIZE: u32 = super::ICON_SIZE;

    pub const DEFAULT_DIR: &str = super::ICON_DEFAULT_DIR;
}

/// Equipment name labels
pub mod label {
    pub const CHAR_WIDTH: f64 = super::LABEL_CHAR_WIDTH;
    pub const LINE_HEIGHT: f64 = super::LABEL_LINE_HEIGHT;
    pub const FONT_SIZE: f32 = super::LABEL_FONT_SIZE;
}

/// Double-click detection
pub mod double_click {
    pub const TIME_MS: u128 = super::DOUBLE_CLICK_TIME_MS;
    pub const DISTANCE_PX: f64 = super::DOUBLE_CLICK_DISTANCE_PX;
}
