// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the NetCanvas network editor

pub mod network_canvas;

pub use network_canvas::network_canvas_view;
