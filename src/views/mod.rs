// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Application views

mod menu_bar;
mod network;

pub use menu_bar::menu_bar;
pub use network::network_page;
