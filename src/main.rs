// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! NetCanvas: a network topology sketcher built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    netcanvas::run(EventLoop::with_user_event())
}
