// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by canvas operations.
//!
//! All of these are local to the operation that raised them. The app shell
//! reports them in the status line and keeps running.

use crate::model::EquipmentId;
use crate::surface::ItemHandle;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("unsupported equipment type `{0}` (expected switch, router, pc or mobile)")]
    InvalidKind(String),
    #[error("failed to load icon `{}`: {reason}", path.display())]
    IconLoadFailed { path: PathBuf, reason: String },
    #[error("canvas item {0} is not a tracked equipment")]
    UnknownHandle(ItemHandle),
    #[error("equipment {0} does not exist")]
    UnknownEquipment(EquipmentId),
    #[error("there is no equipment on the canvas to act on")]
    NoTarget,
    #[error("another prompt is already open")]
    PromptBusy,
}

impl CanvasError {
    pub(crate) fn icon_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::IconLoadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
