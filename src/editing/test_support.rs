// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for icon loading and prompts.

use super::prompt::{FilePrompt, TextPrompt};
use crate::error::CanvasError;
use crate::model::{EquipmentKind, Icon, IconLoader};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// A fresh 64x64 icon backed by its own pixel buffer
pub fn test_icon() -> Icon {
    Icon::from_rgba(
        image::RgbaImage::from_pixel(64, 64, image::Rgba([0x40, 0x80, 0xc0, 0xff])),
        "test-icon",
    )
}

/// In-memory icon loader with configurable failures
#[derive(Debug, Default, Clone)]
pub struct TestIcons {
    failing_kinds: Vec<EquipmentKind>,
    failing_paths: Vec<PathBuf>,
}

impl TestIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_kind(mut self, kind: EquipmentKind) -> Self {
        self.failing_kinds.push(kind);
        self
    }

    pub fn failing_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_paths.push(path.into());
        self
    }
}

impl IconLoader for TestIcons {
    fn load_kind(&self, kind: EquipmentKind) -> Result<Icon, CanvasError> {
        let path = PathBuf::from(format!("{kind}.png"));
        if self.failing_kinds.contains(&kind) {
            return Err(CanvasError::icon_load(path, "missing"));
        }
        let mut icon = test_icon();
        icon.source = path;
        Ok(icon)
    }

    fn load_path(&self, path: &Path) -> Result<Icon, CanvasError> {
        if self.failing_paths.iter().any(|p| p == path) {
            return Err(CanvasError::icon_load(path, "corrupt"));
        }
        let mut icon = test_icon();
        icon.source = path.to_path_buf();
        Ok(icon)
    }
}

/// Prompt that replays canned answers and counts how often it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    texts: VecDeque<String>,
    paths: VecDeque<Option<PathBuf>>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn text(answer: &str) -> Self {
        Self {
            texts: VecDeque::from([answer.to_string()]),
            ..Self::default()
        }
    }

    pub fn path(answer: Option<&str>) -> Self {
        Self {
            paths: VecDeque::from([answer.map(PathBuf::from)]),
            ..Self::default()
        }
    }
}

impl TextPrompt for ScriptedPrompt {
    fn prompt_text(&mut self) -> String {
        self.asked += 1;
        self.texts.pop_front().unwrap_or_default()
    }
}

impl FilePrompt for ScriptedPrompt {
    fn prompt_file_path(&mut self) -> Option<PathBuf> {
        self.asked += 1;
        self.paths.pop_front().flatten()
    }
}
