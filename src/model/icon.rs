// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Equipment icons and the loaders that produce them.
//!
//! Icons are decoded once to RGBA8, resized to the fixed square icon size, and
//! wrapped in a `peniko::ImageData` so the canvas can hand them to Vello
//! without another conversion. The pixel blob is reference counted, so cloning
//! an `Icon` into the display list is cheap.

use crate::error::CanvasError;
use crate::model::EquipmentKind;
use crate::settings;
use image::imageops::FilterType;
use peniko::{Blob, ImageData, ImageFormat};
use std::path::{Path, PathBuf};

/// A decoded, display-ready equipment icon
#[derive(Debug, Clone)]
pub struct Icon {
    /// RGBA8 pixel data for Vello rendering.
    pub image_data: ImageData,
    /// Where the pixels came from (file path or a synthetic name).
    pub source: PathBuf,
}

impl Icon {
    /// Wrap already-decoded pixels, resizing them to the icon size.
    pub fn from_rgba(rgba: image::RgbaImage, source: impl Into<PathBuf>) -> Self {
        let side = settings::icon::SIZE;
        let rgba = if rgba.width() == side && rgba.height() == side {
            rgba
        } else {
            image::imageops::resize(&rgba, side, side, FilterType::Triangle)
        };
        let width = rgba.width();
        let height = rgba.height();

        Self {
            image_data: ImageData {
                data: Blob::from(rgba.into_raw()),
                format: ImageFormat::Rgba8,
                alpha_type: peniko::ImageAlphaType::Alpha,
                width,
                height,
            },
            source: source.into(),
        }
    }

    /// Decode an image file into an icon.
    pub fn open(path: &Path) -> Result<Self, CanvasError> {
        let img = image::open(path).map_err(|e| CanvasError::icon_load(path, e))?;
        Ok(Self::from_rgba(img.to_rgba8(), path))
    }

    pub fn width(&self) -> u32 {
        self.image_data.width
    }

    pub fn height(&self) -> u32 {
        self.image_data.height
    }

    /// True if both icons were decoded from the same pixel allocation.
    pub fn same_pixels(&self, other: &Icon) -> bool {
        self.image_data.data.id() == other.image_data.data.id()
    }
}

/// Source of icon images for equipment
pub trait IconLoader {
    /// Load the default icon for a kind of equipment.
    fn load_kind(&self, kind: EquipmentKind) -> Result<Icon, CanvasError>;

    /// Load a user-chosen icon file.
    fn load_path(&self, path: &Path) -> Result<Icon, CanvasError>;
}

/// Loads icons from `{icon_dir}/{kind}.png` on disk
#[derive(Debug, Clone)]
pub struct FileIconLoader {
    icon_dir: PathBuf,
}

impl FileIconLoader {
    pub fn new(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            icon_dir: icon_dir.into(),
        }
    }

    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }

    /// Path of the default icon file for a kind
    pub fn kind_path(&self, kind: EquipmentKind) -> PathBuf {
        self.icon_dir.join(format!("{}.png", kind.as_str()))
    }
}

impl Default for FileIconLoader {
    fn default() -> Self {
        Self::new(settings::icon::DEFAULT_DIR)
    }
}

impl IconLoader for FileIconLoader {
    fn load_kind(&self, kind: EquipmentKind) -> Result<Icon, CanvasError> {
        self.load_path(&self.kind_path(kind))
    }

    fn load_path(&self, path: &Path) -> Result<Icon, CanvasError> {
        let icon = Icon::open(path)?;
        tracing::debug!("Loaded icon {}", path.display());
        Ok(icon)
    }
}
