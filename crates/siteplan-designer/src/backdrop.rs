//! Imported background image.
//!
//! A floor plan photo or scan can be laid under the sketch. It is stretched
//! to the canvas, drawn translucent and never saved with the plan.

use image::imageops::FilterType;
use image::RgbaImage;
use siteplan_core::ExportError;
use std::path::Path;
use tiny_skia::{IntSize, Pixmap};

/// Decoded background image, already sized to the canvas.
#[derive(Debug, Clone)]
pub struct Backdrop {
    pixmap: Pixmap,
}

impl Backdrop {
    /// Decodes an image (PNG, JPEG, ...) and stretches it to `width` x `height`.
    pub fn from_bytes(bytes: &[u8], width: u32, height: u32) -> Result<Self, ExportError> {
        let img = image::load_from_memory(bytes).map_err(|e| ExportError::Decode {
            reason: e.to_string(),
        })?;
        let resized = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();
        Self::from_rgba(resized)
    }

    pub fn from_path(path: impl AsRef<Path>, width: u32, height: u32) -> siteplan_core::Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let backdrop = Self::from_bytes(&bytes, width, height)?;
        tracing::info!("Loaded backdrop {}", path.as_ref().display());
        Ok(backdrop)
    }

    fn from_rgba(img: RgbaImage) -> Result<Self, ExportError> {
        let (width, height) = img.dimensions();
        let size = IntSize::from_wh(width, height).ok_or(ExportError::Surface { width, height })?;

        let mut data = img.into_raw();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * a + 127) / 255) as u8;
            }
        }
        let pixmap =
            Pixmap::from_vec(data, size).ok_or(ExportError::Surface { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
