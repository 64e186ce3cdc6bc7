use anyhow::{anyhow, Result};
use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

use crate::draw::model::{CanvasSize, Rgba};

/// Identifies one of the working layers of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerId {
    Background,
    Draft,
    Committed,
}

/// The three same-sized premultiplied RGBA layers a canvas draws with.
#[derive(Debug, Clone)]
pub struct LayerStore {
    size: CanvasSize,
    background: Pixmap,
    draft: Pixmap,
    committed: Pixmap,
}

impl LayerStore {
    /// Allocates transparent layers. Fails on a zero-sized canvas.
    pub fn new(size: CanvasSize) -> Result<Self> {
        let blank = || {
            Pixmap::new(size.width, size.height)
                .ok_or_else(|| anyhow!("cannot allocate {}x{} layer", size.width, size.height))
        };
        Ok(Self {
            size,
            background: blank()?,
            draft: blank()?,
            committed: blank()?,
        })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn layer(&self, id: LayerId) -> &Pixmap {
        match id {
            LayerId::Background => &self.background,
            LayerId::Draft => &self.draft,
            LayerId::Committed => &self.committed,
        }
    }

    pub fn layer_mut(&mut self, id: LayerId) -> &mut Pixmap {
        match id {
            LayerId::Background => &mut self.background,
            LayerId::Draft => &mut self.draft,
            LayerId::Committed => &mut self.committed,
        }
    }

    pub fn background(&self) -> &Pixmap {
        &self.background
    }

    pub fn committed(&self) -> &Pixmap {
        &self.committed
    }

    pub fn committed_mut(&mut self) -> &mut Pixmap {
        &mut self.committed
    }

    /// Replaces every pixel of `id`.
    pub fn fill(&mut self, id: LayerId, color: Rgba) {
        self.layer_mut(id).fill(color.to_skia());
    }

    /// Full-buffer copy with replace semantics, alpha included.
    pub fn copy(&mut self, src: LayerId, dst: LayerId) {
        if src == dst {
            return;
        }
        let source = self.layer(src).data().to_vec();
        self.layer_mut(dst).data_mut().copy_from_slice(&source);
    }

    /// Writes an external image of canvas size into `dst`.
    pub fn load(&mut self, dst: LayerId, image: &Pixmap) {
        assert_eq!(
            (image.width(), image.height()),
            (self.size.width, self.size.height),
            "layer image must match the canvas size"
        );
        self.layer_mut(dst).data_mut().copy_from_slice(image.data());
    }

    /// Restores a history snapshot into the committed and draft layers.
    pub fn restore(&mut self, snapshot: &Pixmap) {
        self.load(LayerId::Committed, snapshot);
        self.load(LayerId::Draft, snapshot);
    }
}

/// Premultiplies a captured image into a layer-compatible pixmap.
pub fn pixmap_from_image(image: &RgbaImage) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())
        .ok_or_else(|| anyhow!("captured image is empty ({}x{})", image.width(), image.height()))?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}
