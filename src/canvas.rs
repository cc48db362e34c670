use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use uuid::Uuid;

use crate::error::CanvasError;

/// Stable handle for a canvas in the workspace registry.
///
/// Everything that needs to point at a canvas (current-canvas tracking, close
/// prompts, texture cache keys) holds one of these instead of a reference, so
/// there are no ownership ties between the registry and its observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasId(Uuid);

impl CanvasId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a save attempt that may involve a path prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The user dismissed the path prompt. Not an error: dirty state and the
    /// bound path are left untouched.
    Cancelled,
}

/// One image document: a committed pixel buffer, a scratch buffer shown while
/// a stroke is in progress, and the saved/dirty bookkeeping around it.
#[derive(Debug)]
pub struct Canvas {
    id: CanvasId,

    /// Committed pixels, shown whenever no stroke is active.
    image: RgbaImage,
    /// Stroke preview buffer. Only consulted while `double_buffer` is set;
    /// resynced from `image` after every presented frame so previews never
    /// accumulate uncommitted pixels.
    temp_image: RgbaImage,
    double_buffer: bool,

    saved: bool,
    file_path: Option<PathBuf>,
    file_name: String,
    title: String,

    /// Bumped on every visible mutation; used as a texture-cache key.
    version: u64,
}

impl Canvas {
    /// Create a blank canvas filled with the given background color.
    pub fn new(width: u32, height: u32, background: Rgba<u8>, name: &str) -> Self {
        let image = RgbaImage::from_pixel(width, height, background);
        let temp_image = image.clone();
        Self {
            id: CanvasId::new(),
            image,
            temp_image,
            double_buffer: false,
            saved: true,
            file_path: None,
            file_name: name.to_owned(),
            title: name.to_owned(),
            version: 0,
        }
    }

    /// Decode an image file into a new canvas. Decode and read failures are
    /// reported to the caller rather than producing a blank canvas.
    pub fn open(path: &Path) -> Result<Self, CanvasError> {
        let decoded = image::open(path).map_err(|source| CanvasError::Decode {
            path: path.to_owned(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_owned());

        log::info!("opened {} ({}x{})", path.display(), decoded.width(), decoded.height());

        let mut canvas = Self::new(1, 1, Rgba([0, 0, 0, 0]), &name);
        canvas.image = decoded.to_rgba8();
        canvas.temp_image = canvas.image.clone();
        canvas.file_path = Some(path.to_owned());
        Ok(canvas)
    }

    pub fn id(&self) -> CanvasId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Display name plus the `" *"` dirty suffix when unsaved.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_stroke_active(&self) -> bool {
        self.double_buffer
    }

    /// Enter the double-buffered stroke state. The preview buffer starts from
    /// the committed pixels.
    pub fn begin_stroke(&mut self) {
        if !self.double_buffer {
            self.temp_image = self.image.clone();
            self.double_buffer = true;
            self.version += 1;
        }
    }

    /// Leave the double-buffered stroke state. The preview buffer is simply
    /// no longer consulted; nothing is committed here.
    pub fn end_stroke(&mut self) {
        if self.double_buffer {
            self.double_buffer = false;
            self.version += 1;
        }
    }

    /// The buffer a tool should draw into: the preview buffer while a stroke
    /// is active, the committed buffer otherwise. Borrowing for drawing
    /// implies a pending mutation, so this marks the canvas dirty.
    pub fn active_image_mut(&mut self) -> &mut RgbaImage {
        self.mark_dirty();
        self.version += 1;
        if self.double_buffer {
            &mut self.temp_image
        } else {
            &mut self.image
        }
    }

    /// Read-only view of the committed pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the buffer to present this frame. While a stroke is active this
    /// yields the preview buffer and resyncs it from the committed pixels, so
    /// the next preview frame starts clean; otherwise it is a copy of the
    /// committed buffer.
    pub fn present(&mut self) -> RgbaImage {
        if self.double_buffer {
            std::mem::replace(&mut self.temp_image, self.image.clone())
        } else {
            self.image.clone()
        }
    }

    /// Idempotent: the title suffix changes only on the saved -> dirty
    /// transition.
    pub fn mark_dirty(&mut self) {
        if self.saved {
            self.saved = false;
            self.title = format!("{} *", self.file_name);
        }
    }

    /// Idempotent: the title suffix changes only on the dirty -> saved
    /// transition.
    pub fn mark_saved(&mut self) {
        if !self.saved {
            self.saved = true;
            self.title = self.file_name.clone();
        }
    }

    /// Save to the bound path, asking `pick_path` for one when unbound. The
    /// encoding format follows the chosen extension. A dismissed prompt is a
    /// no-op that leaves the dirty flag and bound path untouched.
    pub fn save_with<F>(&mut self, pick_path: F) -> Result<SaveOutcome, CanvasError>
    where
        F: FnOnce(&Canvas) -> Option<PathBuf>,
    {
        let path = match &self.file_path {
            Some(path) => path.clone(),
            None => match pick_path(self) {
                Some(path) => path,
                None => {
                    log::debug!("save of {:?} cancelled at path prompt", self.file_name);
                    return Ok(SaveOutcome::Cancelled);
                }
            },
        };
        self.write_to(&path)?;
        self.file_path = Some(path);
        self.mark_saved();
        Ok(SaveOutcome::Saved)
    }

    /// Like [`save_with`](Self::save_with) but always prompts, even when a
    /// path is already bound.
    pub fn save_as_with<F>(&mut self, pick_path: F) -> Result<SaveOutcome, CanvasError>
    where
        F: FnOnce(&Canvas) -> Option<PathBuf>,
    {
        let Some(path) = pick_path(self) else {
            log::debug!("save-as of {:?} cancelled at path prompt", self.file_name);
            return Ok(SaveOutcome::Cancelled);
        };
        self.write_to(&path)?;
        self.file_path = Some(path);
        self.mark_saved();
        Ok(SaveOutcome::Saved)
    }

    fn write_to(&self, path: &Path) -> Result<(), CanvasError> {
        self.image.save(path).map_err(|source| CanvasError::Encode {
            path: path.to_owned(),
            source,
        })?;
        log::info!("saved {:?} to {}", self.file_name, path.display());
        Ok(())
    }
}
