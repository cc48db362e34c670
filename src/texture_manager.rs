use std::collections::HashMap;

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::CanvasId;

/// Caches the egui texture for each canvas, keyed by the canvas's buffer
/// version so stale uploads are never reused.
pub struct TextureManager {
    /// Cache of textures by (canvas, version)
    texture_cache: HashMap<(CanvasId, u64), TextureHandle>,
    /// Tracks when each texture was last used
    last_used: HashMap<(CanvasId, u64), u64>,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    /// Maximum number of textures to cache
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets the texture for the given canvas version, generating and
    /// uploading it on a cache miss.
    pub fn get_or_create_texture<F>(
        &mut self,
        canvas_id: CanvasId,
        version: u64,
        generator: F,
        ctx: &Context,
    ) -> TextureId
    where
        F: FnOnce() -> ColorImage,
    {
        let cache_key = (canvas_id, version);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return handle.id();
        }

        self.prune_cache_if_needed();

        let image = generator();
        let name = format!("canvas_{canvas_id:?}_v{version}");
        let handle = ctx.load_texture(&name, image, TextureOptions::NEAREST);

        self.texture_cache.insert(cache_key, handle.clone());
        self.last_used.insert(cache_key, self.current_frame);

        handle.id()
    }

    /// Drops all cached textures for a canvas, e.g. when it is closed.
    pub fn invalidate_canvas(&mut self, canvas_id: CanvasId) {
        let keys_to_remove: Vec<(CanvasId, u64)> = self
            .texture_cache
            .keys()
            .filter(|(id, _)| *id == canvas_id)
            .cloned()
            .collect();

        for key in keys_to_remove {
            self.texture_cache.remove(&key);
            self.last_used.remove(&key);
        }
    }

    /// Prunes the cache if it exceeds the maximum size
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() <= self.max_cache_size {
            return;
        }

        // Collect keys and their last-used frames, oldest first
        let mut entries: Vec<((CanvasId, u64), u64)> =
            self.last_used.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() - self.max_cache_size;
        for (key, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(key);
            self.last_used.remove(key);
        }
    }

    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    fn get_texture(&self, canvas_id: CanvasId, version: u64) -> Option<&TextureHandle> {
        self.texture_cache.get(&(canvas_id, version))
    }
}
