use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use log::debug;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::mpsc::{self as std_mpsc, Receiver, Sender};
use tokio::runtime::Handle;

const MAX_EDGE: u32 = 512;
const MAX_CACHED: usize = 64;

type Decoded = (String, Option<ColorImage>);

/// Previews for `file://` thumbnail references.
///
/// Decoding runs on the runtime's blocking pool; finished images arrive over a
/// channel and are turned into textures by [`ThumbnailCache::receive`].
pub struct ThumbnailCache {
    textures: LruCache<String, TextureHandle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    sender: Sender<Decoded>,
    receiver: Receiver<Decoded>,
    runtime: Handle,
}

impl ThumbnailCache {
    pub fn new(runtime: Handle) -> Self {
        let (sender, receiver) = std_mpsc::channel();
        Self {
            textures: LruCache::new(NonZeroUsize::new(MAX_CACHED).unwrap_or(NonZeroUsize::MIN)),
            pending: HashSet::new(),
            failed: HashSet::new(),
            sender,
            receiver,
            runtime,
        }
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Returns the texture if it is ready, otherwise starts decoding it once.
    pub fn get(&mut self, reference: &str) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(reference) {
            return Some(texture.clone());
        }
        if self.failed.contains(reference) || self.pending.contains(reference) {
            return None;
        }
        let path = reference.strip_prefix("file://")?.to_string();

        self.pending.insert(reference.to_string());
        let sender = self.sender.clone();
        let reference = reference.to_string();
        self.runtime.spawn_blocking(move || {
            let image = Self::decode(&path);
            sender.send((reference, image)).unwrap_or_default();
        });
        None
    }

    /// Uploads every image decoded since the last frame.
    pub fn receive(&mut self, ctx: &egui::Context) {
        while let Ok((reference, image)) = self.receiver.try_recv() {
            self.pending.remove(&reference);
            match image {
                Some(color_image) => {
                    let texture = ctx.load_texture(
                        format!("thumb_{}", reference),
                        color_image,
                        TextureOptions::LINEAR,
                    );
                    self.textures.put(reference, texture);
                }
                None => {
                    debug!("No preview for {}", reference);
                    self.failed.insert(reference);
                }
            }
        }
    }

    fn decode(path: &str) -> Option<ColorImage> {
        let bytes = std::fs::read(path).ok()?;
        let image = image::load_from_memory(&bytes).ok()?;
        let thumb = image.thumbnail(MAX_EDGE, MAX_EDGE);
        let rgba = thumb.to_rgba8();
        let (w, h) = rgba.dimensions();
        Some(ColorImage::from_rgba_unmultiplied(
            [w as usize, h as usize],
            rgba.as_raw(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;
    use std::time::Duration;
    use tempfile::TempDir;

    fn reference(i: usize) -> String {
        format!("file:///images/{}.png", i)
    }

    #[tokio::test]
    async fn overflow_evicts_only_the_least_recent_entry() {
        let ctx = egui::Context::default();
        let mut cache = ThumbnailCache::new(Handle::current());

        for i in 0..=MAX_CACHED {
            let image = ColorImage::new([2, 2], Color32::RED);
            cache.sender.send((reference(i), Some(image))).unwrap();
        }
        cache.receive(&ctx);

        assert_eq!(cache.len(), MAX_CACHED);
        assert!(cache.textures.peek(&reference(0)).is_none());
        for i in 1..=MAX_CACHED {
            assert!(cache.get(&reference(i)).is_some());
        }
    }

    #[tokio::test]
    async fn decoding_happens_off_the_caller() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();
        let reference = format!("file://{}", path.display());

        let ctx = egui::Context::default();
        let mut cache = ThumbnailCache::new(Handle::current());
        assert!(cache.get(&reference).is_none());
        assert!(cache.get(&reference).is_none());
        assert_eq!(cache.pending.len(), 1);

        for _ in 0..200 {
            cache.receive(&ctx);
            if !cache.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(cache.get(&reference).is_some());
        assert!(cache.pending.is_empty());
    }

    #[tokio::test]
    async fn unreadable_files_are_not_retried() {
        let ctx = egui::Context::default();
        let mut cache = ThumbnailCache::new(Handle::current());
        cache
            .sender
            .send(("file:///missing.png".to_string(), None))
            .unwrap();
        cache.receive(&ctx);

        assert!(cache.get("file:///missing.png").is_none());
        assert!(cache.pending.is_empty());
        assert!(cache.get("preview://123").is_none());
    }
}
