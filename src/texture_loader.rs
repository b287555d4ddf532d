use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

/// Load state of one slide image.
pub enum ImageSlot {
    Pending,
    Loaded { texture: Texture2D, loaded_at: f64 },
    Failed,
}

/// Slide images, loaded only once their slide has been shown.
#[derive(Default)]
pub struct LazyImages {
    slots: HashMap<PathBuf, ImageSlot>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` for loading. Paths already known are left alone.
    pub fn request(&mut self, path: &Path) {
        self.slots.entry(path.to_path_buf()).or_insert(ImageSlot::Pending);
    }

    pub fn get(&self, path: &Path) -> Option<&ImageSlot> {
        self.slots.get(path)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.slots
            .iter()
            .filter(|(_, slot)| matches!(slot, ImageSlot::Pending))
            .map(|(path, _)| path.as_path())
    }

    /// Loads every pending image.
    pub fn load_pending(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, now: f64) {
        let pending: Vec<PathBuf> = self.pending().map(Path::to_path_buf).collect();
        for path in pending {
            let slot = match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    debug!(path = %path.display(), "image loaded");
                    ImageSlot::Loaded { texture, loaded_at: now }
                }
                Err(e) => {
                    warn!(path = %path.display(), "failed to load image: {e:#}");
                    ImageSlot::Failed
                }
            };
            self.slots.insert(path, slot);
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .with_context(|| format!("failed to decode {}", image_path.display()))?;

    // 1 = normal, 3 = 180, 6 = 90 CW, 8 = 90 CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .with_context(|| format!("failed to create texture for {}", image_path.display()))?;

    Ok(texture)
}

fn exif_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(path = %image_path.display(), "no EXIF data: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_marks_pending_once() {
        let mut images = LazyImages::new();
        images.request(Path::new("a.png"));
        images.request(Path::new("a.png"));
        images.request(Path::new("b.jpg"));

        let mut pending: Vec<&Path> = images.pending().collect();
        pending.sort();
        assert_eq!(pending, vec![Path::new("a.png"), Path::new("b.jpg")]);
        assert!(matches!(images.get(Path::new("a.png")), Some(ImageSlot::Pending)));
        assert!(images.get(Path::new("c.png")).is_none());
    }

    #[test]
    fn orientation_defaults_without_exif() {
        assert_eq!(exif_orientation(b"not a jpeg", Path::new("x.jpg")), 1);
    }
}
