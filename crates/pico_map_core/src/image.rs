//! Source images that map chip fragments point into

use serde::{Deserialize, Serialize};

use crate::MapError;

/// A chip sheet image referenced by fragments through its id.
///
/// Pixel data is owned by the caller's image loader; this only tracks where
/// the image comes from and, once loaded, how large it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapChipImage {
    pub id: u32,
    pub src: String,
    #[serde(skip)]
    size: Option<(u32, u32)>,
}

impl MapChipImage {
    pub fn new(src: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            src: src.into(),
            size: None,
        }
    }

    /// Record that the loader finished decoding this image
    pub fn mark_loaded(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    pub fn is_loaded(&self) -> bool {
        self.size.is_some()
    }

    /// Pixel size of the loaded image
    pub fn size(&self) -> Result<(u32, u32), MapError> {
        self.size.ok_or(MapError::ImageNotLoaded(self.id))
    }
}

/// All chip images of a map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapChipsCollection {
    images: Vec<MapChipImage>,
}

impl MapChipsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image, replacing any image with the same id
    pub fn push(&mut self, image: MapChipImage) {
        self.images.retain(|existing| existing.id != image.id);
        self.images.push(image);
    }

    pub fn find_by_id(&self, id: u32) -> Option<&MapChipImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Mark an image as loaded with its pixel size
    pub fn mark_loaded(&mut self, id: u32, width: u32, height: u32) -> Result<(), MapError> {
        let image = self
            .images
            .iter_mut()
            .find(|image| image.id == id)
            .ok_or(MapError::MissingChipImage(id))?;
        image.mark_loaded(width, height);
        Ok(())
    }

    /// True once every image has been loaded
    pub fn is_ready(&self) -> bool {
        self.images.iter().all(MapChipImage::is_loaded)
    }

    /// Ids of images still waiting for the loader
    pub fn pending(&self) -> Vec<u32> {
        self.images
            .iter()
            .filter(|image| !image.is_loaded())
            .map(|image| image.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapChipImage> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness() {
        let mut images = MapChipsCollection::new();
        images.push(MapChipImage::new("images/chip.png", 1));
        images.push(MapChipImage::new("images/auto-tile-sample.png", 2));

        assert!(!images.is_ready());
        assert_eq!(images.pending(), vec![1, 2]);
        assert_eq!(
            images.find_by_id(1).unwrap().size(),
            Err(MapError::ImageNotLoaded(1))
        );

        images.mark_loaded(1, 256, 256).unwrap();
        images.mark_loaded(2, 96, 160).unwrap();

        assert!(images.is_ready());
        assert_eq!(images.find_by_id(2).unwrap().size(), Ok((96, 160)));
        assert_eq!(
            images.mark_loaded(3, 1, 1),
            Err(MapError::MissingChipImage(3))
        );
    }

    #[test]
    fn test_push_replaces_same_id() {
        let mut images = MapChipsCollection::new();
        images.push(MapChipImage::new("a.png", 1));
        images.push(MapChipImage::new("b.png", 1));

        assert_eq!(images.len(), 1);
        assert_eq!(images.find_by_id(1).unwrap().src, "b.png");
        assert!(images.find_by_id(2).is_none());
    }

    #[test]
    fn test_serialization_drops_load_state() {
        let mut images = MapChipsCollection::new();
        images.push(MapChipImage::new("a.png", 1));
        images.mark_loaded(1, 32, 32).unwrap();

        let json = serde_json::to_string(&images).unwrap();
        assert_eq!(json, r#"[{"id":1,"src":"a.png"}]"#);

        let parsed: MapChipsCollection = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_ready());
    }
}
