use crate::api::PhotoWire;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Backend URL, or a local key for previews that were never uploaded.
    pub source: String,
    pub alt: String,
    pub preview: bool,
}

/// Photo grid. Starts out showing a placeholder until real photos arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    placeholder: bool,
    revision: u64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            placeholder: true,
            revision: 0,
        }
    }
}

impl Gallery {
    /// Replace the grid with the backend list. An empty list leaves the grid untouched.
    pub fn replace(&mut self, photos: &[PhotoWire]) -> bool {
        if photos.is_empty() {
            return false;
        }
        self.items = photos
            .iter()
            .enumerate()
            .map(|(index, photo)| GalleryItem {
                source: photo.url.clone(),
                alt: format!("Memory {}", index + 1),
                preview: false,
            })
            .collect();
        self.placeholder = false;
        self.revision += 1;
        true
    }

    /// Append a locally decoded photo, dropping the placeholder first.
    pub fn push_preview(&mut self, key: impl Into<String>) {
        if self.placeholder {
            self.items.clear();
            self.placeholder = false;
        }
        self.items.push(GalleryItem {
            source: key.into(),
            alt: "New Memory".to_string(),
            preview: true,
        });
        self.revision += 1;
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn shows_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
