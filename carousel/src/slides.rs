//! Renderable items for one carousel.

/// The renderable items of one carousel plus the title used in labels.
///
/// Items are opaque to navigation; only their count matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slides<T> {
    title: String,
    items: Vec<T>,
}

impl<T> Slides<T> {
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Build from an optional image list and an optional single image.
    ///
    /// A non-empty list wins; otherwise the single image, if any, becomes a
    /// one-item deck.
    pub fn from_sources(
        title: impl Into<String>,
        images: Option<Vec<T>>,
        image: Option<T>,
    ) -> Self {
        let items = match (images, image) {
            (Some(images), _) if !images.is_empty() => images,
            (_, Some(image)) => vec![image],
            _ => Vec::new(),
        };
        Self::new(title, items)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_label(&self, index: usize) -> String {
        crate::label::item_label(&self.title, index)
    }
}
