use std::sync::Arc;

use thiserror::Error;

/// Raised when an index is resolved against an empty collection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range: the media collection is empty")]
pub struct OutOfRangeError {
    pub index: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("image {image} has no accessible text")]
    MissingAccessibleText { image: String },
}

/// A displayable image with its alt text and caption.
///
/// Fields are private so a descriptor can't change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    source: String,
    accessible_text: String,
    caption: String,
}

impl ImageDescriptor {
    /// Build a descriptor. Accessible text must contain something other than
    /// whitespace; the caption may be empty.
    pub fn new(
        source: impl Into<String>,
        accessible_text: impl Into<String>,
        caption: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let source = source.into();
        let accessible_text = accessible_text.into();
        if accessible_text.trim().is_empty() {
            return Err(DescriptorError::MissingAccessibleText { image: source });
        }
        Ok(Self {
            source,
            accessible_text,
            caption: caption.into(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn accessible_text(&self) -> &str {
        &self.accessible_text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Ordered, immutable sequence of images with wrap-around index arithmetic.
///
/// Clones share the same backing slice. Swapping in a new collection is the
/// only way to change what a gallery shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCollection {
    images: Arc<[ImageDescriptor]>,
}

impl MediaCollection {
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self {
            images: Arc::from(images),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Descriptor at `index mod len`.
    pub fn get(&self, index: usize) -> Result<&ImageDescriptor, OutOfRangeError> {
        if self.images.is_empty() {
            return Err(OutOfRangeError { index });
        }
        Ok(&self.images[index % self.images.len()])
    }

    /// `(current + 1) mod len`. Returns 0 for an empty collection.
    pub fn next_index(&self, current: usize) -> usize {
        let len = self.images.len();
        if len == 0 {
            return 0;
        }
        (current % len + 1) % len
    }

    /// `(current - 1 + len) mod len`. Returns 0 for an empty collection.
    pub fn previous_index(&self, current: usize) -> usize {
        let len = self.images.len();
        if len == 0 {
            return 0;
        }
        (current % len + len - 1) % len
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[ImageDescriptor] {
        &self.images
    }
}

impl Default for MediaCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ImageDescriptor>> for MediaCollection {
    fn from(images: Vec<ImageDescriptor>) -> Self {
        Self::new(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> MediaCollection {
        (0..n)
            .map(|i| {
                ImageDescriptor::new(format!("/img/{i}.jpg"), format!("View {i}"), "").unwrap()
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_descriptor_requires_accessible_text() {
        let err = ImageDescriptor::new("/a.jpg", "   ", "Pool").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::MissingAccessibleText {
                image: "/a.jpg".into()
            }
        );
    }

    #[test]
    fn test_descriptor_allows_empty_caption() {
        let d = ImageDescriptor::new("/a.jpg", "Terrace at dusk", "").unwrap();
        assert_eq!(d.caption(), "");
        assert_eq!(d.accessible_text(), "Terrace at dusk");
    }

    #[test]
    fn test_get_wraps_index() {
        let c = collection(3);
        assert_eq!(c.get(4).unwrap().source(), "/img/1.jpg");
        assert_eq!(c.get(0).unwrap().source(), "/img/0.jpg");
    }

    #[test]
    fn test_get_on_empty_fails() {
        let c = collection(0);
        assert_eq!(c.get(2), Err(OutOfRangeError { index: 2 }));
    }

    #[test]
    fn test_wrap_around_at_edges() {
        let c = collection(5);
        assert_eq!(c.next_index(4), 0);
        assert_eq!(c.previous_index(0), 4);
    }

    #[test]
    fn test_navigation_is_invertible() {
        for n in 1..8 {
            let c = collection(n);
            for i in 0..n {
                assert_eq!(c.next_index(c.previous_index(i)), i);
                assert_eq!(c.previous_index(c.next_index(i)), i);
            }
        }
    }

    #[test]
    fn test_single_image_wraps_to_itself() {
        let c = collection(1);
        assert_eq!(c.next_index(0), 0);
        assert_eq!(c.previous_index(0), 0);
    }

    #[test]
    fn test_empty_navigation_is_total() {
        let c = collection(0);
        assert_eq!(c.next_index(7), 0);
        assert_eq!(c.previous_index(0), 0);
    }

    #[test]
    fn test_clones_share_storage() {
        let a = collection(2);
        let b = a.clone();
        assert!(std::ptr::eq(a.as_slice(), b.as_slice()));
    }
}
