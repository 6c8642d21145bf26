//! Storage codec for the character gallery.
//!
//! Galleries are kept as serialized JSON text on the character row rather than a
//! normalized table. Decoding is total: any malformed stored text degrades to an
//! empty list so a corrupt row can never fail a profile render.

use crate::model::character::GalleryImage;

/// Decodes the stored gallery text into an ordered list of images.
///
/// Returns an empty list for `None`, empty text, or text that fails to parse.
pub fn decode(text: Option<&str>) -> Vec<GalleryImage> {
    match text {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Encodes a gallery back into its stored JSON text form.
pub fn encode(gallery: &[GalleryImage]) -> Result<String, serde_json::Error> {
    serde_json::to_string(gallery)
}

/// Parses the comma-separated URL list submitted by the edit form into gallery
/// entries without captions.
pub fn from_url_list(raw: &str) -> Vec<GalleryImage> {
    raw.split(',')
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(|url| GalleryImage {
            url: url.to_string(),
            caption: None,
        })
        .collect()
}
