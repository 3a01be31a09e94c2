//! Image extension table.
//!
//! This is the default list the type classifier uses to decide which entries
//! are worth a content-thumbnail lookup.

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "svg"];

/// Get the list of image file extensions.
///
/// Extensions are lowercase and carry no leading dot.
///
/// # Examples
///
/// ```
/// use filemeta_common::paths::image_extensions;
///
/// let extensions = image_extensions();
/// assert!(extensions.contains(&"jpg"));
/// assert!(extensions.contains(&"png"));
/// ```
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}
