//! Photo resolution with the initials fallback contract.
//!
//! A photo reference is either a local path or a remote URL. Remote
//! URLs are never fetched at render time; they resolve through the
//! photo cache directory by file name (the upload service keeps the
//! cache warm). Any failure (missing file, decode error, uncached
//! URL) resolves to `None` and the caller draws the initials avatar
//! instead. Resolution must never error.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use tomocard_roster_model::PhotoSource;

/// A successfully loaded photo, tagged with its origin.
pub struct ResolvedPhoto {
    pub image: DynamicImage,
    /// True when the pixels came from a remote URL (via the cache).
    /// Surfaces carrying remote content are subject to the capture
    /// adapter's cross-origin policy.
    pub remote: bool,
}

/// Resolve a photo reference to pixels, or `None` for the fallback.
pub fn resolve_photo(source: &PhotoSource, photo_root: Option<&Path>) -> Option<ResolvedPhoto> {
    match source {
        PhotoSource::Local(path) => {
            let path = absolute(path, photo_root);
            match image::open(&path) {
                Ok(image) => Some(ResolvedPhoto {
                    image,
                    remote: false,
                }),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Photo unavailable, using initials fallback");
                    None
                }
            }
        }
        PhotoSource::Remote(url) => {
            let Some(root) = photo_root else {
                tracing::debug!(url, "No photo cache configured, using initials fallback");
                return None;
            };
            let Some(name) = cached_file_name(url) else {
                tracing::debug!(url, "Remote photo URL has no file name, using initials fallback");
                return None;
            };
            let path = root.join(name);
            match image::open(&path) {
                Ok(image) => Some(ResolvedPhoto {
                    image,
                    remote: true,
                }),
                Err(e) => {
                    tracing::debug!(url, path = %path.display(), error = %e, "Remote photo not cached, using initials fallback");
                    None
                }
            }
        }
    }
}

fn absolute(path: &Path, photo_root: Option<&Path>) -> PathBuf {
    match photo_root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

/// The cache file name for a remote URL: its last path segment.
fn cached_file_name(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let (_, path) = rest.split_once('/')?;
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_file_name_takes_last_segment() {
        assert_eq!(
            cached_file_name("https://cdn.example.com/avatars/ada.png"),
            Some("ada.png")
        );
        assert_eq!(cached_file_name("https://cdn.example.com/"), None);
    }

    #[test]
    fn missing_local_photo_resolves_to_none() {
        let source = PhotoSource::Local(PathBuf::from("/nonexistent/photo.png"));
        assert!(resolve_photo(&source, None).is_none());
    }

    #[test]
    fn remote_without_cache_resolves_to_none() {
        let source = PhotoSource::Remote("https://cdn.example.com/ada.png".to_string());
        assert!(resolve_photo(&source, None).is_none());
    }
}
