//! Helpers for constructing URLs that respect the deployment base path.
use fallacy_core::BasePath;

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

/// Address of a static asset.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/fallacies` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, PUBLIC_URL.unwrap_or(""))
}

/// Base path of the collection (e.g., `/fallacies` when hosted under a subdirectory).
#[must_use]
pub fn base_path() -> BasePath {
    BasePath::new(PUBLIC_URL.unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else if base.starts_with('/') {
        format!("{base}/{rel}")
    } else {
        format!("/{base}/{rel}")
    }
}
