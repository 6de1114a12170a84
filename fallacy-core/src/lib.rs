//! Fallacy catalogue core
//!
//! Platform-agnostic logic for browsing the fallacy catalogue: the data model,
//! address parsing, the view/route controller, sharing and notifications, and
//! static page rendering. No browser or filesystem dependencies live here.

pub mod address;
pub mod constants;
pub mod controller;
pub mod data;
pub mod notice;
pub mod pages;
pub mod share;

// Re-export commonly used types
pub use address::{Address, BasePath, SlugStrategy, is_canonical, resolve_slug};
pub use constants::{DATA_PATH, DEFAULT_TITLE};
pub use controller::{Controller, Effect, NavEvent, NavKey, NavigationSurface, View, page_title};
pub use data::{Attribution, DataError, Fallacy, FallacyCollection, FallacyId};
pub use notice::{Notice, NoticeBoard, Tone};
pub use pages::{PageError, SiteConfig, page_file_name, render_page};
pub use share::{CopyMethod, CopyOutcome, SelectionCopier, copy_via_selection, resolve_copy};

/// Trait for abstracting collection loading.
/// Platform-specific implementations fetch or read the JSON resource.
pub trait DataLoader {
    type Error: std::error::Error + 'static;

    /// Load the fallacy collection from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be read or does not describe a
    /// valid collection.
    fn load_collection(&self) -> Result<FallacyCollection, Self::Error>;
}
