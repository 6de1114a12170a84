//! Fixed values shared by the browser app and the page generator.

/// Title shown on the home view and used as the suffix of every item title.
pub const DEFAULT_TITLE: &str = "Your Woke Fallacy Is";

/// Relative path of the JSON resource holding the collection.
pub const DATA_PATH: &str = "fallacies.json";

/// Public origin used for social-sharing metadata.
pub const DEFAULT_SITE_URL: &str = "https://wokefallacies.org";

/// Meta tag name carrying the slug a pre-rendered page should open with.
pub const INITIAL_MARKER_META: &str = "initial-fallacy";

/// How long a notice stays fully visible.
pub const NOTICE_VISIBLE_MS: u32 = 2_700;

/// Fade-out duration before a notice is removed.
pub const NOTICE_FADE_MS: u32 = 300;

/// Total lifetime of a notice.
pub const NOTICE_TOTAL_MS: u32 = NOTICE_VISIBLE_MS + NOTICE_FADE_MS;

/// Description excerpt length used in generated meta descriptions.
pub const META_DESCRIPTION_CHARS: usize = 150;

/// Message shown in the persistent banner when the collection cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load fallacies. Please refresh the page.";
