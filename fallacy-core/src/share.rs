//! Copy-link and share helpers.

use crate::constants::DEFAULT_TITLE;
use crate::notice::Tone;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Characters escaped the way `encodeURIComponent` escapes them.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("copy rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Asynchronous clipboard API.
    Clipboard,
    /// Off-screen text field selected and copied synchronously.
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyMethod),
    Failed,
}

impl CopyOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Copied(_) => "Link copied to clipboard!",
            Self::Failed => "Failed to copy link",
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Copied(_) => Tone::Info,
            Self::Failed => Tone::Error,
        }
    }
}

/// Synchronous selection-and-copy through a transient text field.
pub trait SelectionCopier {
    /// Create the field holding `text` and attach it to the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be created or attached.
    fn attach(&mut self, text: &str) -> Result<(), CopyError>;

    /// Select the field contents and issue the copy command.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy command is rejected.
    fn select_and_copy(&mut self) -> Result<(), CopyError>;

    /// Remove the field. Must be harmless when nothing is attached.
    fn detach(&mut self);
}

/// Copy `text` through `copier`; the field is detached whatever happens.
///
/// # Errors
///
/// Returns the first error raised while attaching or copying.
pub fn copy_via_selection<C: SelectionCopier + ?Sized>(
    copier: &mut C,
    text: &str,
) -> Result<(), CopyError> {
    let result = copier
        .attach(text)
        .and_then(|()| copier.select_and_copy());
    copier.detach();
    result
}

/// Combine the clipboard attempt with the selection fallback.
///
/// The fallback only runs when the primary attempt failed. Failures are
/// folded into [`CopyOutcome::Failed`] and never propagated.
pub fn resolve_copy<F>(primary: Result<(), CopyError>, fallback: F) -> CopyOutcome
where
    F: FnOnce() -> Result<(), CopyError>,
{
    match primary {
        Ok(()) => CopyOutcome::Copied(CopyMethod::Clipboard),
        Err(primary_err) => {
            log::warn!("clipboard write failed ({primary_err}), trying selection copy");
            match fallback() {
                Ok(()) => CopyOutcome::Copied(CopyMethod::Selection),
                Err(err) => {
                    log::warn!("selection copy failed: {err}");
                    CopyOutcome::Failed
                }
            }
        }
    }
}

/// Tweet composer address for sharing an item.
#[must_use]
pub fn tweet_intent_url(title: &str, url: &str) -> String {
    let text = format!("{DEFAULT_TITLE}: {title}");
    format!(
        "{TWEET_INTENT}?text={}&url={}",
        utf8_percent_encode(&text, URI_COMPONENT),
        utf8_percent_encode(url, URI_COMPONENT)
    )
}
