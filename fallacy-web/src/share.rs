//! Clipboard and share-window side effects.

use crate::dom;
use fallacy_core::share::CopyError;
use fallacy_core::{CopyOutcome, SelectionCopier, copy_via_selection, resolve_copy};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

const OFFSCREEN_STYLE: &str = "position:fixed;top:0;left:-999999px;opacity:0;";

/// Marker attribute on the transient copy field.
pub const OFFSCREEN_ATTR: &str = "data-offscreen-copy";

/// Off-screen `<textarea>` used for the synchronous copy fallback.
///
/// The field is removed on [`SelectionCopier::detach`] and again on drop, so it
/// never outlives a copy attempt.
pub struct OffscreenTextArea {
    document: Document,
    field: Option<HtmlTextAreaElement>,
}

impl OffscreenTextArea {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self {
            document,
            field: None,
        }
    }
}

impl SelectionCopier for OffscreenTextArea {
    fn attach(&mut self, text: &str) -> Result<(), CopyError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| CopyError::Unavailable("no body element".into()))?;
        let field = self
            .document
            .create_element("textarea")
            .map_err(|e| CopyError::Unavailable(dom::js_error_message(&e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| CopyError::Unavailable("failed to cast to textarea".into()))?;
        field.set_value(text);
        let _ = field.set_attribute("readonly", "");
        let _ = field.set_attribute("aria-hidden", "true");
        let _ = field.set_attribute("style", OFFSCREEN_STYLE);
        let _ = field.set_attribute(OFFSCREEN_ATTR, "");
        body.append_child(&field)
            .map_err(|e| CopyError::Unavailable(dom::js_error_message(&e)))?;
        self.field = Some(field);
        Ok(())
    }

    fn select_and_copy(&mut self) -> Result<(), CopyError> {
        let field = self
            .field
            .as_ref()
            .ok_or_else(|| CopyError::Unavailable("field not attached".into()))?;
        field.select();
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| CopyError::Unavailable("not an HTML document".into()))?;
        match html_document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::Rejected("copy command was not executed".into())),
            Err(e) => Err(CopyError::Rejected(dom::js_error_message(&e))),
        }
    }

    fn detach(&mut self) {
        if let Some(field) = self.field.take() {
            field.remove();
        }
    }
}

impl Drop for OffscreenTextArea {
    fn drop(&mut self) {
        self.detach();
    }
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn clipboard_write(text: &str) -> Result<(), CopyError> {
    let win = dom::window().ok_or_else(|| CopyError::Unavailable("no window".into()))?;
    let navigator = win.navigator();
    let present = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);
    if !present {
        return Err(CopyError::Unavailable("navigator.clipboard missing".into()));
    }
    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| CopyError::Rejected(dom::js_error_message(&e)))
}

/// Copy `text`, falling back to the selection copy when the clipboard API fails.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str) -> CopyOutcome {
    let primary = clipboard_write(text).await;
    resolve_copy(primary, || {
        let document =
            dom::document().ok_or_else(|| CopyError::Unavailable("no document".into()))?;
        copy_via_selection(&mut OffscreenTextArea::new(document), text)
    })
}

/// Open the share composer in a small popup window.
pub fn open_share_window(url: &str) {
    let Some(win) = dom::window() else {
        return;
    };
    if let Err(e) =
        win.open_with_url_and_target_and_features(url, "_blank", "width=550,height=420")
    {
        log::warn!("share window blocked: {}", dom::js_error_message(&e));
    }
}
