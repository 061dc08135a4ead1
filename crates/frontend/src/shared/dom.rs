//! Small document helpers used by the panel executor.

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Suspend or restore scrolling of the page behind the overlay.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("could not update body overflow");
    }
}

/// Popstate does not restore titles, so the executor sets them.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
