use web_sys as web;

#[inline]
pub fn show_controls(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("controls-content") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
    set_toggle_label(document, "Hide");
}

#[inline]
pub fn hide_controls(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("controls-content") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
    set_toggle_label(document, "Show");
}

#[inline]
pub fn controls_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id("controls-content") {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle_controls(document: &web::Document) {
    if controls_hidden(document) {
        show_controls(document);
    } else {
        hide_controls(document);
    }
}

fn set_toggle_label(document: &web::Document, label: &str) {
    if let Some(el) = document.get_element_by_id("toggle-controls") {
        el.set_text_content(Some(label));
    }
}

/// Fatal-startup surface: shown once, the session does not continue past it.
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id("error-overlay") {
        el.set_text_content(Some(message));
        _ = el.set_attribute("style", "");
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
    }
}
