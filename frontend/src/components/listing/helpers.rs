//! Utility functions for the listing form component.
//!
//! - **Generic reset sweep**: clearing every `<input>` of the live form
//!   except submit-type controls, so inputs not bound to the view-model
//!   participate in reset as well.
//! - **User feedback**: temporary "toast" notifications confirming clear
//!   and example-load operations.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

/// Whether an input takes part in the form reset.
///
/// Submit-type controls keep their value; every other input is wiped.
pub fn resets_on_clear(input_type: &str) -> bool {
    input_type != "submit"
}

/// Clears every `<input>` inside `form` except submit-type controls:
/// text-like values become empty, checkboxes become unchecked.
///
/// Iterates the live DOM rather than a field list, so the photo file input
/// and any input later added to the form are covered without being named.
pub fn clear_form_inputs(form: &HtmlFormElement) {
    let inputs = form.get_elements_by_tag_name("input");
    for index in 0..inputs.length() {
        let input = inputs
            .item(index)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            if resets_on_clear(&input.type_()) {
                input.set_value("");
                input.set_checked(false);
            }
        }
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the DOM for non-blocking
/// feedback; the toast removes itself after a few seconds. User-facing
/// messages are in Romanian by design.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resets_on_clear;

    #[test]
    fn submit_controls_are_exempt() {
        assert!(!resets_on_clear("submit"));
    }

    #[test]
    fn every_other_input_type_resets() {
        for input_type in ["text", "number", "checkbox", "file"] {
            assert!(
                resets_on_clear(input_type),
                "type `{}` should reset",
                input_type
            );
        }
    }
}
