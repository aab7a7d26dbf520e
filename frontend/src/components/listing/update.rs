//! Update function for the listing form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `ListingFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits flow through the `Field`/`Flag` bindings of the shared
//!   view-model.
//! - Clearing resets the view-model and additionally sweeps the live form
//!   so uncontrolled inputs (the photo file input) are wiped too. Submit
//!   controls are never touched.
//! - Loading an example overwrites the enumerated fields with the dataset
//!   literals and nothing else.
//! - Selecting a photo swaps the preview's object URL; the previous URL is
//!   revoked when its guard is dropped.
//! - Submit is intercepted: the form is converted to a typed `ModelInput`
//!   and logged, with user-facing toast messages (in Romanian).

use gloo_console::log;
use gloo_file::ObjectUrl;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use common::model::input::ModelInput;

use super::helpers::{clear_form_inputs, show_toast};
use super::messages::Msg;
use super::state::ListingFormComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Returns `true` to re-render the view, `false` to short-circuit when only side effects occur.
pub fn update(
    component: &mut ListingFormComponent,
    _ctx: &Context<ListingFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EditField(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::SetFlag(flag, checked) => {
            component.form.set_flag(flag, checked);
            true
        }
        Msg::ClearForm => {
            component.form.clear();

            // The view-model reset covers every bound field; the DOM sweep
            // also reaches inputs outside the view-model, such as the photo
            // file input or any input later added to the form.
            if let Some(form) = component.form_ref.cast::<HtmlFormElement>() {
                clear_form_inputs(&form);
            }

            log!("listing form cleared");
            show_toast("Formular golit.");
            true
        }
        Msg::LoadExample(example) => {
            example.apply(&mut component.form);

            log!("example dataset loaded:", example.label());
            show_toast(&format!("Exemplu încărcat: {}.", example.label()));
            true
        }
        Msg::PhotoSelected(file) => {
            // Replacing the guard drops the old one, revoking its URL.
            component.photo_preview = Some(ObjectUrl::from(gloo_file::File::from(file)));
            true
        }
        Msg::Submit => {
            match ModelInput::try_from(&component.form) {
                Ok(input) => match serde_json::to_string(&input) {
                    Ok(payload) => {
                        log!("listing ready:", payload);
                        show_toast("Anunț pregătit pentru evaluare.");
                    }
                    Err(err) => {
                        show_toast(&format!("Eroare la pregătirea anunțului: {}", err));
                    }
                },
                Err(err) => {
                    show_toast(&format!("Formular incomplet: {}", err));
                }
            }
            false
        }
    }
}
