//! View rendering for the listing form component.
//!
//! One `<form>` with three fieldsets (categorical, numeric and checkbox
//! fields), the photo input with its preview surface, the clear and
//! example trigger buttons, and the submit control. Every field is a
//! controlled input bound to the shared view-model; the photo input is the
//! only uncontrolled one.
//!
//! Notes
//! - All user-facing labels remain in Romanian by design.
//! - The preview `<img>` is rendered only while an object URL is held, so
//!   it starts hidden and a change event without a file leaves it as it was.

use web_sys::{Event, HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::dataset::{AUDI_A5, VW_TIGUAN};
use common::model::listing::{Field, Flag};

use super::messages::Msg;
use super::state::ListingFormComponent;

/// Main view function for the listing form component.
pub fn view(component: &ListingFormComponent, ctx: &Context<ListingFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="listing-root">
            <h1>{"Evaluare auto"}</h1>
            <form
                ref={component.form_ref.clone()}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <fieldset>
                    <legend>{"Caracteristici"}</legend>
                    { text_row(link, "Marcă", Field::Brand, component) }
                    { text_row(link, "Model", Field::Model, component) }
                    { text_row(link, "Combustibil", Field::Fuel, component) }
                    { text_row(link, "Cutie de viteze", Field::Gearbox, component) }
                    { text_row(link, "Caroserie", Field::Body, component) }
                    { text_row(link, "Culoare", Field::Color, component) }
                    { text_row(link, "Tracțiune", Field::Drivetrain, component) }
                </fieldset>

                <fieldset>
                    <legend>{"Date tehnice"}</legend>
                    { number_row(link, "An fabricație", Field::Year, "1", component) }
                    { number_row(link, "Kilometraj", Field::Km, "1", component) }
                    { number_row(link, "Putere (CP)", Field::Power, "1", component) }
                    { number_row(link, "Capacitate cilindrică (cm³)", Field::CylinderCap, "1", component) }
                    { number_row(link, "Număr de uși", Field::Doors, "1", component) }
                    { number_row(link, "Consum (l/100km)", Field::Consumption, "0.1", component) }
                </fieldset>

                <fieldset>
                    <legend>{"Istoric"}</legend>
                    { flag_row(link, "Fără accident", Flag::NoAccident, component) }
                    { flag_row(link, "Carte de service", Flag::ServiceBook, component) }
                    { flag_row(link, "Filtru de particule", Flag::ParticleFilter, component) }
                    { flag_row(link, "Înmatriculat", Flag::Matriculated, component) }
                    { flag_row(link, "Primul proprietar", Flag::FirstOwner, component) }
                </fieldset>

                { photo_section(component, link) }

                <div class="actions">
                    <button type="button" onclick={link.callback(|_| Msg::ClearForm)}>
                        {"Golește formularul"}
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::LoadExample(AUDI_A5))}>
                        {"Exemplul 1"}
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::LoadExample(VW_TIGUAN))}>
                        {"Exemplul 2"}
                    </button>
                    <input type="submit" value="Estimează prețul" />
                </div>
            </form>
        </div>
    }
}

/// Renders one labeled text input bound to `field`.
fn text_row(
    link: &Scope<ListingFormComponent>,
    label: &str,
    field: Field,
    component: &ListingFormComponent,
) -> Html {
    html! {
        <label class="form-row">
            <span>{label}</span>
            <input
                type="text"
                name={field.name()}
                value={component.form.field(field).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditField(field, input.value())
                })}
            />
        </label>
    }
}

/// Renders one labeled number input bound to `field`.
fn number_row(
    link: &Scope<ListingFormComponent>,
    label: &str,
    field: Field,
    step: &'static str,
    component: &ListingFormComponent,
) -> Html {
    html! {
        <label class="form-row">
            <span>{label}</span>
            <input
                type="number"
                name={field.name()}
                step={step}
                value={component.form.field(field).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditField(field, input.value())
                })}
            />
        </label>
    }
}

/// Renders one labeled checkbox bound to `flag`.
fn flag_row(
    link: &Scope<ListingFormComponent>,
    label: &str,
    flag: Flag,
    component: &ListingFormComponent,
) -> Html {
    html! {
        <label class="form-row checkbox">
            <input
                type="checkbox"
                name={flag.name()}
                checked={component.form.flag(flag)}
                onchange={link.callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetFlag(flag, input.checked())
                })}
            />
            <span>{label}</span>
        </label>
    }
}

/// Photo input and its preview surface.
///
/// A change event carrying exactly one file dispatches `Msg::PhotoSelected`;
/// a change without a file dispatches nothing, leaving the preview as it was.
fn photo_section(component: &ListingFormComponent, link: &Scope<ListingFormComponent>) -> Html {
    html! {
        <fieldset>
            <legend>{"Fotografie"}</legend>
            <label class="form-row">
                <input
                    type="file"
                    name="photo"
                    accept="image/*"
                    ref={component.photo_input_ref.clone()}
                    onchange={link.batch_callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        match input.files().and_then(|files| files.get(0)) {
                            Some(file) => vec![Msg::PhotoSelected(file)],
                            None => vec![],
                        }
                    })}
                />
            </label>
            {
                match &component.photo_preview {
                    Some(url) => html! {
                        <img
                            class="photo-preview"
                            src={url.to_string()}
                            alt="Previzualizare fotografie"
                        />
                    },
                    None => html! {},
                }
            }
        </fieldset>
    }
}
