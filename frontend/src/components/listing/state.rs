//! Component state for the listing form.
//!
//! The form's field values live in a `ListingForm` view-model from the
//! shared `common` crate; DOM access goes through `NodeRef`s held here
//! instead of global document lookups.

use common::model::listing::ListingForm;
use gloo_file::ObjectUrl;
use yew::prelude::*;

/// Main state container for the `ListingFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ListingFormComponent {
    /// Current values of every bound form field.
    pub form: ListingForm,

    /// Object URL of the photo currently shown in the preview. `None`
    /// keeps the preview hidden. Assigning a new value drops the previous
    /// guard, which revokes its URL.
    pub photo_preview: Option<ObjectUrl>,

    /// Reference to the `<form>` DOM node, used by the generic reset sweep.
    pub form_ref: NodeRef,

    /// Reference to the photo file input. The file selection is not part
    /// of the view-model; the input stays uncontrolled.
    pub photo_input_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ListingFormComponent {
    /// Constructs the initial state: empty form, hidden preview, empty
    /// `NodeRef`s.
    pub fn new() -> Self {
        Self {
            form: ListingForm::default(),
            photo_preview: None,
            form_ref: NodeRef::default(),
            photo_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
