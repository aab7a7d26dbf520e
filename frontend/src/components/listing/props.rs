//! Defines the properties for the `ListingFormComponent`.

use common::model::dataset::ExampleListing;
use yew::prelude::*;

/// Properties for the `ListingFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ListingFormProps {
    /// Optional dataset applied to the form on the first render.
    ///
    /// - If `Some(example)`, the form starts pre-filled with that dataset,
    ///   exactly as if the user had pressed the matching example button.
    ///
    /// - If `None` (the default), the form starts empty.
    ///
    /// This property is checked only once during the `rendered` lifecycle hook on the first render.
    #[prop_or_default]
    pub initial: Option<ExampleListing>,
}
