//! Typed input assembled from a completed listing form.
//!
//! The form holds numeric values as raw text; this module is where they
//! become numbers. The split keeps the UI free of parsing concerns and
//! keeps the typed side testable on the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::listing::ListingForm;

/// A numeric form field whose text could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid numeric value for `{field}`: `{value}`")]
pub struct InvalidNumber {
    pub field: &'static str,
    pub value: String,
}

/// Model-agnostic description of a car, ready for downstream consumers.
///
/// Numeric fields are `f64` across the board, matching the feature vector
/// the original estimator consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    // Numeric inputs.
    pub year: f64,
    pub km: f64,
    pub power: f64,
    pub cylinder_cap: f64,
    pub doors: f64,
    pub consumption: f64,

    // Boolean inputs.
    pub no_accident: bool,
    pub service_book: bool,
    pub particle_filter: bool,
    pub matriculated: bool,
    pub first_owner: bool,

    // Categorical inputs.
    pub brand: String,
    pub model: String,
    pub fuel: String,
    pub gearbox: String,
    pub body: String,
    pub color: String,
    pub drivetrain: String,
}

fn number(field: &'static str, value: &str) -> Result<f64, InvalidNumber> {
    value.trim().parse().map_err(|_| InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<&ListingForm> for ModelInput {
    type Error = InvalidNumber;

    fn try_from(form: &ListingForm) -> Result<Self, Self::Error> {
        Ok(ModelInput {
            year: number("year", &form.year)?,
            km: number("km", &form.km)?,
            power: number("power", &form.power)?,
            cylinder_cap: number("cylinder_cap", &form.cylinder_cap)?,
            doors: number("doors", &form.doors)?,
            consumption: number("consumption", &form.consumption)?,

            no_accident: form.no_accident,
            service_book: form.service_book,
            particle_filter: form.particle_filter,
            matriculated: form.matriculated,
            first_owner: form.first_owner,

            brand: form.brand.clone(),
            model: form.model.clone(),
            fuel: form.fuel.clone(),
            gearbox: form.gearbox.clone(),
            body: form.body.clone(),
            color: form.color.clone(),
            drivetrain: form.drivetrain.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::AUDI_A5;

    #[test]
    fn dataset_filled_form_converts() {
        let mut form = ListingForm::default();
        AUDI_A5.apply(&mut form);

        let input = ModelInput::try_from(&form).unwrap();
        assert_eq!(input.year, 2019.0);
        assert_eq!(input.km, 155_000.0);
        assert_eq!(input.power, 190.0);
        assert_eq!(input.cylinder_cap, 1998.0);
        assert_eq!(input.doors, 4.0);
        assert_eq!(input.consumption, 4.8);
        assert!(input.no_accident);
        assert!(!input.first_owner);
        assert_eq!(input.brand, "Audi");
        assert_eq!(input.drivetrain, "Fata");
    }

    #[test]
    fn empty_form_reports_first_bad_field() {
        let form = ListingForm::default();
        let err = ModelInput::try_from(&form).unwrap_err();
        assert_eq!(err.field, "year");
        assert_eq!(err.to_string(), "invalid numeric value for `year`: ``");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut form = ListingForm::default();
        AUDI_A5.apply(&mut form);
        form.km = " 155000 ".to_string();

        let input = ModelInput::try_from(&form).unwrap();
        assert_eq!(input.km, 155_000.0);
    }

    #[test]
    fn non_numeric_text_is_an_error() {
        let mut form = ListingForm::default();
        AUDI_A5.apply(&mut form);
        form.doors = "patru".to_string();

        let err = ModelInput::try_from(&form).unwrap_err();
        assert_eq!(err.field, "doors");
        assert_eq!(err.value, "patru");
    }
}
