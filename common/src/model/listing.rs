//! The car listing form state shared between the view-model and the UI.
//!
//! Numeric inputs are kept as the raw text the user typed, exactly as the
//! browser holds them; interpreting them as numbers is the job of
//! `model::input`. Checkboxes are plain `bool`s. The selected photo is not
//! part of this struct: it lives in an uncontrolled file input owned by the
//! frontend component.

use serde::{Deserialize, Serialize};

/// Current values of all fields in the listing form.
///
/// `Default` is the pristine state: every text and numeric field empty,
/// every flag unchecked. Resetting the form goes through `Default`, so a
/// field added to this struct participates in reset without being named
/// anywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingForm {
    // Categorical inputs.
    pub brand: String,
    pub model: String,
    pub fuel: String,
    pub gearbox: String,
    pub body: String,
    pub color: String,
    pub drivetrain: String,

    // Numeric inputs, raw as typed.
    pub year: String,
    pub km: String,
    pub power: String,
    pub cylinder_cap: String,
    pub doors: String,
    pub consumption: String,

    // Boolean inputs.
    pub no_accident: bool,
    pub service_book: bool,
    pub particle_filter: bool,
    pub matriculated: bool,
    pub first_owner: bool,
}

/// Identifies a text or numeric field of the form.
///
/// Used by the UI to bind each control to its backing field with a single
/// pair of messages instead of one message per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Brand,
    Model,
    Fuel,
    Gearbox,
    Body,
    Color,
    Drivetrain,
    Year,
    Km,
    Power,
    CylinderCap,
    Doors,
    Consumption,
}

/// Identifies a checkbox field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    NoAccident,
    ServiceBook,
    ParticleFilter,
    Matriculated,
    FirstOwner,
}

impl Field {
    /// Every text and numeric field, in form order.
    pub const ALL: [Field; 13] = [
        Field::Brand,
        Field::Model,
        Field::Fuel,
        Field::Gearbox,
        Field::Body,
        Field::Color,
        Field::Drivetrain,
        Field::Year,
        Field::Km,
        Field::Power,
        Field::CylinderCap,
        Field::Doors,
        Field::Consumption,
    ];

    /// HTML control name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Model => "model",
            Field::Fuel => "fuel",
            Field::Gearbox => "gearbox",
            Field::Body => "body",
            Field::Color => "color",
            Field::Drivetrain => "drivetrain",
            Field::Year => "year",
            Field::Km => "km",
            Field::Power => "power",
            Field::CylinderCap => "cylinder_cap",
            Field::Doors => "doors",
            Field::Consumption => "consumption",
        }
    }

    /// Whether the field expects numeric input (`<input type="number">`).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Year
                | Field::Km
                | Field::Power
                | Field::CylinderCap
                | Field::Doors
                | Field::Consumption
        )
    }
}

impl Flag {
    /// Every checkbox field, in form order.
    pub const ALL: [Flag; 5] = [
        Flag::NoAccident,
        Flag::ServiceBook,
        Flag::ParticleFilter,
        Flag::Matriculated,
        Flag::FirstOwner,
    ];

    /// HTML control name of the checkbox.
    pub fn name(self) -> &'static str {
        match self {
            Flag::NoAccident => "no_accident",
            Flag::ServiceBook => "service_book",
            Flag::ParticleFilter => "particle_filter",
            Flag::Matriculated => "matriculated",
            Flag::FirstOwner => "first_owner",
        }
    }
}

impl ListingForm {
    /// Returns the form to its pristine state. Equivalent to replacing the
    /// whole value with `Default`, so it covers all fields generically.
    pub fn clear(&mut self) {
        *self = ListingForm::default();
    }

    /// Read access to a text or numeric field by binding id.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Brand => &self.brand,
            Field::Model => &self.model,
            Field::Fuel => &self.fuel,
            Field::Gearbox => &self.gearbox,
            Field::Body => &self.body,
            Field::Color => &self.color,
            Field::Drivetrain => &self.drivetrain,
            Field::Year => &self.year,
            Field::Km => &self.km,
            Field::Power => &self.power,
            Field::CylinderCap => &self.cylinder_cap,
            Field::Doors => &self.doors,
            Field::Consumption => &self.consumption,
        }
    }

    /// Write access to a text or numeric field by binding id.
    pub fn set_field(&mut self, field: Field, value: String) {
        *match field {
            Field::Brand => &mut self.brand,
            Field::Model => &mut self.model,
            Field::Fuel => &mut self.fuel,
            Field::Gearbox => &mut self.gearbox,
            Field::Body => &mut self.body,
            Field::Color => &mut self.color,
            Field::Drivetrain => &mut self.drivetrain,
            Field::Year => &mut self.year,
            Field::Km => &mut self.km,
            Field::Power => &mut self.power,
            Field::CylinderCap => &mut self.cylinder_cap,
            Field::Doors => &mut self.doors,
            Field::Consumption => &mut self.consumption,
        } = value;
    }

    /// Read access to a checkbox field by binding id.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::NoAccident => self.no_accident,
            Flag::ServiceBook => self.service_book,
            Flag::ParticleFilter => self.particle_filter,
            Flag::Matriculated => self.matriculated,
            Flag::FirstOwner => self.first_owner,
        }
    }

    /// Write access to a checkbox field by binding id.
    pub fn set_flag(&mut self, flag: Flag, checked: bool) {
        *match flag {
            Flag::NoAccident => &mut self.no_accident,
            Flag::ServiceBook => &mut self.service_book,
            Flag::ParticleFilter => &mut self.particle_filter,
            Flag::Matriculated => &mut self.matriculated,
            Flag::FirstOwner => &mut self.first_owner,
        } = checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_pristine() {
        let form = ListingForm::default();
        for field in Field::ALL {
            assert!(
                form.field(field).is_empty(),
                "field `{}` not empty by default",
                field.name()
            );
        }
        for flag in Flag::ALL {
            assert!(
                !form.flag(flag),
                "flag `{}` not unchecked by default",
                flag.name()
            );
        }
    }

    // Walks the serialized struct so the property holds for every field
    // present at test time, including ones not yet covered by the binding
    // enums.
    #[test]
    fn default_form_is_pristine_for_all_struct_fields() {
        let value = serde_json::to_value(ListingForm::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.is_empty());

        for (name, value) in object {
            match value {
                serde_json::Value::String(s) => {
                    assert!(s.is_empty(), "field `{}` not empty by default", name)
                }
                serde_json::Value::Bool(b) => {
                    assert!(!b, "flag `{}` not false by default", name)
                }
                other => panic!("unexpected value for `{}`: {:?}", name, other),
            }
        }
    }

    #[test]
    fn clear_returns_every_field_to_default() {
        let mut form = ListingForm::default();
        for field in Field::ALL {
            form.set_field(field, "x".to_string());
        }
        for flag in Flag::ALL {
            form.set_flag(flag, true);
        }

        form.clear();
        assert_eq!(form, ListingForm::default());
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut form = ListingForm::default();
        form.set_field(Field::Brand, "Dacia".to_string());
        form.set_field(Field::Year, "2021".to_string());
        assert_eq!(form.field(Field::Brand), "Dacia");
        assert_eq!(form.brand, "Dacia");
        assert_eq!(form.year, "2021");

        form.set_flag(Flag::Matriculated, true);
        assert!(form.flag(Flag::Matriculated));
        assert!(form.matriculated);
    }

    #[test]
    fn control_names_are_unique() {
        let mut names: Vec<&str> = Field::ALL
            .iter()
            .map(|f| f.name())
            .chain(Flag::ALL.iter().map(|f| f.name()))
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len() + Flag::ALL.len());
    }
}
