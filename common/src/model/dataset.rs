//! Fixed demonstration datasets used to pre-fill the listing form.

use super::listing::ListingForm;

/// One fixed, named set of field values.
///
/// Loading an example is a single operation parameterized by a dataset
/// value; the two buttons in the UI only differ in which constant they
/// carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleListing {
    pub brand: &'static str,
    pub model: &'static str,
    pub fuel: &'static str,
    pub gearbox: &'static str,
    pub body: &'static str,
    pub color: &'static str,
    pub drivetrain: &'static str,

    pub year: u32,
    pub km: u32,
    pub power: u32,
    pub cylinder_cap: u32,
    pub doors: u32,
    pub consumption: f64,

    pub no_accident: bool,
    pub service_book: bool,
    pub particle_filter: bool,
    pub matriculated: bool,
    pub first_owner: bool,
}

pub const AUDI_A5: ExampleListing = ExampleListing {
    brand: "Audi",
    model: "A5",
    fuel: "Diesel",
    gearbox: "Automata",
    body: "Sedan",
    color: "Maro",
    drivetrain: "Fata",

    year: 2019,
    km: 155_000,
    power: 190,
    cylinder_cap: 1998,
    doors: 4,
    consumption: 4.8,

    no_accident: true,
    service_book: true,
    particle_filter: true,
    matriculated: false,
    first_owner: false,
};

pub const VW_TIGUAN: ExampleListing = ExampleListing {
    brand: "Volkswagen",
    model: "Tiguan",
    fuel: "Diesel",
    gearbox: "Manuala",
    body: "SUV",
    color: "Gri",
    drivetrain: "4x4",

    year: 2018,
    km: 188_820,
    power: 150,
    cylinder_cap: 1968,
    doors: 5,
    consumption: 6.7,

    no_accident: false,
    service_book: false,
    particle_filter: true,
    matriculated: true,
    first_owner: true,
};

impl ExampleListing {
    /// Short label shown to the user when the dataset is loaded.
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Writes every dataset value into the corresponding form field,
    /// overwriting whatever the form currently holds. Fields outside the
    /// dataset (none today) would be left untouched.
    pub fn apply(&self, form: &mut ListingForm) {
        form.brand = self.brand.to_string();
        form.model = self.model.to_string();
        form.fuel = self.fuel.to_string();
        form.gearbox = self.gearbox.to_string();
        form.body = self.body.to_string();
        form.color = self.color.to_string();
        form.drivetrain = self.drivetrain.to_string();

        form.year = self.year.to_string();
        form.km = self.km.to_string();
        form.power = self.power.to_string();
        form.cylinder_cap = self.cylinder_cap.to_string();
        form.doors = self.doors.to_string();
        form.consumption = self.consumption.to_string();

        form.no_accident = self.no_accident;
        form.service_book = self.service_book;
        form.particle_filter = self.particle_filter;
        form.matriculated = self.matriculated;
        form.first_owner = self.first_owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_a_fills_exact_values() {
        let mut form = ListingForm::default();
        AUDI_A5.apply(&mut form);

        assert_eq!(form.brand, "Audi");
        assert_eq!(form.model, "A5");
        assert_eq!(form.fuel, "Diesel");
        assert_eq!(form.gearbox, "Automata");
        assert_eq!(form.body, "Sedan");
        assert_eq!(form.color, "Maro");
        assert_eq!(form.drivetrain, "Fata");

        assert_eq!(form.year, "2019");
        assert_eq!(form.km, "155000");
        assert_eq!(form.power, "190");
        assert_eq!(form.cylinder_cap, "1998");
        assert_eq!(form.doors, "4");
        assert_eq!(form.consumption, "4.8");

        assert!(form.no_accident);
        assert!(form.service_book);
        assert!(form.particle_filter);
        assert!(!form.matriculated);
        assert!(!form.first_owner);
    }

    #[test]
    fn example_b_fills_exact_values() {
        let mut form = ListingForm::default();
        VW_TIGUAN.apply(&mut form);

        assert_eq!(form.brand, "Volkswagen");
        assert_eq!(form.model, "Tiguan");
        assert_eq!(form.fuel, "Diesel");
        assert_eq!(form.gearbox, "Manuala");
        assert_eq!(form.body, "SUV");
        assert_eq!(form.color, "Gri");
        assert_eq!(form.drivetrain, "4x4");

        assert_eq!(form.year, "2018");
        assert_eq!(form.km, "188820");
        assert_eq!(form.power, "150");
        assert_eq!(form.cylinder_cap, "1968");
        assert_eq!(form.doors, "5");
        assert_eq!(form.consumption, "6.7");

        assert!(!form.no_accident);
        assert!(!form.service_book);
        assert!(form.particle_filter);
        assert!(form.matriculated);
        assert!(form.first_owner);
    }

    #[test]
    fn apply_overwrites_previous_values() {
        let mut form = ListingForm::default();
        AUDI_A5.apply(&mut form);
        VW_TIGUAN.apply(&mut form);

        let mut expected = ListingForm::default();
        VW_TIGUAN.apply(&mut expected);
        assert_eq!(form, expected);
    }

    #[test]
    fn labels_name_the_cars() {
        assert_eq!(AUDI_A5.label(), "Audi A5");
        assert_eq!(VW_TIGUAN.label(), "Volkswagen Tiguan");
    }
}
