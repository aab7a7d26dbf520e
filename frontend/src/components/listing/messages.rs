use common::model::dataset::ExampleListing;
use common::model::listing::{Field, Flag};

#[derive(Clone)]
pub enum Msg {
    EditField(Field, String),
    SetFlag(Flag, bool),
    ClearForm,
    LoadExample(ExampleListing),
    PhotoSelected(web_sys::File),
    Submit,
}
