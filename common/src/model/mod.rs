pub mod dataset;
pub mod input;
pub mod listing;
