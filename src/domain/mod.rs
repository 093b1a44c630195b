//! Domain rules.

pub mod tour;

pub use tour::TourRules;
