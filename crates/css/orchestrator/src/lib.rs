//! Style data shared by the CSS module crates.
//! This crate owns the computed-style model; layout modules read it but never
//! run the cascade themselves.

pub mod style_model;

pub use style_model::ComputedStyle;
