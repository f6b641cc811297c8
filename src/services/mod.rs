// src/services/mod.rs
pub mod analysis;
pub mod calculations;
pub mod date_format;
pub mod eligibility;
pub mod normalize;
pub mod ranking;
pub mod tradeweb;
