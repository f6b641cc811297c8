// src/lib.rs

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use error::{GiltError, Result};
