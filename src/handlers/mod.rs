// src/handlers/mod.rs
pub mod analyse;
pub mod report;
