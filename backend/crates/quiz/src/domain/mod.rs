//! Domain Layer

pub mod generator;
pub mod question;
