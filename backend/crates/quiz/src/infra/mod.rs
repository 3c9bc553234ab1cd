//! Infrastructure Layer

pub mod gemini;
