//! Value Objects

pub mod user_name;
