//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64url)
//! - Bearer token header extraction

pub mod bearer;
pub mod crypto;
