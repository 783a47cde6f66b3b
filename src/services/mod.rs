//! Service layer.
//!
//! Business logic for phone-number validation and classification.

pub mod phone_service;

pub use phone_service::{GuessConfig, PhoneService};
