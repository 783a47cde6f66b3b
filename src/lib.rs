//! Phone Detector Bot - a Telegram bot that validates, normalizes, and
//! classifies phone numbers.
//!
//! The bot accepts free-text messages, interprets each one as a candidate
//! telephone number, and replies with validation status plus normalized
//! national/international formats and a guessed country and number type.
//! Parsing itself is delegated to the `phonenumber` library; this crate owns
//! the cleanup and country-guessing heuristics around it.
//!
//! # Architecture
//!
//! - **domain**: cleaned-number and display-record value objects
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **grammar**: the phone-library seam and its `phonenumber` adapter
//! - **services**: the validation/classification pipeline
//! - **bot**: command routing and the Telegram dispatcher
//! - **http**: health endpoint

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod grammar;
pub mod http;
pub mod services;

pub use config::Config;
pub use domain::{CleanedNumber, NumberKind, PhoneRecord};
pub use error::{ConfigError, PhoneError, TransportError};
pub use grammar::{LibPhoneGrammar, ParsedCandidate, PhoneGrammar};
pub use services::{GuessConfig, PhoneService};
