//! Domain value objects and types.
//!
//! This module contains the shapes the pipeline passes around: the cleaned
//! dialable form of an inbound candidate, the classified number kind, and the
//! display record a successful analysis produces. Everything here is immutable
//! and produced fresh per request.

pub mod cleaned_number;
pub mod country_names;
pub mod number_kind;
pub mod phone_record;

pub use cleaned_number::CleanedNumber;
pub use country_names::country_name;
pub use number_kind::NumberKind;
pub use phone_record::PhoneRecord;
