//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`locale::Locale`] — message catalog for engine-generated text

pub mod error;
pub mod locale;
