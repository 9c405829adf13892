//! # assethub-domain
//!
//! Pure domain model for the assethub registration service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Assets** (the submitted record, the validated record, and the
//!   stored form stamped with an id and creation time)
//! - Define the **validator** that turns a submission into a list of
//!   human-readable errors
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod asset;
pub mod validation;
