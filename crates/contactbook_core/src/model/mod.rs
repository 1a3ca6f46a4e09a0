//! Domain model for stored records.
//!
//! # Responsibility
//! - Define the generic entity contract used by repositories.
//! - Define the contact record and its validity rules.
//!
//! # Invariants
//! - Every stored record is identified by a stable `EntityId`.
//! - Validity is checked on insertion, not on every mutation.

pub mod contact;
pub mod entity;
