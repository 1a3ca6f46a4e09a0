//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the generic entity storage contract.
//! - Keep storage details out of callers that only need CRUD + search.
//!
//! # Invariants
//! - Repository inserts must enforce `Entity::validate()` before storing.
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`)
//!   instead of panicking on bad input.

pub mod contact_repo;
pub mod memory_repo;
pub mod repository;
