//! Shared domain types for the Grimoire skill subsystem.
//!
//! This crate contains the per-character skill data model (record, layout,
//! slots, entries) and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod character;
pub mod error;
pub mod skills;
