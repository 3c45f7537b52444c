//! Business logic and port definitions for the Grimoire skill subsystem.
//!
//! This crate defines the ports (the skill store and skill catalog traits)
//! that the infrastructure layer implements, plus everything that is pure
//! computation: the layout codec, the process-wide skill cache, and the
//! client packet encoder. It depends only on `grimoire-types` -- never on
//! `grimoire-infra` or any database/IO crate.

pub mod catalog;
pub mod repository;
pub mod skills;
pub mod wire;
