//! Infrastructure layer for the Grimoire skill subsystem.
//!
//! Contains the SQLite implementation of the skill store port defined in
//! `grimoire-core`.

pub mod sqlite;
