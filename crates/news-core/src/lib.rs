//! # news-core
//!
//! Core types, ID generation, validation rules, and error types for Newsroom.
//!
//! This crate provides the foundational types shared across all Newsroom crates:
//! - Entity structs for all domain objects (users, sources, glossary terms,
//!   AI model configs, articles)
//! - Role and category enums
//! - Timestamp-based record ids
//! - Field validation rules used by the entity editor
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod validation;
