//! # docket-core
//!
//! Core types and error types for Docket, the eviction case status tracker.
//!
//! This crate provides the foundational types shared across all Docket crates:
//! - Entity structs for cases, timeline events, and documents
//! - Construction contracts (`NewCase`, `NewTimelineEvent`, `NewDocument`)
//!   carrying the documented defaults
//! - Closed status enums for timeline events and documents
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
