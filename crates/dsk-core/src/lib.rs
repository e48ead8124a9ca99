//! # dsk-core
//!
//! Core record types and error types for docsketch.
//!
//! This crate provides the foundational types shared across all docsketch crates:
//! - [`ContentAnalysis`](analysis::ContentAnalysis), the structured record derived from document text
//! - Color directives found in (or generated for) a document
//! - Design records: palette, component descriptors, screens, the final report
//! - Enums for color roles, harmony families, component kinds and animations
//! - Cross-cutting error types

pub mod analysis;
pub mod design;
pub mod enums;
pub mod errors;

pub use analysis::{ColorDirectives, ContentAnalysis};
pub use design::{ComponentDescriptor, Palette, Report, Screen};
pub use errors::CoreError;
