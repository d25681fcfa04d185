//! Foundation types shared by every other module:
//! - [`Position`], [`Span`], [`Selection`] - 0-indexed document coordinates
//! - [`DocumentId`] - identity of a document in the host
//! - [`TextDocument`] - text snapshot with word lookup
//!
//! This module has NO dependencies on host or command code.

mod document;
mod position;

pub use document::{DocumentId, TextDocument};
pub use position::{Position, Selection, Span};
