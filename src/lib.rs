//! # highlight-errors
//!
//! Editor commands that pick the obvious choice for the user: run the one
//! import fix at the caret, jump straight to the only other reference, or
//! fall back from go-to-definition to references when the definition
//! lookup goes nowhere. When there is no obvious choice the host's own
//! chooser UI takes over.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extension → activation, command registry, dispatch by id
//!   ↓
//! commands  → the four command handlers
//!   ↓
//! config    → settings supplied by the host
//!   ↓
//! policy    → decide(): auto-apply / delegate / no-op, filter predicates
//!   ↓
//! host      → EditorHost capability trait, MemoryHost adapter
//!   ↓
//! core      → word lookup on lines of text
//!   ↓
//! base      → Position, Span, Selection, DocumentId, TextDocument
//! ```

// ============================================================================
// MODULES (dependency order: base → core → host → policy → commands → extension)
// ============================================================================

/// Foundation types: positions, spans, documents
pub mod base;

/// Text helpers
pub mod core;

/// Host capability abstraction and the in-memory host
pub mod host;

/// Disambiguation policy engine
pub mod policy;

/// Host-provided settings
pub mod config;

/// Command handlers
pub mod commands;

/// Activation lifecycle and dispatch
pub mod extension;

pub use base::{DocumentId, Position, Selection, Span, TextDocument};
pub use commands::CommandId;
pub use config::{ConfigError, ExtensionConfig};
pub use extension::{CommandError, Extension, ExtensionContext};
pub use host::{EditorHost, EditorState, HostError, MemoryHost};
pub use policy::{Decision, FilterPredicate, Policy, decide};
