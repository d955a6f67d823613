//! # msgscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the msgscope library. Import this module to get quick access to the essential
//! types for working with MAPI property streams.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all msgscope operations
pub use crate::Error;

/// The result type used throughout msgscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The property table codec and its stream placement selector
pub use crate::{DecodeConfig, MessageCounts, PropertyTable, TableKind};

/// Low-level stream parsing cursor
pub use crate::Parser;

// ================================================================================================
// Identities and Wire Types
// ================================================================================================

/// Well-known property identity catalog and custom identities
pub use crate::mapi::property::MapiProperty;

/// Wire type catalog, slot widths and the multi-valued flag
pub use crate::mapi::types::{MapiType, TypeLength, MULTI_VALUED_FLAG};

// ================================================================================================
// Values and Payloads
// ================================================================================================

/// Typed property values, their payloads and the per-record flag word
pub use crate::mapi::value::{PointerValue, PropertyData, PropertyFlags, PropertyValue};

/// Sibling entries for variable-length payloads and their naming scheme
pub use crate::mapi::chunk::{Chunk, ChunkRc, PROPERTIES_ENTRY_NAME, VARIABLE_ENTRY_PREFIX};

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Anomalies collected while decoding, resolving and encoding
pub use crate::mapi::diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics,
};
