//! Diagnostics collection for property stream decoding and resolution.
//!
//! This module provides types for collecting and reporting diagnostic messages
//! during property stream decoding. It supports lenient decoding scenarios where
//! malformed or truncated streams may contain invalid records that should be
//! reported but not prevent decoding from continuing.
//!
//! # Architecture
//!
//! The diagnostics system is designed to be shared across the decode pipeline:
//! - **`PropertyTable` decoding**: Reports structural issues (unknown type codes, truncation)
//! - **Chunk resolution**: Reports missing or conflicting sibling entries
//! - **Encoding**: Reports values that cannot be written back
//!
//! The [`Diagnostics`] container uses `boxcar::Vec` for thread-safe, lock-free
//! append operations, allowing diagnostics to be collected while the container is
//! shared behind an [`std::sync::Arc`] without synchronization overhead.
//!
//! # Key Components
//!
//! - [`Diagnostics`] - Thread-safe container for diagnostic entries
//! - [`Diagnostic`] - Individual diagnostic entry with severity and context
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`DiagnosticCategory`] - Category of the diagnostic source
//!
//! # Usage Examples
//!
//! ## Collecting Diagnostics During Decoding
//!
//! ```rust,no_run
//! use msgscope::mapi::diagnostics::{Diagnostics, DiagnosticSeverity, DiagnosticCategory};
//! use std::sync::Arc;
//!
//! let diagnostics = Arc::new(Diagnostics::new());
//!
//! // Report a duplicate record
//! diagnostics.warning(
//!     DiagnosticCategory::Properties,
//!     "Duplicate record for property 0x0037, keeping the later value",
//! );
//!
//! // Report a missing sibling entry
//! diagnostics.warning(
//!     DiagnosticCategory::Chunk,
//!     "No sibling entry found for variable-length property 0x1000",
//! );
//!
//! // Check if any diagnostics were collected
//! if diagnostics.has_warnings() {
//!     println!("Warnings found: {}", diagnostics.warning_count());
//! }
//!
//! // Iterate over all diagnostics
//! for entry in diagnostics.iter() {
//!     println!("[{:?}] {}: {}", entry.severity, entry.category, entry.message);
//! }
//! ```
//!
//! ## Filtering by Category
//!
//! ```rust,no_run
//! use msgscope::mapi::diagnostics::{Diagnostics, DiagnosticCategory};
//! use std::sync::Arc;
//!
//! let diagnostics = Arc::new(Diagnostics::new());
//! // ... decoding happens ...
//!
//! // Get only type related diagnostics
//! let type_issues: Vec<_> = diagnostics
//!     .iter()
//!     .filter(|d| d.category == DiagnosticCategory::Type)
//!     .collect();
//!
//! println!("Type issues: {}", type_issues.len());
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are [`Send`] and [`Sync`]. The [`Diagnostics`] container
//! uses `boxcar::Vec` internally, which provides lock-free concurrent append operations.
//! Multiple threads can safely add diagnostics simultaneously without coordination.
//!
//! # Integration
//!
//! All diagnostics in this crate originate in [`crate::mapi::properties`]: the
//! decode pass reports record-level anomalies, the resolution pass reports
//! missing sibling entries, and the encode pass reports values it cannot write
//! back.

use std::fmt::{self, Write};

use strum::{EnumIter, IntoEnumIterator};

/// Severity level of a diagnostic entry.
///
/// Determines how the diagnostic should be treated and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    ///
    /// Used for noting unusual but valid constructs.
    Info,

    /// Warning about potentially problematic stream content.
    ///
    /// The table can still be decoded and used, but some properties
    /// may be missing, partially read, or carry an unexpected type.
    Warning,

    /// Error indicating invalid or corrupt stream content.
    ///
    /// Decoding stops at the affected record, though previously decoded
    /// properties remain available in the partial table.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category indicating the source or type of diagnostic.
///
/// Helps classify diagnostics for filtering and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DiagnosticCategory {
    /// Issues with the property stream structure or individual records.
    ///
    /// Examples: duplicate records, truncated payloads, oversized declared lengths.
    Properties,

    /// Issues with sibling entries holding variable-length payloads.
    ///
    /// Examples: missing sibling entries, entries bound to conflicting data.
    Chunk,

    /// Issues with wire type codes.
    ///
    /// Examples: unknown type codes, mismatches between declared and expected types.
    Type,

    /// General decoding issues not fitting other categories.
    ///
    /// Examples: preamble problems, unexpected trailing data.
    General,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Properties => write!(f, "Properties"),
            DiagnosticCategory::Chunk => write!(f, "Chunk"),
            DiagnosticCategory::Type => write!(f, "Type"),
            DiagnosticCategory::General => write!(f, "General"),
        }
    }
}

/// A single diagnostic entry with context information.
///
/// Contains the severity, category, message, and optional location information
/// for a diagnostic reported during property stream decoding or resolution.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Category indicating the source of this diagnostic.
    pub category: DiagnosticCategory,

    /// Human-readable description of the issue.
    pub message: String,

    /// Optional stream offset where the issue was found.
    pub offset: Option<u64>,

    /// Optional property identifier related to the issue.
    pub property: Option<u32>,
}

impl Diagnostic {
    /// Creates a new diagnostic entry.
    ///
    /// # Arguments
    ///
    /// * `severity` - Severity level of the diagnostic
    /// * `category` - Category of the diagnostic source
    /// * `message` - Human-readable description
    pub fn new(
        severity: DiagnosticSeverity,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            offset: None,
            property: None,
        }
    }

    /// Adds stream offset information to the diagnostic.
    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds property identifier information to the diagnostic.
    #[must_use]
    pub fn with_property(mut self, property: u32) -> Self {
        self.property = Some(property);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;

        if let Some(offset) = self.offset {
            write!(f, " (offset: 0x{offset:08x})")?;
        }

        if let Some(property) = self.property {
            write!(f, " (property: 0x{property:04x})")?;
        }

        Ok(())
    }
}

/// Thread-safe container for collecting diagnostic entries.
///
/// Uses `boxcar::Vec` internally for lock-free concurrent append operations.
/// Multiple threads can safely add diagnostics simultaneously.
///
/// # Example
///
/// ```rust,no_run
/// use msgscope::mapi::diagnostics::{Diagnostics, DiagnosticCategory};
/// use std::sync::Arc;
///
/// let diagnostics = Arc::new(Diagnostics::new());
///
/// // Can be cloned and shared across threads
/// let diag_clone = Arc::clone(&diagnostics);
/// std::thread::spawn(move || {
///     diag_clone.warning(DiagnosticCategory::Chunk, "Missing sibling entry");
/// });
///
/// // Original can still be used
/// diagnostics.error(DiagnosticCategory::Properties, "Declared length exceeds limit");
/// ```
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds an informational diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the observation
    pub fn info(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(DiagnosticSeverity::Info, category, message));
    }

    /// Adds a warning diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the issue
    pub fn warning(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Warning,
            category,
            message,
        ));
    }

    /// Adds an error diagnostic.
    ///
    /// # Arguments
    ///
    /// * `category` - Category of the diagnostic
    /// * `message` - Description of the error
    pub fn error(&self, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::new(
            DiagnosticSeverity::Error,
            category,
            message,
        ));
    }

    /// Adds a diagnostic entry directly.
    ///
    /// Use this for diagnostics that need additional context like
    /// offset or property identifier information.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns true if any warning-level diagnostics have been collected.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Returns the number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Warning)
            .count()
    }

    /// Returns the number of info-level diagnostics.
    pub fn info_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Info)
            .count()
    }

    /// Returns an iterator over all diagnostics.
    ///
    /// Note: Uses boxcar's iterator which yields `(index, &Diagnostic)` tuples.
    /// The index can be ignored in most cases.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns all errors as a vector.
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Error)
            .map(|(_, d)| d)
            .collect()
    }

    /// Returns all warnings as a vector.
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == DiagnosticSeverity::Warning)
            .map(|(_, d)| d)
            .collect()
    }

    /// Returns diagnostics filtered by category.
    pub fn by_category(&self, category: DiagnosticCategory) -> Vec<&Diagnostic> {
        self.entries
            .iter()
            .filter(|(_, d)| d.category == category)
            .map(|(_, d)| d)
            .collect()
    }

    /// Formats a summary of all diagnostics for display.
    ///
    /// Lists per-category counts followed by the individual errors and warnings.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        let error_count = self.error_count();
        let warning_count = self.warning_count();
        let info_count = self.info_count();

        let _ = writeln!(
            output,
            "Diagnostics: {error_count} error(s), {warning_count} warning(s), {info_count} info(s)"
        );

        for category in DiagnosticCategory::iter() {
            let count = self.by_category(category).len();
            if count > 0 {
                let _ = writeln!(output, "  {category}: {count}");
            }
        }

        if error_count > 0 {
            output.push_str("\nErrors:\n");
            for diag in self.errors() {
                let _ = writeln!(output, "  {diag}");
            }
        }

        if warning_count > 0 {
            output.push_str("\nWarnings:\n");
            for diag in self.warnings() {
                let _ = writeln!(output, "  {diag}");
            }
        }

        output
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::new(
            DiagnosticSeverity::Warning,
            DiagnosticCategory::Properties,
            "Test message",
        );

        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.category, DiagnosticCategory::Properties);
        assert_eq!(diag.message, "Test message");
        assert!(diag.offset.is_none());
        assert!(diag.property.is_none());
    }

    #[test]
    fn test_diagnostic_with_context() {
        let diag = Diagnostic::new(
            DiagnosticSeverity::Error,
            DiagnosticCategory::Type,
            "Unknown type code",
        )
        .with_offset(0x20)
        .with_property(0x0037);

        assert_eq!(diag.offset, Some(0x20));
        assert_eq!(diag.property, Some(0x0037));
    }

    #[test]
    fn test_diagnostics_container() {
        let diagnostics = Diagnostics::new();

        diagnostics.info(DiagnosticCategory::General, "Info message");
        diagnostics.warning(DiagnosticCategory::Chunk, "Warning message");
        diagnostics.error(DiagnosticCategory::Properties, "Error message");

        assert_eq!(diagnostics.count(), 3);
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(diagnostics.info_count(), 1);
        assert!(diagnostics.has_errors());
        assert!(diagnostics.has_warnings());
        assert!(diagnostics.has_any());
    }

    #[test]
    fn test_diagnostics_thread_safety() {
        let diagnostics = Arc::new(Diagnostics::new());
        let mut handles = vec![];

        for i in 0..10 {
            let diag_clone = Arc::clone(&diagnostics);
            handles.push(thread::spawn(move || {
                diag_clone.warning(DiagnosticCategory::General, format!("Thread {i} warning"));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.count(), 10);
    }

    #[test]
    fn test_diagnostics_by_category() {
        let diagnostics = Diagnostics::new();

        diagnostics.error(DiagnosticCategory::Chunk, "Chunk error 1");
        diagnostics.error(DiagnosticCategory::Chunk, "Chunk error 2");
        diagnostics.error(DiagnosticCategory::Type, "Type error");
        diagnostics.warning(DiagnosticCategory::Chunk, "Chunk warning");

        let chunk_diags = diagnostics.by_category(DiagnosticCategory::Chunk);
        assert_eq!(chunk_diags.len(), 3);

        let type_diags = diagnostics.by_category(DiagnosticCategory::Type);
        assert_eq!(type_diags.len(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            DiagnosticSeverity::Warning,
            DiagnosticCategory::Properties,
            "Payload truncated",
        )
        .with_offset(0x1234)
        .with_property(0x1000);

        let display = format!("{diag}");
        assert!(display.contains("WARN"));
        assert!(display.contains("Properties"));
        assert!(display.contains("Payload truncated"));
        assert!(display.contains("0x00001234"));
        assert!(display.contains("0x1000"));
    }

    #[test]
    fn test_summary_lists_categories() {
        let diagnostics = Diagnostics::new();

        diagnostics.warning(DiagnosticCategory::Type, "Unexpected type 0x001E");
        diagnostics.warning(DiagnosticCategory::Type, "Unknown type code 0x00F0");
        diagnostics.info(DiagnosticCategory::General, "Trailing padding");

        let summary = diagnostics.summary();
        assert!(summary.contains("0 error(s), 2 warning(s), 1 info(s)"));
        assert!(summary.contains("Type: 2"));
        assert!(summary.contains("General: 1"));
        assert!(!summary.contains("Chunk:"));
    }
}
