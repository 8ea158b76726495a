// crates/formwork-store-json/src/store.rs
// ============================================================================
// Module: JSON Template Store
// Description: Durable TemplateStore over one versioned JSON document.
// Purpose: Persist template snapshots with fail-closed integrity loads and
//          atomic last-write-wins saves.
// Dependencies: formwork-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The store keeps the full template list in a single JSON document, the
//! durable analog of a browser storage blob. Saves serialize the whole list
//! and replace the document atomically (temp file + rename in the same
//! directory); a list that would exceed the document size cap is rejected
//! before anything touches disk, since the load path could never return it.
//! Loads treat the document as untrusted: the format version
//! must match, each record's canonical content hash must recompute, and
//! each record must pass structural validation; any failure loads nothing.
//! Lightweight atomic counters expose load/save/integrity-failure totals.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use formwork_core::FieldRegistry;
use formwork_core::SchemaRecord;
use formwork_core::StoreError;
use formwork_core::TemplateStore;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Current on-disk document format version.
pub const STORE_FORMAT_VERSION: u32 = 1;
/// Maximum document size accepted on load.
pub const MAX_DOCUMENT_BYTES: u64 = 4 * 1024 * 1024;
/// Suffix appended to the document path for the temporary replacement file.
const TMP_SUFFIX: &str = ".tmp";

// ============================================================================
// SECTION: Document Format
// ============================================================================

/// On-disk document wrapping the persisted template list.
///
/// # Invariants
/// - `schema_version` identifies the document format; unknown versions are
///   rejected on load.
#[derive(Debug, Serialize, Deserialize)]
struct TemplateDocument {
    /// Document format version.
    schema_version: u32,
    /// Persisted template snapshots.
    templates: Vec<SchemaRecord>,
}

// ============================================================================
// SECTION: Config
// ============================================================================

/// Configuration for the JSON template store.
///
/// # Invariants
/// - `path` names the document file itself; its parent directory must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Path of the JSON document.
    pub path: PathBuf,
    /// Verify each record's canonical content hash on load.
    pub verify_hashes: bool,
}

impl JsonStoreConfig {
    /// Creates a config for the given document path with hash verification on.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            verify_hashes: true,
        }
    }
}

// ============================================================================
// SECTION: Store Stats
// ============================================================================

/// Snapshot of store counters.
///
/// # Invariants
/// - Values are monotonic totals since store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonStoreStats {
    /// Completed load operations.
    pub loads: u64,
    /// Completed save operations.
    pub saves: u64,
    /// Loads rejected by integrity or validation checks.
    pub integrity_failures: u64,
}

/// Internal atomic counters backing [`JsonStoreStats`].
#[derive(Debug, Default)]
struct Counters {
    /// Completed load operations.
    loads: AtomicU64,
    /// Completed save operations.
    saves: AtomicU64,
    /// Loads rejected by integrity or validation checks.
    integrity_failures: AtomicU64,
}

// ============================================================================
// SECTION: JSON Template Store
// ============================================================================

/// Durable template store over one versioned JSON document.
///
/// # Invariants
/// - Saves replace the document atomically; readers never observe a partial
///   write.
/// - Loads fail closed: a document that fails version, size, integrity, or
///   structural checks yields an error, never a partial list.
#[derive(Debug)]
pub struct JsonTemplateStore {
    /// Store configuration.
    config: JsonStoreConfig,
    /// Registry used for structural validation of loaded records.
    registry: FieldRegistry,
    /// Operation counters.
    counters: Counters,
}

impl JsonTemplateStore {
    /// Creates a store over the configured document path.
    #[must_use]
    pub fn new(config: JsonStoreConfig) -> Self {
        Self {
            config,
            registry: FieldRegistry::new(),
            counters: Counters::default(),
        }
    }

    /// Creates a store at `path` with default configuration.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonStoreConfig::new(path))
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns a snapshot of the store counters.
    #[must_use]
    pub fn stats(&self) -> JsonStoreStats {
        JsonStoreStats {
            loads: self.counters.loads.load(Ordering::Relaxed),
            saves: self.counters.saves.load(Ordering::Relaxed),
            integrity_failures: self.counters.integrity_failures.load(Ordering::Relaxed),
        }
    }

    /// Reads and verifies the document, yielding the template list.
    fn read_document(&self) -> Result<Vec<SchemaRecord>, StoreError> {
        let metadata = match fs::metadata(&self.config.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        if metadata.len() > MAX_DOCUMENT_BYTES {
            return Err(StoreError::Invalid(format!(
                "document too large: {} > {MAX_DOCUMENT_BYTES}",
                metadata.len()
            )));
        }

        let bytes = fs::read(&self.config.path).map_err(|err| StoreError::Io(err.to_string()))?;
        let document: TemplateDocument = serde_json::from_slice(&bytes)
            .map_err(|err| StoreError::Corrupt(format!("document parse failed: {err}")))?;

        if document.schema_version != STORE_FORMAT_VERSION {
            return Err(StoreError::VersionMismatch(format!(
                "document version {} (expected {STORE_FORMAT_VERSION})",
                document.schema_version
            )));
        }

        for record in &document.templates {
            self.verify_record(record)?;
        }
        Ok(document.templates)
    }

    /// Verifies one loaded record against its hash and structural invariants.
    fn verify_record(&self, record: &SchemaRecord) -> Result<(), StoreError> {
        if self.config.verify_hashes {
            let recomputed = record
                .recompute_content_hash()
                .map_err(|err| StoreError::Invalid(format!("hashing failed: {err}")))?;
            if recomputed != record.content_hash {
                return Err(StoreError::Corrupt(format!(
                    "content hash mismatch for template {}",
                    record.template_id
                )));
            }
        }
        record
            .to_draft()
            .validate(&self.registry)
            .map_err(|err| StoreError::Invalid(format!("template {}: {err}", record.template_id)))
    }

    /// Serializes the list, enforces the size cap, and replaces the document
    /// atomically.
    fn write_document(&self, templates: &[SchemaRecord]) -> Result<(), StoreError> {
        let document = TemplateDocument {
            schema_version: STORE_FORMAT_VERSION,
            templates: templates.to_vec(),
        };
        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|err| StoreError::Invalid(format!("document encode failed: {err}")))?;
        // A document the load path would reject must never be written.
        if u64::try_from(bytes.len()).unwrap_or(u64::MAX) > MAX_DOCUMENT_BYTES {
            return Err(StoreError::Invalid(format!(
                "document too large: {} > {MAX_DOCUMENT_BYTES}",
                bytes.len()
            )));
        }

        let mut tmp_path = self.config.path.clone().into_os_string();
        tmp_path.push(TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_path);

        fs::write(&tmp_path, &bytes).map_err(|err| StoreError::Io(err.to_string()))?;
        fs::rename(&tmp_path, &self.config.path).map_err(|err| {
            // Leave no stale temp file behind when the rename fails.
            let _ = fs::remove_file(&tmp_path);
            StoreError::Io(err.to_string())
        })?;
        Ok(())
    }
}

impl TemplateStore for JsonTemplateStore {
    fn load_templates(&self) -> Result<Vec<SchemaRecord>, StoreError> {
        match self.read_document() {
            Ok(templates) => {
                self.counters.loads.fetch_add(1, Ordering::Relaxed);
                Ok(templates)
            }
            Err(err) => {
                if matches!(err, StoreError::Corrupt(_) | StoreError::Invalid(_)) {
                    self.counters.integrity_failures.fetch_add(1, Ordering::Relaxed);
                }
                Err(err)
            }
        }
    }

    fn save_templates(&self, templates: &[SchemaRecord]) -> Result<(), StoreError> {
        self.write_document(templates)?;
        self.counters.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn readiness(&self) -> Result<(), StoreError> {
        let parent = self.config.path.parent().unwrap_or_else(|| Path::new("."));
        if parent.as_os_str().is_empty() || parent.is_dir() {
            return Ok(());
        }
        Err(StoreError::Io(format!(
            "store directory missing: {}",
            parent.display()
        )))
    }
}
