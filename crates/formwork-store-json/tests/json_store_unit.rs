// crates/formwork-store-json/tests/json_store_unit.rs
// ============================================================================
// Module: JSON Store Tests
// Description: Tests for the file-backed JSON template store.
// Purpose: Verify persistence round trips, integrity checks, and counters.
// ============================================================================

//! File-backed store behavior: fresh-install loads, save/load round trips,
//! fail-closed handling of tampered or incompatible documents, last-write-wins
//! replacement, and operation counters.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::fs;
use std::path::PathBuf;

use formwork_core::FieldType;
use formwork_core::SchemaRecord;
use formwork_core::StoreError;
use formwork_core::TemplateId;
use formwork_core::TemplateStore;
use formwork_core::Timestamp;
use formwork_core::runtime::FieldPatch;
use formwork_core::runtime::SchemaEditor;
use formwork_store_json::JsonStoreConfig;
use formwork_store_json::JsonTemplateStore;
use formwork_store_json::MAX_DOCUMENT_BYTES;
use formwork_store_json::STORE_FORMAT_VERSION;
use serde_json::Value;
use tempfile::TempDir;

/// Builds a snapshot record named `name` with a couple of fields.
fn record(name: &str, template_id: &str) -> SchemaRecord {
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema(name);
    let draft = editor.add_field(&draft, FieldType::Text).expect("add text");
    let draft = editor.add_field(&draft, FieldType::Select).expect("add select");
    let field_id = draft.fields[1].id.clone();
    let draft = editor.add_option(&draft, &field_id).expect("add option");
    SchemaRecord::snapshot(&draft, TemplateId::new(template_id), Timestamp::Logical(1))
        .expect("snapshot")
}

/// Creates a store over a fresh temp directory.
fn temp_store() -> (TempDir, JsonTemplateStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonTemplateStore::at_path(dir.path().join("templates.json"));
    (dir, store)
}

#[test]
fn fresh_install_loads_empty_list() {
    let (_dir, store) = temp_store();
    assert!(store.load_templates().expect("load").is_empty());
    assert!(!store.path().exists());
    assert_eq!(store.stats().loads, 1);
}

#[test]
fn save_then_load_round_trips_records() {
    let (_dir, store) = temp_store();
    let records = vec![record("Intake", "tpl-intake"), record("Discharge", "tpl-discharge")];

    store.save_templates(&records).expect("save");
    let loaded = store.load_templates().expect("load");
    assert_eq!(loaded, records);

    let stats = store.stats();
    assert_eq!(stats.saves, 1);
    assert_eq!(stats.loads, 1);
    assert_eq!(stats.integrity_failures, 0);
}

#[test]
fn save_replaces_the_whole_document() {
    let (_dir, store) = temp_store();
    store.save_templates(&[record("First", "tpl-a")]).expect("first save");
    store.save_templates(&[record("Second", "tpl-b")]).expect("second save");

    let loaded = store.load_templates().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Second");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (_dir, store) = temp_store();
    store.save_templates(&[record("Only", "tpl-only")]).expect("save");

    let mut tmp_path = store.path().to_path_buf().into_os_string();
    tmp_path.push(".tmp");
    assert!(!PathBuf::from(tmp_path).exists());
}

#[test]
fn oversized_save_is_rejected_before_touching_disk() {
    let (_dir, store) = temp_store();
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema("Oversized");
    let draft = editor.add_field(&draft, FieldType::Paragraph).expect("add paragraph");
    let field_id = draft.fields[0].id.clone();
    let body_len = usize::try_from(MAX_DOCUMENT_BYTES).expect("cap fits usize") + 1024;
    let patch = FieldPatch {
        content: Some("a".repeat(body_len)),
        ..FieldPatch::default()
    };
    let draft = editor.update_field(&draft, &field_id, &patch).expect("patch");
    let oversized =
        SchemaRecord::snapshot(&draft, TemplateId::new("tpl-oversized"), Timestamp::Logical(1))
            .expect("snapshot");

    let err = store.save_templates(&[oversized]).unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)), "unexpected error: {err}");
    assert!(!store.path().exists());
    assert_eq!(store.stats().saves, 0);

    // The store stays usable: a rejected save holds nothing hostage.
    assert!(store.load_templates().expect("load").is_empty());
}

#[test]
fn tampered_field_content_fails_closed_as_corrupt() {
    let (_dir, store) = temp_store();
    store.save_templates(&[record("Tampered", "tpl-tampered")]).expect("save");

    let bytes = fs::read(store.path()).expect("read document");
    let mut document: Value = serde_json::from_slice(&bytes).expect("parse document");
    document["templates"][0]["fields"][0]["label"] = Value::String("edited offline".to_owned());
    fs::write(store.path(), serde_json::to_vec(&document).expect("encode")).expect("write");

    let err = store.load_templates().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)), "unexpected error: {err}");
    assert_eq!(store.stats().integrity_failures, 1);
    assert_eq!(store.stats().loads, 0);
}

#[test]
fn tampering_is_accepted_when_verification_is_disabled() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("templates.json");
    let writer = JsonTemplateStore::at_path(&path);
    writer.save_templates(&[record("Unverified", "tpl-unverified")]).expect("save");

    let bytes = fs::read(&path).expect("read document");
    let mut document: Value = serde_json::from_slice(&bytes).expect("parse document");
    document["templates"][0]["fields"][0]["label"] = Value::String("edited offline".to_owned());
    fs::write(&path, serde_json::to_vec(&document).expect("encode")).expect("write");

    let config = JsonStoreConfig {
        verify_hashes: false,
        ..JsonStoreConfig::new(&path)
    };
    let reader = JsonTemplateStore::new(config);
    let loaded = reader.load_templates().expect("load without verification");
    assert_eq!(loaded[0].fields[0].label, "edited offline");
}

#[test]
fn unknown_document_version_is_rejected() {
    let (_dir, store) = temp_store();
    store.save_templates(&[record("Versioned", "tpl-versioned")]).expect("save");

    let bytes = fs::read(store.path()).expect("read document");
    let mut document: Value = serde_json::from_slice(&bytes).expect("parse document");
    document["schema_version"] = Value::from(STORE_FORMAT_VERSION + 1);
    fs::write(store.path(), serde_json::to_vec(&document).expect("encode")).expect("write");

    let err = store.load_templates().unwrap_err();
    assert!(matches!(err, StoreError::VersionMismatch(_)), "unexpected error: {err}");
    // Version mismatches are compatibility failures, not integrity failures.
    assert_eq!(store.stats().integrity_failures, 0);
}

#[test]
fn unparseable_document_is_corrupt() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), b"not json {").expect("write garbage");

    let err = store.load_templates().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)), "unexpected error: {err}");
    assert_eq!(store.stats().integrity_failures, 1);
}

#[test]
fn readiness_tracks_the_parent_directory() {
    let (dir, store) = temp_store();
    assert!(store.readiness().is_ok());

    let missing = JsonTemplateStore::at_path(dir.path().join("missing").join("templates.json"));
    assert!(matches!(store.readiness(), Ok(())));
    assert!(matches!(missing.readiness(), Err(StoreError::Io(_))));
}
