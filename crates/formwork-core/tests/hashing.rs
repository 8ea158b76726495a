// crates/formwork-core/tests/hashing.rs
// ============================================================================
// Module: Canonical Hashing Tests
// Description: Tests for canonical JSON hashing and snapshot digests.
// Purpose: Verify digest stability, sensitivity, and size limits.
// ============================================================================

//! Canonical hashing behavior: key-order independence, content sensitivity,
//! snapshot digest verification, and payload size limits.

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

use formwork_core::FieldType;
use formwork_core::SchemaRecord;
use formwork_core::TemplateId;
use formwork_core::Timestamp;
use formwork_core::hashing::DEFAULT_HASH_ALGORITHM;
use formwork_core::hashing::HashError;
use formwork_core::hashing::canonical_json_bytes;
use formwork_core::hashing::hash_canonical_json;
use formwork_core::hashing::hash_canonical_json_with_limit;
use formwork_core::runtime::SchemaEditor;
use serde_json::json;

#[test]
fn canonical_encoding_is_key_order_independent() {
    let forward = json!({"alpha": 1, "beta": [true, null], "gamma": "x"});
    let reversed = json!({"gamma": "x", "beta": [true, null], "alpha": 1});

    let forward_bytes = canonical_json_bytes(&forward).expect("canonical bytes");
    let reversed_bytes = canonical_json_bytes(&reversed).expect("canonical bytes");
    assert_eq!(forward_bytes, reversed_bytes);

    let forward_digest = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &forward).expect("digest");
    let reversed_digest = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &reversed).expect("digest");
    assert_eq!(forward_digest, reversed_digest);
}

#[test]
fn distinct_content_produces_distinct_digests() {
    let one = json!({"name": "Intake", "fields": []});
    let two = json!({"name": "Discharge", "fields": []});

    let digest_one = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &one).expect("digest");
    let digest_two = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &two).expect("digest");
    assert_ne!(digest_one, digest_two);
}

#[test]
fn digest_is_lowercase_hex_with_algorithm_prefix() {
    let digest = hash_canonical_json(DEFAULT_HASH_ALGORITHM, &json!(42)).expect("digest");
    assert_eq!(digest.hex.len(), 64);
    assert!(digest.hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(digest.to_string(), format!("sha256:{}", digest.hex));
}

#[test]
fn size_limit_rejects_oversized_payloads() {
    let payload = json!({"blob": "a".repeat(256)});
    let bytes = canonical_json_bytes(&payload).expect("canonical bytes");

    let within = hash_canonical_json_with_limit(DEFAULT_HASH_ALGORITHM, &payload, bytes.len());
    assert!(within.is_ok());

    let over = hash_canonical_json_with_limit(DEFAULT_HASH_ALGORITHM, &payload, bytes.len() - 1);
    assert_eq!(
        over,
        Err(HashError::TooLarge {
            max_bytes: bytes.len() - 1,
            actual_bytes: bytes.len(),
        })
    );
}

#[test]
fn snapshot_hash_matches_recompute_and_tracks_content() {
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema("Snapshot draft");
    let draft = editor.add_field(&draft, FieldType::Text).expect("add field");

    let record = SchemaRecord::snapshot(
        &draft,
        TemplateId::new("tpl-snapshot"),
        Timestamp::UnixMillis(1_700_000_000_000),
    )
    .expect("snapshot");
    assert_eq!(record.created_at.as_unix_millis(), Some(1_700_000_000_000));
    assert_eq!(record.created_at.as_logical(), None);
    assert_eq!(record.recompute_content_hash().expect("recompute"), record.content_hash);

    // Renaming the draft must change the digest; metadata does not feed it.
    let mut renamed = record.clone();
    renamed.name = "Renamed draft".to_owned();
    assert_ne!(renamed.recompute_content_hash().expect("recompute"), record.content_hash);

    let mut retimed = record.clone();
    retimed.created_at = Timestamp::UnixMillis(1_800_000_000_000);
    assert_eq!(retimed.recompute_content_hash().expect("recompute"), record.content_hash);
}

#[test]
fn snapshot_round_trips_to_equal_draft() {
    let mut editor = SchemaEditor::new();
    let draft = editor.new_schema("Round trip");
    let draft = editor.add_field(&draft, FieldType::Select).expect("add field");
    let field_id = draft.fields[0].id.clone();
    let draft = editor.add_option(&draft, &field_id).expect("add option");

    let record = SchemaRecord::snapshot(
        &draft,
        TemplateId::new("tpl-round-trip"),
        Timestamp::Logical(7),
    )
    .expect("snapshot");
    assert_eq!(record.to_draft(), draft);
}
