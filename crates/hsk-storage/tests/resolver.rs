//! Behavior tests for storage directory resolution.

use std::fs;
use std::path::PathBuf;

use hsk_model::DirectoryType;
use hsk_storage::{StorageError, ensure_storage_directory, resolve_storage_directory};

fn unique_temp_dir(label: &str) -> PathBuf {
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("hsk_storage_{label}_{}_{stamp}", std::process::id()))
}

#[test]
fn creates_the_bucket_directory_on_first_call() {
    let root = unique_temp_dir("create");
    fs::create_dir_all(&root).expect("documents root");

    let resolved = resolve_storage_directory(&root, DirectoryType::Study).expect("resolved path");
    assert_eq!(resolved, root.join("Study"));
    assert!(resolved.is_dir());

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn resolution_is_idempotent_and_preserves_contents() {
    let root = unique_temp_dir("idempotent");
    fs::create_dir_all(&root).expect("documents root");

    let first = resolve_storage_directory(&root, DirectoryType::Gateway).expect("first call");
    fs::write(first.join("resource.json"), "{}").expect("seed file");

    let second = resolve_storage_directory(&root, DirectoryType::Gateway).expect("second call");
    assert_eq!(first, second);
    assert!(second.join("resource.json").is_file());

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn existing_file_at_the_target_is_a_conflict() {
    let root = unique_temp_dir("conflict");
    fs::create_dir_all(&root).expect("documents root");
    fs::write(root.join("Study"), "not a directory").expect("conflicting file");

    assert_eq!(resolve_storage_directory(&root, DirectoryType::Study), None);

    let err = ensure_storage_directory(&root, DirectoryType::Study).expect_err("conflict error");
    assert!(matches!(err, StorageError::NotADirectory { .. }));
    assert!(err.to_string().contains("not a directory"));

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn missing_documents_root_is_a_creation_failure() {
    // The root itself is never created; creation is non-recursive.
    let root = unique_temp_dir("missing_root");

    assert_eq!(resolve_storage_directory(&root, DirectoryType::Gateway), None);

    let err = ensure_storage_directory(&root, DirectoryType::Gateway).expect_err("create error");
    assert!(matches!(err, StorageError::Create { .. }));
    assert!(!root.exists());
}

#[test]
fn buckets_resolve_to_distinct_directories() {
    let root = unique_temp_dir("buckets");
    fs::create_dir_all(&root).expect("documents root");

    let study = resolve_storage_directory(&root, DirectoryType::Study).expect("study");
    let gateway = resolve_storage_directory(&root, DirectoryType::Gateway).expect("gateway");
    assert_ne!(study, gateway);
    assert!(study.ends_with("Study"));
    assert!(gateway.ends_with("Gateway"));

    fs::remove_dir_all(&root).expect("cleanup");
}
