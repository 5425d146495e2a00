//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_lines_outside_tests, find_non_export_lines_in_mod_files,
    path_exists,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "axum::",
            "diesel::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "axum::", "diesel::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should depend on ports only: {hits:#?}"
    );
}

#[test]
fn ports_do_not_leak_storage_or_transport_types() {
    let hits = find_lines_containing("src/port", &["diesel::", "axum::", "std::path::Path"]);
    assert!(
        hits.is_empty(),
        "ports should be storage and transport agnostic: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn library_code_does_not_panic_on_results() {
    let hits = find_lines_outside_tests("src", &[".unwrap()", ".expect("]);
    let hits: Vec<_> = hits
        .into_iter()
        .filter(|(path, _, _)| !path.starts_with("src/testkit/"))
        .collect();
    assert!(
        hits.is_empty(),
        "non-test code should propagate errors: {hits:#?}"
    );
}

#[test]
fn schema_migrations_are_embedded() {
    assert!(path_exists("migrations"), "migrations directory should exist");
    let hits = find_lines_containing(
        "src/adapter/outbound/sqlite/database",
        &["embed_migrations!"],
    );
    assert_eq!(hits.len(), 1, "expected one embed_migrations! call: {hits:#?}");
}
