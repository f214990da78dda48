//! Output contracts.

use crate::{assert_failed, assert_not_compiled, assert_output_contains, assert_succeeded};
use crate::common::*;

/// CONTRACT: A failing compile writes nothing on a fresh root.
#[test]
fn contract_failed_compile_creates_no_output() {
    let env = TestEnv::builder()
        .with_minimal_definitions()
        .with_object("o2", "base: default\norder: 2\nproperties:\n  missing: 1\n")
        .build();

    let result = env.run(&["compile"]);

    assert_failed!(result);
    assert_not_compiled!(env, "compilation");
}

/// CONTRACT: A failing compile keeps both previous documents intact.
#[test]
fn contract_failed_compile_keeps_previous_documents() {
    let env = TestEnv::builder().with_minimal_definitions().build();
    assert_succeeded!(env.run(&["compile"]));
    let properties = env.read_file("compilation/properties.json");
    let objects = env.read_file("compilation/objects.json");

    env.write_file("properties/p2.yaml", "base: p1\n");
    let result = env.run(&["compile"]);

    assert_failed!(result);
    assert_eq!(env.read_file("compilation/properties.json"), properties);
    assert_eq!(env.read_file("compilation/objects.json"), objects);
}

/// CONTRACT: The output directory holds exactly the two documents.
#[test]
fn contract_no_temporary_files_left_behind() {
    let env = TestEnv::builder().with_minimal_definitions().build();

    assert_succeeded!(env.run(&["compile"]));
    assert_succeeded!(env.run(&["compile"]));

    let mut files: Vec<String> = std::fs::read_dir(env.path("compilation"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(files, vec!["objects.json", "properties.json"]);
}

/// CONTRACT: Both documents are valid JSON objects.
#[test]
fn contract_documents_are_json_objects() {
    let env = TestEnv::builder().with_minimal_definitions().build();

    assert_succeeded!(env.run(&["compile"]));

    assert!(env.read_json("compilation/properties.json").is_object());
    assert!(env.read_json("compilation/objects.json").is_object());
}

/// CONTRACT: A blocked `objects.json` leaves `properties.json` as it was.
#[test]
fn contract_blocked_objects_document_keeps_properties() {
    let env = TestEnv::builder().with_minimal_definitions().build();
    assert_succeeded!(env.run(&["compile"]));
    let properties = env.read_file("compilation/properties.json");

    env.write_file("properties/p1.yaml", "base: default\norder: 1\ncontent: changed\n");
    env.remove_file("compilation/objects.json");
    std::fs::create_dir_all(env.path("compilation/objects.json/blocked")).unwrap();
    let result = env.run(&["compile"]);

    assert_failed!(result);
    assert_output_contains!(result, "objects.json");
    assert_eq!(env.read_file("compilation/properties.json"), properties);
}

/// CONTRACT: On a fresh root, a blocked `objects.json` means no `properties.json`.
#[test]
fn contract_blocked_objects_document_on_fresh_root_writes_nothing() {
    let env = TestEnv::builder().with_minimal_definitions().build();
    std::fs::create_dir_all(env.path("compilation/objects.json")).unwrap();

    let result = env.run(&["compile"]);

    assert_failed!(result);
    assert_not_compiled!(env, "compilation/properties.json");
}
