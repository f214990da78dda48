//! Two input objects sharing an object base and two global properties.

use bactwin::{CompileUseCase, FsDefinitionRepository, FsDocumentSink};

use crate::common::*;
use crate::{assert_compiled, assert_succeeded};

fn catalog() -> TestEnv {
    TestEnv::builder()
        .with_file("properties/bases/analog-value.yaml", ANALOG_VALUE_BASE)
        .with_property("present-value", PRESENT_VALUE)
        .with_property("object-name", OBJECT_NAME)
        .with_file("objects/bases/input.yaml", INPUT_BASE)
        .with_object("binary-input", BINARY_INPUT)
        .with_object("analog-input", ANALOG_INPUT)
        .build()
}

#[test]
fn scenario_catalog_objects_document() {
    let env = catalog();

    let (result, documents) = CompileUseCase::new(
        FsDefinitionRepository::new(env.root.path()),
        FsDocumentSink::new(env.path("compilation")),
    )
    .with_indent(2)
    .render()
    .unwrap();

    assert_eq!(result.property_count, 2);
    assert_eq!(result.object_count, 2);
    assert!(result.written.is_empty());
    insta::assert_snapshot!(documents.objects, @r###"
    {
      "analog-input": {
        "base": "input",
        "category": "input",
        "properties": {
          "object-name": {
            "base": "default",
            "order": 77,
            "name": "Object Name",
            "datatype": "CharacterString",
            "content": true
          },
          "present-value": {
            "base": "analog-value",
            "datatype": "REAL",
            "access": "R",
            "unit": "degrees-celsius",
            "order": 85,
            "name": "Present Value"
          }
        },
        "order": 0,
        "name": "Analog Input"
      },
      "binary-input": {
        "base": "input",
        "category": "input",
        "properties": {
          "object-name": {
            "base": "default",
            "order": 77,
            "name": "Object Name",
            "datatype": "CharacterString",
            "content": true
          },
          "present-value": {
            "base": "analog-value",
            "datatype": "ENUMERATED",
            "access": "R",
            "unit": "no-units",
            "order": 85,
            "name": "Present Value"
          }
        },
        "order": 3,
        "name": "Binary Input"
      }
    }
    "###);
}

#[test]
fn scenario_catalog_compiles_through_cli() {
    let env = catalog();

    let result = env.run(&["compile", "-v"]);

    assert_succeeded!(result);
    assert_compiled!(env, "compilation/properties.json");
    let properties = env.read_json("compilation/properties.json");
    let names: Vec<&String> = properties.as_object().unwrap().keys().collect();
    assert_eq!(names, vec!["object-name", "present-value"]);
    assert_eq!(properties["present-value"]["datatype"], "REAL");
}
