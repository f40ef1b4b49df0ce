//! Tests for the domain transformer: type mapping, identifiers, options and defaults.
mod common;
use seiri::prelude::*;
use seiri::transform::parse_options;
use serde_json::{Value, json};
use std::collections::HashSet;

const STAMP: i64 = 1000;

fn run(value: &Value) -> GeneratedResult {
    let config = NormalizerConfig::default();
    let mapping = TypeMapping::default();
    Transformer::new(&config, &mapping).transform(value, STAMP)
}

fn single_unit(unit: Value) -> Field {
    let value = json!({
        "listOperations": [{ "operationLabel": "Op", "listUnitWorks": [unit] }]
    });
    run(&value).operations[0].fields[0].clone()
}

fn type_of(work_unit_type: Value, response_type: Value) -> FieldType {
    single_unit(json!({
        "workUnitLabel": "L",
        "workUnitType": work_unit_type,
        "responseType": response_type,
    }))
    .field_type
}

#[test]
fn test_armoire_structure() {
    let value: Value = serde_json::from_str(common::ARMOIRE_JSON).unwrap();
    let result = run(&value);

    assert_eq!(result.operations.len(), 1);
    let operation = &result.operations[0];
    assert_eq!(operation.id, "operation-1000-0");
    assert_eq!(operation.name, "Armoire");
    assert_eq!(operation.description, None);

    let field = &operation.fields[0];
    assert_eq!(field.id, "field-1000-0-0");
    assert_eq!(field.field_type, FieldType::Checkpoint);
    assert_eq!(field.label, "Etat");
    assert!(!field.required);
    assert_eq!(field.options, None);

    let details = result.record_details.expect("record details are always produced");
    assert_eq!(details.name, "Nouvelle Fiche");
    assert_eq!(details.functional_id, "FICHE-1000");
    assert_eq!(details.duration, "");
    assert!(details.active);
}

#[test]
fn test_record_details_mapping() {
    let value = json!({
        "label": "Visite",
        "identifiant": 12,
        "duration": 45,
        "active": "false",
        "listOperations": []
    });
    let details = run(&value).record_details.unwrap();
    assert_eq!(details.name, "Visite");
    assert_eq!(details.functional_id, "12");
    assert_eq!(details.duration, "45");
    assert!(!details.active);
}

#[test]
fn test_response_type_table() {
    let expected = [
        ("1", FieldType::Text),
        ("2", FieldType::Number),
        ("3", FieldType::Select),
        ("4", FieldType::Checkbox),
        ("5", FieldType::Date),
        ("6", FieldType::Select),
        ("7", FieldType::Rating),
    ];
    for (code, field_type) in expected {
        assert_eq!(type_of(json!("1"), json!(code)), field_type, "responseType {}", code);
    }
}

#[test]
fn test_checkpoint_ignores_response_type() {
    assert_eq!(type_of(json!("0"), json!("3")), FieldType::Checkpoint);
    assert_eq!(type_of(json!("0"), Value::Null), FieldType::Checkpoint);
}

#[test]
fn test_unknown_codes_resolve_to_text() {
    assert_eq!(type_of(json!("1"), json!("8")), FieldType::Text);
    assert_eq!(type_of(json!("1"), Value::Null), FieldType::Text);
    assert_eq!(type_of(json!("9"), json!("2")), FieldType::Text);
    assert_eq!(type_of(Value::Null, json!("2")), FieldType::Text);
    assert_eq!(type_of(json!({ "nested": true }), json!("2")), FieldType::Text);
    assert_eq!(single_unit(json!({})).field_type, FieldType::Text);
}

#[test]
fn test_numeric_codes() {
    assert_eq!(type_of(json!(1), json!(2)), FieldType::Number);
    assert_eq!(type_of(json!(1.0), json!(7.0)), FieldType::Rating);
    assert_eq!(type_of(json!(0), Value::Null), FieldType::Checkpoint);
    assert_eq!(type_of(json!(" 1 "), json!(" 5")), FieldType::Date);
}

#[test]
fn test_select_options() {
    let field = single_unit(json!({
        "workUnitType": "1",
        "responseType": "3",
        "responseValues": " A , B ,, C "
    }));
    let options = field.options.expect("select fields carry options");
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(labels, ["A", "B", "C"]);
    assert_eq!(ids, ["option-0", "option-1", "option-2"]);
}

#[test]
fn test_multi_choice_is_select_with_options() {
    let field = single_unit(json!({
        "workUnitType": "1",
        "responseType": "6",
        "options": "Oui,Non"
    }));
    assert_eq!(field.field_type, FieldType::Select);
    assert_eq!(field.options.map(|o| o.len()), Some(2));
}

#[test]
fn test_select_options_absent_or_unusable() {
    let missing = single_unit(json!({ "workUnitType": "1", "responseType": "3" }));
    assert_eq!(missing.field_type, FieldType::Select);
    assert_eq!(missing.options, None);

    let empty = single_unit(json!({ "workUnitType": "1", "responseType": "3", "responseValues": "" }));
    assert_eq!(empty.options, None);

    let not_a_string = single_unit(json!({
        "workUnitType": "1",
        "responseType": "3",
        "responseValues": ["A", "B"]
    }));
    assert_eq!(not_a_string.options, None);
}

#[test]
fn test_options_only_for_select() {
    let field = single_unit(json!({
        "workUnitType": "1",
        "responseType": "1",
        "responseValues": "A,B"
    }));
    assert_eq!(field.field_type, FieldType::Text);
    assert_eq!(field.options, None);
}

#[test]
fn test_parse_options_helper() {
    assert!(parse_options("").is_empty());
    assert!(parse_options(" , ").is_empty());
    assert_eq!(parse_options("x")[0].id, "option-0");
}

#[test]
fn test_required_flag() {
    assert!(single_unit(json!({ "required": true })).required);
    assert!(single_unit(json!({ "required": "true" })).required);
    assert!(!single_unit(json!({ "required": "yes" })).required);
    assert!(!single_unit(json!({})).required);
}

#[test]
fn test_descriptions_and_labels() {
    let value = json!({
        "listOperations": [{
            "operationLabel": "Chaudiere",
            "operationDescription": "Controle annuel",
            "listUnitWorks": [{ "workUnitLabel": "Fumees", "workUnitDescription": "Analyse" }]
        }]
    });
    let result = run(&value);
    assert_eq!(result.operations[0].description.as_deref(), Some("Controle annuel"));
    assert_eq!(result.operations[0].fields[0].description.as_deref(), Some("Analyse"));
    assert_eq!(result.operations[0].fields[0].label, "Fumees");
}

#[test]
fn test_repeated_upstream_ids_stay_unique() {
    let value = json!({
        "listOperations": [
            { "operationId": "OP", "listUnitWorks": [{ "workUnitId": "WU" }, { "workUnitId": "WU" }] },
            { "operationId": "OP", "listUnitWorks": [{ "workUnitId": "WU" }] }
        ]
    });
    let result = run(&value);

    assert_eq!(result.operations[0].id, "OP-1000-0");
    assert_eq!(result.operations[1].id, "OP-1000-1");
    assert_eq!(result.operations[0].fields[0].id, "WU-1000-0-0");
    assert_eq!(result.operations[0].fields[1].id, "WU-1000-0-1");
    assert_eq!(result.operations[1].fields[0].id, "WU-1000-1-0");
}

#[test]
fn test_crafted_ids_cannot_collide() {
    // At stamp 2, the hint of operation 0 reproduces the id of the first field of operation 2.
    let value = json!({
        "listOperations": [
            { "operationId": "g-2" },
            {},
            { "listUnitWorks": [{ "workUnitId": "g" }] }
        ]
    });
    let config = NormalizerConfig::default();
    let mapping = TypeMapping::default();
    let result = Transformer::new(&config, &mapping).transform(&value, 2);

    assert_eq!(result.operations[0].id, "g-2-2-0");
    assert_eq!(result.operations[2].fields[0].id, "g-2-2-0~1");

    let mut ids = HashSet::new();
    for operation in &result.operations {
        assert!(ids.insert(operation.id.clone()));
        for field in &operation.fields {
            assert!(ids.insert(field.id.clone()));
        }
    }
}

#[test]
fn test_non_object_items_are_defaulted() {
    let value = json!({
        "listOperations": [42, { "operationLabel": "B", "listUnitWorks": ["x"] }]
    });
    let result = run(&value);

    assert_eq!(result.operations.len(), 2);
    assert_eq!(result.operations[0].id, "operation-1000-0");
    assert_eq!(result.operations[0].name, "");
    assert!(result.operations[0].fields.is_empty());
    assert_eq!(result.operations[1].fields.len(), 1);
    assert_eq!(result.operations[1].fields[0].field_type, FieldType::Text);
    assert_eq!(result.operations[1].fields[0].label, "");
}

#[test]
fn test_pass_through_of_finished_result() {
    let value = json!({
        "operations": [{
            "id": "a",
            "name": "N",
            "fields": [{ "id": "f", "type": "rating", "label": "L" }]
        }]
    });
    let result = run(&value);
    assert_eq!(result.record_details, None);
    assert_eq!(result.operations[0].id, "a");
    assert_eq!(result.operations[0].fields[0].field_type, FieldType::Rating);
    assert!(!result.operations[0].fields[0].required);
}

#[test]
fn test_pass_through_repairs_ids_and_options() {
    let value = json!({
        "operations": [
            {
                "id": "a",
                "name": "First",
                "fields": [
                    { "id": "f", "type": "text", "label": "T", "options": [{ "id": "o", "label": "z" }] },
                    { "id": "s", "type": "select", "label": "S", "options": [] },
                    { "id": "k", "type": "select", "label": "K", "options": [{ "id": "option-0", "label": "16A" }] }
                ]
            },
            {
                "id": "a",
                "name": "Second",
                "fields": [{ "id": "f", "type": "text", "label": "T" }]
            }
        ]
    });
    let result = run(&value);

    let ids: Vec<&str> = result
        .operations
        .iter()
        .flat_map(|op| std::iter::once(op.id.as_str()).chain(op.fields.iter().map(|f| f.id.as_str())))
        .collect();
    assert_eq!(ids, ["a", "f", "s", "k", "a~1", "f~1"]);

    let first = &result.operations[0].fields;
    assert_eq!(first[0].options, None);
    assert_eq!(first[1].options, None);
    assert_eq!(first[2].options.as_ref().map(Vec::len), Some(1));
    assert_eq!(result.operations[1].name, "Second");
}

#[test]
fn test_unusable_values_become_empty_forms() {
    for value in [
        json!("not json at all"),
        json!(42),
        json!([1, 2]),
        json!({ "foo": 1 }),
        json!({ "operations": "nope" }),
        json!({ "listOperations": "nope" }),
        json!({ "operations": [{ "id": "a" }] }),
    ] {
        assert_eq!(run(&value), GeneratedResult::empty(), "value {}", value);
    }
}

#[test]
fn test_serialized_shape() {
    let value: Value = serde_json::from_str(common::ARMOIRE_JSON).unwrap();
    let serialized = serde_json::to_value(run(&value)).unwrap();

    assert_eq!(serialized["recordDetails"]["functionalId"], "FICHE-1000");
    assert_eq!(serialized["recordDetails"]["name"], "Nouvelle Fiche");
    let field = &serialized["operations"][0]["fields"][0];
    assert_eq!(field["type"], "checkpoint");
    assert_eq!(field["required"], false);
    assert!(field.get("options").is_none());
    assert!(field.get("description").is_none());
}

#[test]
fn test_free_transform_uses_defaults() {
    let value: Value = serde_json::from_str(common::ARMOIRE_JSON).unwrap();
    let result = transform(&value);
    assert_eq!(result.operations[0].name, "Armoire");
    assert!(result.operations[0].id.starts_with("operation-"));
    assert!(result.operations[0].id.ends_with("-0"));
}
