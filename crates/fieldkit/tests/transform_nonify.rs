use fieldkit::db::{Column, Table, Type};
use fieldkit::stmt::Value;
use fieldkit::{transform, ModelFactory};

use pretty_assertions::assert_eq;
use serde_json::json;

fn numbers() -> Table {
    let constant = || fieldkit::app::FieldMeta::from_json(json!({"const": 1})).unwrap();
    let number = |name: &str| Column::new(name, Type::integer());

    Table::new("Test")
        .column(Column::new("id", Type::integer()).primary_key())
        .column(number("number1").default(1).not_null().meta(constant()))
        .column(number("number2").default(1).meta(constant()))
        .column(number("number3").default_factory(|| Value::I64(1)).not_null())
        .column(number("number4").default_factory(|| Value::I64(1)))
        .column(number("number5").default(Value::Null).not_null())
        .column(number("number6").default(Value::Null))
        .column(number("number7").default(1).not_null())
        .column(number("number8").default(1))
}

#[test]
fn every_field_becomes_optional_with_none_default() {
    let model = ModelFactory::new()
        .transform(transform::nonify)
        .build(&numbers())
        .unwrap();

    let instance = model.construct(Vec::<(String, Value)>::new()).unwrap();

    for name in model.fields().keys() {
        assert_eq!(instance.get(name), Some(&Value::Null), "{name}");
    }
    assert_eq!(instance.values().len(), 9);

    assert_eq!(
        model.json_schema(),
        json!({
            "title": "Test",
            "type": "object",
            "properties": {
                "id": {"title": "Id", "type": "integer"},
                "number1": {"title": "Number1", "type": "integer"},
                "number2": {"title": "Number2", "type": "integer"},
                "number3": {"title": "Number3", "type": "integer"},
                "number4": {"title": "Number4", "type": "integer"},
                "number5": {"title": "Number5", "type": "integer"},
                "number6": {"title": "Number6", "type": "integer"},
                "number7": {"title": "Number7", "type": "integer"},
                "number8": {"title": "Number8", "type": "integer"},
            },
        })
    );
}

#[test]
fn const_no_longer_applies() {
    let model = ModelFactory::new()
        .transform(transform::nonify)
        .build(&numbers())
        .unwrap();

    let instance = model.construct([("number1", 5)]).unwrap();
    assert_eq!(instance.get("number1"), Some(&Value::I64(5)));
}

#[test]
fn constraints_still_apply_to_values() {
    let table = Table::new("Test").column(
        Column::new("age", Type::integer())
            .not_null()
            .meta(fieldkit::app::FieldMeta::from_json(json!({"ge": 0})).unwrap()),
    );

    let model = ModelFactory::new()
        .transform(transform::nonify)
        .build(&table)
        .unwrap();

    assert!(model.construct([("age", Value::Null)]).is_ok());
    assert!(model.construct([("age", -1)]).is_err());
}
