use fieldkit::app::FieldDefault;
use fieldkit::db::{Column, Table, Type};
use fieldkit::stmt::{self, Value};
use fieldkit::{fields_from, transform, Assemble};

fn numbers() -> Table {
    Table::new("Test")
        .column(Column::new("id", Type::integer()).primary_key())
        .column(Column::new("number1", Type::integer()))
        .column(Column::new("number2", Type::integer()))
        .column(Column::new("number3", Type::integer()))
}

fn names(fields: &fieldkit::FieldSet) -> Vec<&str> {
    fields.keys().map(String::as_str).collect()
}

#[test]
fn all_columns_in_declaration_order() {
    let fields = fields_from(&numbers()).unwrap();
    assert_eq!(names(&fields), ["id", "number1", "number2", "number3"]);
}

#[test]
fn exclude() {
    let fields = Assemble::new()
        .exclude(["id", "number2"])
        .run(&numbers())
        .unwrap();

    assert_eq!(names(&fields), ["number1", "number3"]);
}

#[test]
fn include_keeps_declaration_order() {
    let fields = Assemble::new()
        .include(["number2", "id"])
        .run(&numbers())
        .unwrap();

    assert_eq!(names(&fields), ["id", "number2"]);
}

#[test]
fn unknown_names_are_ignored() {
    let fields = Assemble::new()
        .include(["id", "missing"])
        .run(&numbers())
        .unwrap();
    assert_eq!(names(&fields), ["id"]);

    let fields = Assemble::new().exclude(["missing"]).run(&numbers()).unwrap();
    assert_eq!(fields.len(), 4);
}

#[test]
fn exclude_and_include_are_mutually_exclusive() {
    // The broken column proves no field is built before the check
    let table = numbers().column(Column::new("broken", Type::custom("HSTORE")));

    let err = Assemble::new()
        .exclude(["number1"])
        .include(["id", "number2"])
        .run(&table)
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(
        err.to_string(),
        "conflict: `exclude` and `include` are mutually exclusive"
    );
}

#[test]
fn field_errors_propagate() {
    let table = numbers().column(Column::new("broken", Type::custom("HSTORE")));
    assert!(fields_from(&table).unwrap_err().is_type_inference());

    // Excluded columns are never built
    let fields = Assemble::new().exclude(["broken"]).run(&table).unwrap();
    assert_eq!(fields.len(), 4);
}

#[test]
fn duplicate_column_names_are_rejected() {
    let table = Table::new("Test")
        .column(Column::new("number", Type::integer()))
        .column(Column::new("number", Type::text()));

    let err = fields_from(&table).unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: column `number` is declared more than once in table `Test`"
    );

    // Only participating columns are considered
    let fields = Assemble::new().exclude(["number"]).run(&table).unwrap();
    assert!(fields.is_empty());
}

#[test]
fn optional_behavior() {
    let table = Table::new("Test")
        .column(Column::new("id", Type::integer()).primary_key())
        .column(Column::new("defaulted_req_str", Type::text()).not_null().default("default"))
        .column(Column::new("opt_str", Type::text()).default(Value::Null))
        .column(Column::new("req_str", Type::text()).not_null());

    let fields = fields_from(&table).unwrap();
    assert_eq!(fields.len(), 4);

    let (ty, info) = &fields["defaulted_req_str"];
    assert_eq!(*ty, stmt::Type::String);
    assert_eq!(info.default, FieldDefault::Value(Value::from("default")));

    let (ty, info) = &fields["opt_str"];
    assert_eq!(*ty, stmt::Type::optional(stmt::Type::String));
    assert_eq!(info.default, FieldDefault::Value(Value::Null));

    let (ty, info) = &fields["req_str"];
    assert_eq!(*ty, stmt::Type::String);
    assert!(info.is_required());
}

#[test]
fn transform_applies_after_field_building() {
    let table = Table::new("Test")
        .column(Column::new("id", Type::integer()).primary_key())
        .column(Column::new("name", Type::varchar(128)).not_null())
        .column(Column::new("age", Type::integer()).not_null().default(0));

    let fields = Assemble::new()
        .transform(transform::nonify)
        .run(&table)
        .unwrap();

    assert_eq!(names(&fields), ["id", "name", "age"]);

    for (name, (ty, info)) in &fields {
        assert!(ty.is_option(), "{name}");
        assert!(info.optional, "{name}");
        assert_eq!(info.default, FieldDefault::Value(Value::Null), "{name}");
    }

    // Normal resolution still happened
    let (ty, info) = &fields["name"];
    assert_eq!(*ty, stmt::Type::optional(stmt::Type::String));
    assert_eq!(info.constraints.max_length, Some(128));
}

#[test]
fn custom_transform() {
    let fields = Assemble::new()
        .transform(|ty, mut info| {
            info.constraints.title = Some(info.storage_key.to_uppercase());
            (ty, info)
        })
        .run(&numbers())
        .unwrap();

    let (_, info) = &fields["number1"];
    assert_eq!(info.constraints.title.as_deref(), Some("NUMBER1"));
}
