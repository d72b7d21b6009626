use fieldkit::app::{Constraints, FieldDefault, FieldMeta};
use fieldkit::db::{Column, Type};
use fieldkit::field::{build, make_field, DefaultSource, DescriptionSource, DEFAULT_PRIORITY};
use fieldkit::stmt::{self, Value};
use serde_json::json;

fn meta(value: serde_json::Value) -> FieldMeta {
    FieldMeta::from_json(value).unwrap()
}

#[test]
fn nullable_column_is_optional() {
    let column = Column::new("number", Type::integer());
    let (ty, info) = make_field(&column).unwrap();

    assert_eq!(ty, stmt::Type::optional(stmt::Type::I32));
    assert!(info.optional);
    assert_eq!(info.default, FieldDefault::Value(Value::Null));
}

#[test]
fn nullable_array_is_an_optional_list() {
    let column = Column::new("numbers", Type::array(Type::integer()));
    let (ty, _) = make_field(&column).unwrap();

    assert_eq!(
        ty,
        stmt::Type::Option(Box::new(stmt::Type::List(Box::new(stmt::Type::I32))))
    );
    assert_eq!(ty.list_item(), Some(&stmt::Type::I32));
    assert!(ty.is_option() && ty.unwrap_option().is_list());
}

#[test]
fn non_nullable_column_without_default_is_required() {
    let column = Column::new("id", Type::integer()).primary_key();
    let (ty, info) = make_field(&column).unwrap();

    assert_eq!(ty, stmt::Type::I32);
    assert!(!info.optional);
    assert!(info.is_required());
}

#[test]
fn null_column_default_counts_as_absent() {
    let column = Column::new("number", Type::integer())
        .not_null()
        .default(Value::Null);
    let (_, info) = make_field(&column).unwrap();

    assert!(info.is_required());
}

#[test]
fn column_default_is_used() {
    let column = Column::new("col", Type::text()).default("default");
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.default_value(), Some(&Value::from("default")));
}

#[test]
fn metadata_default_wins_over_column_default() {
    let column = Column::new("number", Type::integer())
        .not_null()
        .default(0)
        .meta(meta(json!({"default": 1})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.default_value(), Some(&Value::I64(1)));
}

#[test]
fn explicit_null_default_overrides_column_default() {
    let column = Column::new("number", Type::integer())
        .not_null()
        .default(0)
        .meta(meta(json!({"default": null})));
    let (_, info) = make_field(&column).unwrap();

    assert!(!info.is_required());
    assert_eq!(info.default_value(), Some(&Value::Null));
}

#[test]
fn callable_column_default_becomes_factory() {
    let column = Column::new("dynamic_column", Type::text())
        .default_factory(|| Value::from("dynamic default"));
    let (_, info) = make_field(&column).unwrap();

    let factory = info.default_factory().expect("factory default");
    assert_eq!(factory.call(), Value::from("dynamic default"));
    assert_eq!(info.default_value(), None);
}

#[test]
fn metadata_factory_wins_over_everything() {
    let column = Column::new("number", Type::integer())
        .default(0)
        .meta(FieldMeta::default().default_factory(|| Value::I64(7)));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.default.produce(), Some(Value::I64(7)));
}

#[test]
fn default_and_factory_are_mutually_exclusive() {
    let mut meta = FieldMeta::default().default_factory(|| Value::I64(1));
    meta.default = Some(Value::I64(0));

    let column = Column::new("number", Type::integer());
    let err = build(&column, &meta).unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(
        err.to_string(),
        "conflict: `default` and `default_factory` are mutually exclusive on column `number`"
    );
}

#[test]
fn server_default_is_not_required() {
    let column = Column::new("created_at", Type::from(fieldkit::db::Scalar::Timestamp))
        .not_null()
        .server_default("now()");
    let (_, info) = make_field(&column).unwrap();

    assert!(!info.is_required());
    assert_eq!(info.default_value(), Some(&Value::Null));
}

#[test]
fn default_priority_order() {
    assert_eq!(
        DEFAULT_PRIORITY,
        [
            DefaultSource::MetaFactory,
            DefaultSource::MetaValue,
            DefaultSource::ColumnFactory,
            DefaultSource::ColumnValue,
            DefaultSource::ServerDefault,
            DefaultSource::Required,
            DefaultSource::NoValue,
        ]
    );
}

#[test]
fn default_sources_individually() {
    let column = Column::new("number", Type::integer()).not_null().default(0);
    let none = FieldMeta::default();

    assert_eq!(DefaultSource::MetaFactory.provide(&column, &none), None);
    assert_eq!(DefaultSource::MetaValue.provide(&column, &none), None);
    assert_eq!(DefaultSource::ColumnFactory.provide(&column, &none), None);
    assert_eq!(
        DefaultSource::ColumnValue.provide(&column, &none),
        Some(FieldDefault::Value(Value::I64(0)))
    );
    assert_eq!(
        DefaultSource::Required.provide(&column, &none),
        Some(FieldDefault::Required)
    );
    assert_eq!(
        DefaultSource::Required.provide(&column.clone().nullable(true), &none),
        None
    );
}

#[test]
fn declared_length_becomes_max_length() {
    let column = Column::new("name", Type::varchar(128));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.max_length, Some(128));
}

#[test]
fn equal_max_length_is_accepted() {
    let column = Column::new("name", Type::varchar(64)).meta(meta(json!({"max_length": 64})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.max_length, Some(64));
}

#[test]
fn differing_max_length_is_a_conflict() {
    let column = Column::new("name", Type::varchar(64)).meta(meta(json!({"max_length": 65})));
    let err = make_field(&column).unwrap_err();

    assert!(err.is_constraint_conflict());
    assert_eq!(
        err.to_string(),
        "max_length (65) differs from length set for column type (64) on column `name`; \
         either remove max_length from the column metadata (preferred) or set them to equal values"
    );
}

#[test]
fn max_length_without_declared_length_is_copied() {
    let column = Column::new("name", Type::text()).meta(meta(json!({"max_length": 64})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.max_length, Some(64));
}

#[test]
fn enumeration_backed_by_sized_type_has_no_length() {
    let Type::Enum(mut ty) = Type::enumeration("Bool", ["F", "T"]) else {
        panic!("expected an enumeration");
    };
    ty.repr = Some(Box::new(Type::varchar(1)));

    let column = Column::new("flag", Type::Enum(ty)).meta(meta(json!({"max_length": 5})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.max_length, Some(5));
}

#[test]
fn description_from_doc() {
    let column = Column::new("age", Type::integer()).doc("Age in years");
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.description.as_deref(), Some("Age in years"));
}

#[test]
fn description_from_metadata_wins() {
    let column = Column::new("age", Type::integer())
        .doc("Age in years")
        .meta(meta(json!({"description": "Age"})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.description.as_deref(), Some("Age"));
}

#[test]
fn explicit_null_description_suppresses_doc() {
    let column = Column::new("age", Type::integer())
        .doc("Age in years")
        .meta(meta(json!({"description": null})));
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints.description, None);
    assert_eq!(
        DescriptionSource::Meta.provide(&column, &column.meta),
        Some(None)
    );
}

#[test]
fn constraints_are_copied_through() {
    let column = Column::new("string", Type::text()).meta(meta(json!({
        "alias": "text",
        "allow_mutation": false,
        "const": true,
        "example": "Example",
        "ge": 0,
        "gt": -1,
        "le": 10,
        "lt": 11,
        "max_items": 2,
        "min_items": 0,
        "min_length": 1,
        "multiple_of": 2,
        "regex": "\\w+",
        "title": "SomeString",
        "sortable": true,
    })));
    let (_, info) = make_field(&column).unwrap();
    let constraints = &info.constraints;

    assert_eq!(constraints.alias.as_deref(), Some("text"));
    assert_eq!(constraints.allow_mutation, Some(false));
    assert!(!constraints.is_mutable());
    assert!(constraints.constant);
    assert_eq!(constraints.example, Some(Value::from("Example")));
    assert_eq!(constraints.ge, Some(0.into()));
    assert_eq!(constraints.gt, Some((-1).into()));
    assert_eq!(constraints.le, Some(10.into()));
    assert_eq!(constraints.lt, Some(11.into()));
    assert_eq!(constraints.max_items, Some(2));
    assert_eq!(constraints.min_items, Some(0));
    assert_eq!(constraints.min_length, Some(1));
    assert_eq!(constraints.multiple_of, Some(2.into()));
    assert_eq!(constraints.regex.as_deref(), Some("\\w+"));
    assert_eq!(constraints.title.as_deref(), Some("SomeString"));
}

#[test]
fn absent_constraints_stay_unset() {
    let column = Column::new("number", Type::integer());
    let (_, info) = make_field(&column).unwrap();

    assert_eq!(info.constraints, Constraints::default());
}

#[test]
fn storage_key_comes_from_column_key() {
    let column = Column::new("text", Type::varchar(64)).key("string");
    let (_, info) = make_field(&column).unwrap();
    assert_eq!(info.storage_key, "string");

    let column = Column::new("text", Type::varchar(64));
    let (_, info) = make_field(&column).unwrap();
    assert_eq!(info.storage_key, "text");
}

#[test]
fn build_uses_given_metadata() {
    let column = Column::new("number", Type::integer()).meta(meta(json!({"title": "Ignored"})));
    let (_, info) = build(&column, &meta(json!({"title": "Used"}))).unwrap();

    assert_eq!(info.constraints.title.as_deref(), Some("Used"));
}

#[test]
fn type_inference_failure_propagates() {
    let column = Column::new("col", Type::custom("HSTORE"));
    assert!(make_field(&column).unwrap_err().is_type_inference());
}
