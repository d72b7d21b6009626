use super::Model;
use crate::{
    app::{FieldDefault, FieldInfo},
    stmt::{Type, TypeEnum},
};

use heck::ToTitleCase;
use serde_json::{json, Map, Value as Json};

pub(super) fn json_schema(model: &Model) -> Json {
    let mut properties = Map::new();
    let mut required = vec![];
    let mut definitions = Map::new();

    for (name, (ty, info)) in model.fields() {
        let key = info.input_key(name);

        properties.insert(key.to_string(), field_schema(key, ty, info, &mut definitions));

        if info.is_required() {
            required.push(Json::from(key));
        }
    }

    let mut schema = Map::new();
    schema.insert("title".into(), model.name().into());
    schema.insert("type".into(), "object".into());
    schema.insert("properties".into(), properties.into());

    if !required.is_empty() {
        schema.insert("required".into(), required.into());
    }

    if !definitions.is_empty() {
        schema.insert("definitions".into(), definitions.into());
    }

    schema.into()
}

fn field_schema(key: &str, ty: &Type, info: &FieldInfo, definitions: &mut Map<String, Json>) -> Json {
    let constraints = &info.constraints;
    let ty = ty.unwrap_option();
    let mut schema = Map::new();

    // Enumerations are titled by their definition
    match &constraints.title {
        Some(title) => {
            schema.insert("title".into(), title.clone().into());
        }
        None if !ty.is_enum() => {
            schema.insert("title".into(), key.to_title_case().into());
        }
        None => {}
    }

    if let Some(description) = &constraints.description {
        schema.insert("description".into(), description.clone().into());
    }

    if let FieldDefault::Value(default) = &info.default {
        if constraints.constant {
            schema.insert("const".into(), default.to_json());
        } else if !default.is_null() {
            schema.insert("default".into(), default.to_json());
        }
    }

    for (bound, limit) in constraints.bounds() {
        schema.insert(bound.schema_key().into(), Json::Number(limit.clone()));
    }

    if let Some(step) = &constraints.multiple_of {
        schema.insert("multipleOf".into(), Json::Number(step.clone()));
    }

    if let Some(min) = constraints.min_length {
        schema.insert("minLength".into(), min.into());
    }

    if let Some(max) = constraints.max_length {
        schema.insert("maxLength".into(), max.into());
    }

    if let Some(pattern) = &constraints.regex {
        schema.insert("pattern".into(), pattern.clone().into());
    }

    if let Some(min) = constraints.min_items {
        schema.insert("minItems".into(), min.into());
    }

    if let Some(max) = constraints.max_items {
        schema.insert("maxItems".into(), max.into());
    }

    if let Some(example) = &constraints.example {
        schema.insert("example".into(), example.to_json());
    }

    match ty {
        Type::Enum(ty) => {
            let reference = enum_reference(ty, definitions);

            // A bare reference cannot carry sibling keywords
            if schema.is_empty() {
                return reference;
            }
            schema.insert("allOf".into(), json!([reference]));
        }
        ty => {
            if let Json::Object(keywords) = type_schema(ty, definitions) {
                schema.extend(keywords);
            }
        }
    }

    schema.into()
}

fn type_schema(ty: &Type, definitions: &mut Map<String, Json>) -> Json {
    match ty {
        Type::Bool => json!({"type": "boolean"}),
        Type::I16 | Type::I32 | Type::I64 => json!({"type": "integer"}),
        Type::F64 | Type::Decimal => json!({"type": "number"}),
        Type::String => json!({"type": "string"}),
        Type::Bytes => json!({"type": "string", "format": "binary"}),
        Type::Date => json!({"type": "string", "format": "date"}),
        Type::Time => json!({"type": "string", "format": "time"}),
        Type::DateTime | Type::Timestamp => json!({"type": "string", "format": "date-time"}),
        Type::Interval => json!({"type": "number", "format": "time-delta"}),
        Type::Uuid => json!({"type": "string", "format": "uuid"}),
        Type::Json => json!({"type": "object"}),
        Type::List(item) => json!({"type": "array", "items": type_schema(item, definitions)}),
        Type::Enum(ty) => enum_reference(ty, definitions),
        Type::Option(inner) => type_schema(inner, definitions),
    }
}

fn enum_reference(ty: &TypeEnum, definitions: &mut Map<String, Json>) -> Json {
    definitions.entry(ty.name.clone()).or_insert_with(|| {
        json!({
            "title": ty.name,
            "description": "An enumeration.",
            "enum": ty.labels,
            "type": "string",
        })
    });

    json!({"$ref": format!("#/definitions/{}", ty.name)})
}
