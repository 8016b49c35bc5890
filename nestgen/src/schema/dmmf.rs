//! DMMF JSON reader
//!
//! Accepts the `datamodel` section of a Prisma DMMF dump, as produced by
//! `prisma generate` generators or `getDMMF`.

use super::{EnumDefinition, FieldDescriptor, FieldKind, ModelDefinition, Schema};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Document {
    datamodel: Datamodel,
}

#[derive(Debug, Deserialize)]
struct Datamodel {
    #[serde(default)]
    models: Vec<DmmfModel>,
    #[serde(default)]
    enums: Vec<DmmfEnum>,
}

#[derive(Debug, Deserialize)]
struct DmmfModel {
    name: String,
    #[serde(default)]
    fields: Vec<DmmfField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DmmfField {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    kind: FieldKind,
    is_required: Option<bool>,
    is_nullable: Option<bool>,
    #[serde(default)]
    is_list: bool,
}

#[derive(Debug, Deserialize)]
struct DmmfEnum {
    name: String,
    #[serde(default)]
    values: Vec<DmmfEnumValue>,
}

#[derive(Debug, Deserialize)]
struct DmmfEnumValue {
    name: String,
}

impl From<DmmfField> for FieldDescriptor {
    fn from(field: DmmfField) -> Self {
        let required = field
            .is_required
            .or_else(|| field.is_nullable.map(|nullable| !nullable))
            .unwrap_or(false);

        Self::new(field.name, field.field_type, field.kind, required, field.is_list)
    }
}

pub(super) fn parse(source: &str) -> Result<Schema> {
    let document: Document = serde_json::from_str(source)?;

    let models: Vec<ModelDefinition> = document
        .datamodel
        .models
        .into_iter()
        .map(|model| ModelDefinition {
            name: model.name,
            fields: model.fields.into_iter().map(FieldDescriptor::from).collect(),
        })
        .collect();

    Schema::ensure_unique_models(&models)?;

    let enums = document
        .datamodel
        .enums
        .into_iter()
        .map(|e| EnumDefinition {
            name: e.name,
            values: e.values.into_iter().map(|v| v.name).collect(),
        })
        .collect();

    Ok(Schema { models, enums })
}
