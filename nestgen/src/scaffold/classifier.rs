//! Field classification for scaffolding
//!
//! Turns a schema [`FieldDescriptor`] into the [`FieldContext`] consumed by the
//! templates: the TypeScript type label, whether the type has to be imported
//! from the generated client, the effective optionality and the ordered list of
//! class-validator decorators.
//!
//! # Type Labels
//!
//! | Declared type                | Label                 |
//! |------------------------------|-----------------------|
//! | relation / enum              | declared name         |
//! | `String`                     | `string`              |
//! | `Int`, `Float`, `Decimal`    | `number`              |
//! | `Boolean`                    | `boolean`             |
//! | `DateTime`                   | `Date`                |
//! | `Json`                       | `Record<string, any>` |
//! | anything else                | `any`                 |
//!
//! # Examples
//!
//! ```
//! use nestgen::config::ReservedNames;
//! use nestgen::schema::FieldDescriptor;
//! use nestgen::scaffold::{FieldClassifier, Validator};
//!
//! let classifier = FieldClassifier::new(ReservedNames::default());
//!
//! let email = classifier.classify(&FieldDescriptor::scalar("email", "String"));
//! assert_eq!(email.ts_type, "string");
//! assert_eq!(email.validators, vec![Validator::IsString]);
//!
//! let id = classifier.classify(&FieldDescriptor::scalar("id", "String"));
//! assert!(!id.is_required);
//! assert_eq!(id.validators, vec![Validator::IsUuid, Validator::IsOptional]);
//! ```

use crate::config::ReservedNames;
use crate::schema::{FieldDescriptor, FieldKind};
use serde::{Serialize, Serializer};
use std::fmt;

/// TypeScript type assigned to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `Date`
    Date,
    /// `Record<string, any>`
    Record,
    /// `any`
    Any,
    /// Enum or relation type imported from the generated client
    External(String),
}

impl TsType {
    /// Map a declared schema type to its TypeScript label
    #[must_use]
    pub fn from_declared(field_type: &str, kind: FieldKind) -> Self {
        match kind {
            FieldKind::Object | FieldKind::Enum => Self::External(field_type.to_string()),
            FieldKind::Scalar => match field_type {
                "String" => Self::String,
                "Int" | "Float" | "Decimal" => Self::Number,
                "Boolean" => Self::Boolean,
                "DateTime" => Self::Date,
                "Json" => Self::Record,
                _ => Self::Any,
            },
        }
    }

    /// Whether the label names a type from the generated client
    #[must_use]
    pub const fn needs_import(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Type-specific validator for built-in labels
    #[must_use]
    pub const fn scalar_validator(&self) -> Option<Validator> {
        match self {
            Self::String => Some(Validator::IsString),
            Self::Number => Some(Validator::IsNumber),
            Self::Boolean => Some(Validator::IsBoolean),
            Self::Date => Some(Validator::IsDate),
            Self::Record => Some(Validator::IsObject),
            Self::Any | Self::External(_) => None,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "Date"),
            Self::Record => write!(f, "Record<string, any>"),
            Self::Any => write!(f, "any"),
            Self::External(name) => write!(f, "{name}"),
        }
    }
}

impl PartialEq<&str> for TsType {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for TsType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// class-validator decorator tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    /// `@IsUUID()`
    IsUuid,
    /// `@IsOptional()`
    IsOptional,
    /// `@IsEnum(Type)`
    IsEnum,
    /// `@IsString()`
    IsString,
    /// `@IsNumber()`
    IsNumber,
    /// `@IsBoolean()`
    IsBoolean,
    /// `@IsDate()`
    IsDate,
    /// `@IsObject()`
    IsObject,
}

impl Validator {
    /// Exported symbol name in the validator module
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsUuid => "IsUUID",
            Self::IsOptional => "IsOptional",
            Self::IsEnum => "IsEnum",
            Self::IsString => "IsString",
            Self::IsNumber => "IsNumber",
            Self::IsBoolean => "IsBoolean",
            Self::IsDate => "IsDate",
            Self::IsObject => "IsObject",
        }
    }

    /// Decorator source for a field of type `ts_type`
    ///
    /// Type checks on list fields validate every element (`{ each: true }`).
    /// `@IsOptional()` applies to the property itself and never takes it.
    #[must_use]
    pub fn decorator(self, ts_type: &TsType, is_list: bool) -> String {
        const EACH: &str = "{ each: true }";

        match (self, is_list) {
            (Self::IsOptional, _) => "@IsOptional()".to_string(),
            (Self::IsEnum, false) => format!("@IsEnum({ts_type})"),
            (Self::IsEnum, true) => format!("@IsEnum({ts_type}, {EACH})"),
            // IsUUID and IsNumber take their own options before the validation options
            (Self::IsUuid, true) => format!("@IsUUID(undefined, {EACH})"),
            (Self::IsNumber, true) => format!("@IsNumber({{}}, {EACH})"),
            (other, true) => format!("@{}({EACH})", other.name()),
            (other, false) => format!("@{}()", other.name()),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Per-field rendering context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldContext {
    /// Field name
    pub name: String,
    /// TypeScript type label
    pub ts_type: TsType,
    /// Property type as written in classes (`[]` appended for lists)
    pub property_type: String,
    /// Whether `ts_type` has to be imported from the generated client
    pub needs_import: bool,
    /// Effective requiredness after reserved-name overrides
    pub is_required: bool,
    /// Whether this is the identifier field
    pub is_id: bool,
    /// Identifier and timestamp fields: kept out of search filters
    pub excluded: bool,
    /// Ordered, deduplicated validator tags
    pub validators: Vec<Validator>,
    /// Decorator source lines, one per validator
    pub decorators: Vec<String>,
    /// Relation kind
    pub kind: FieldKind,
    /// Whether the field is a list
    pub is_list: bool,
}

impl FieldContext {
    /// Whether the field is a relation to another model
    #[must_use]
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Add a validator unless already present, keeping decorators in sync
    pub fn add_validator(&mut self, validator: Validator) {
        if !self.validators.contains(&validator) {
            self.validators.push(validator);
            self.decorators.push(validator.decorator(&self.ts_type, self.is_list));
        }
    }
}

/// Classifies schema fields using a fixed set of reserved names
#[derive(Debug, Clone, Default)]
pub struct FieldClassifier {
    reserved: ReservedNames,
}

impl FieldClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new(reserved: ReservedNames) -> Self {
        Self { reserved }
    }

    /// Reserved names in effect
    #[must_use]
    pub const fn reserved(&self) -> &ReservedNames {
        &self.reserved
    }

    /// Classify a single field
    ///
    /// Classification never fails: unknown declared types fall back to `any`.
    #[must_use]
    pub fn classify(&self, field: &FieldDescriptor) -> FieldContext {
        let ts_type = TsType::from_declared(&field.field_type, field.kind);
        let needs_import = ts_type.needs_import();
        let is_id = self.reserved.is_identifier(&field.name);
        let is_timestamp = self.reserved.is_timestamp(&field.name);

        let type_validator = if is_id {
            Some(Validator::IsUuid)
        } else if field.kind == FieldKind::Enum {
            Some(Validator::IsEnum)
        } else {
            ts_type.scalar_validator()
        };

        let is_required = field.required && !is_id && !is_timestamp;

        let ordered: Vec<Validator> = if is_id {
            type_validator
                .into_iter()
                .chain(std::iter::once(Validator::IsOptional))
                .collect()
        } else {
            (!is_required)
                .then_some(Validator::IsOptional)
                .into_iter()
                .chain(type_validator)
                .collect()
        };

        let property_type = if field.list {
            format!("{ts_type}[]")
        } else {
            ts_type.to_string()
        };

        let mut context = FieldContext {
            name: field.name.clone(),
            ts_type,
            property_type,
            needs_import,
            is_required,
            is_id,
            excluded: is_id || is_timestamp,
            validators: Vec::new(),
            decorators: Vec::new(),
            kind: field.kind,
            is_list: field.list,
        };
        for validator in ordered {
            context.add_validator(validator);
        }

        tracing::debug!(
            field = %context.name,
            ts_type = %context.ts_type,
            validators = ?context.validators,
            "field classified"
        );

        context
    }

    /// Classify every field of a model, preserving order
    #[must_use]
    pub fn classify_all(&self, fields: &[FieldDescriptor]) -> Vec<FieldContext> {
        fields.iter().map(|f| self.classify(f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classifier() -> FieldClassifier {
        FieldClassifier::new(ReservedNames::default())
    }

    #[test]
    fn test_scalar_table() {
        let cases = [
            ("String", "string", Some(Validator::IsString)),
            ("Int", "number", Some(Validator::IsNumber)),
            ("Float", "number", Some(Validator::IsNumber)),
            ("Decimal", "number", Some(Validator::IsNumber)),
            ("Boolean", "boolean", Some(Validator::IsBoolean)),
            ("DateTime", "Date", Some(Validator::IsDate)),
            ("Json", "Record<string, any>", Some(Validator::IsObject)),
            ("BigInt", "any", None),
            ("Bytes", "any", None),
            ("Unsupported", "any", None),
        ];

        for (declared, label, validator) in cases {
            let ctx = classifier().classify(&FieldDescriptor::scalar("value", declared));
            assert_eq!(ctx.ts_type, label, "label for {declared}");
            assert!(!ctx.needs_import);
            assert_eq!(ctx.validators, validator.into_iter().collect::<Vec<_>>(), "validators for {declared}");
        }
    }

    #[test]
    fn test_enum_field() {
        let field = FieldDescriptor::new("role", "Role", FieldKind::Enum, true, false);
        let ctx = classifier().classify(&field);
        assert_eq!(ctx.ts_type, TsType::External("Role".to_string()));
        assert!(ctx.needs_import);
        assert_eq!(ctx.validators, vec![Validator::IsEnum]);
        assert_eq!(ctx.decorators, vec!["@IsEnum(Role)"]);
    }

    #[test]
    fn test_relation_field_has_no_type_tag() {
        let field = FieldDescriptor::new("owner", "User", FieldKind::Object, true, false);
        let ctx = classifier().classify(&field);
        assert_eq!(ctx.ts_type, "User");
        assert!(ctx.needs_import);
        assert!(ctx.is_relation());
        assert!(ctx.validators.is_empty());

        let optional = classifier().classify(&field.optional());
        assert_eq!(optional.validators, vec![Validator::IsOptional]);
    }

    #[test]
    fn test_identifier_field() {
        let ctx = classifier().classify(&FieldDescriptor::scalar("id", "Int"));
        assert!(ctx.is_id);
        assert!(ctx.excluded);
        assert!(!ctx.is_required);
        assert_eq!(ctx.ts_type, "number");
        assert_eq!(ctx.validators, vec![Validator::IsUuid, Validator::IsOptional]);
        assert_eq!(ctx.decorators, vec!["@IsUUID()", "@IsOptional()"]);
    }

    #[test]
    fn test_timestamp_fields_are_optional() {
        for name in ["createdAt", "updatedAt", "deletedAt"] {
            let ctx = classifier().classify(&FieldDescriptor::scalar(name, "DateTime"));
            assert!(!ctx.is_required, "{name} must be optional");
            assert!(ctx.excluded);
            assert_eq!(ctx.validators, vec![Validator::IsOptional, Validator::IsDate]);
        }
    }

    #[test]
    fn test_optional_comes_before_type_tag() {
        let ctx = classifier().classify(&FieldDescriptor::scalar("nickname", "String").optional());
        assert_eq!(ctx.validators, vec![Validator::IsOptional, Validator::IsString]);
        assert_eq!(ctx.decorators, vec!["@IsOptional()", "@IsString()"]);
    }

    #[test]
    fn test_list_fields_validate_each_element() {
        let tags = FieldDescriptor::new("tags", "String", FieldKind::Scalar, true, true);
        assert_eq!(classifier().classify(&tags).decorators, vec!["@IsString({ each: true })"]);

        let roles = FieldDescriptor::new("roles", "Role", FieldKind::Enum, false, true);
        assert_eq!(
            classifier().classify(&roles).decorators,
            vec!["@IsOptional()", "@IsEnum(Role, { each: true })"]
        );

        let scores = FieldDescriptor::new("scores", "Int", FieldKind::Scalar, true, true);
        assert_eq!(
            classifier().classify(&scores).decorators,
            vec!["@IsNumber({}, { each: true })"]
        );
    }

    #[test]
    fn test_list_property_type() {
        let field = FieldDescriptor::new("tags", "String", FieldKind::Scalar, true, true);
        let ctx = classifier().classify(&field);
        assert_eq!(ctx.ts_type, "string");
        assert_eq!(ctx.property_type, "string[]");
        assert!(ctx.is_list);
    }

    #[test]
    fn test_custom_reserved_names() {
        let reserved = ReservedNames {
            identifier: "uuid".to_string(),
            timestamps: vec!["insertedAt".to_string()],
            dto_optional: vec![],
        };
        let classifier = FieldClassifier::new(reserved);

        let id = classifier.classify(&FieldDescriptor::scalar("id", "String"));
        assert!(id.is_required);
        assert!(!id.is_id);

        let uuid = classifier.classify(&FieldDescriptor::scalar("uuid", "String"));
        assert!(uuid.is_id);
        assert!(!uuid.is_required);

        let inserted = classifier.classify(&FieldDescriptor::scalar("insertedAt", "DateTime"));
        assert!(!inserted.is_required);
    }

    #[test]
    fn test_add_validator_deduplicates() {
        let mut ctx = classifier().classify(&FieldDescriptor::scalar("id", "String"));
        ctx.add_validator(Validator::IsOptional);
        assert_eq!(ctx.validators, vec![Validator::IsUuid, Validator::IsOptional]);
        assert_eq!(ctx.decorators.len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let ctx = classifier().classify(&FieldDescriptor::scalar("email", "String"));
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value["ts_type"], "string");
        assert_eq!(value["kind"], "scalar");
        assert_eq!(value["validators"][0], "IsString");
        assert_eq!(value["is_required"], true);
    }

    fn declared_type() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("String".to_string()),
            Just("Int".to_string()),
            Just("Boolean".to_string()),
            Just("DateTime".to_string()),
            Just("Json".to_string()),
            "[A-Z][a-zA-Z]{0,10}",
        ]
    }

    fn field_kind() -> impl Strategy<Value = FieldKind> {
        prop_oneof![Just(FieldKind::Scalar), Just(FieldKind::Object), Just(FieldKind::Enum)]
    }

    proptest! {
        #[test]
        fn prop_reserved_names_never_required(
            name in prop_oneof![Just("id"), Just("createdAt"), Just("updatedAt"), Just("deletedAt")],
            declared in declared_type(),
            kind in field_kind(),
            required in any::<bool>(),
            list in any::<bool>(),
        ) {
            let ctx = classifier().classify(&FieldDescriptor::new(name, declared, kind, required, list));
            prop_assert!(!ctx.is_required);
        }

        #[test]
        fn prop_external_kinds_keep_declared_name(
            name in "[a-z][a-zA-Z]{0,10}",
            declared in declared_type(),
            is_enum in any::<bool>(),
            required in any::<bool>(),
        ) {
            let kind = if is_enum { FieldKind::Enum } else { FieldKind::Object };
            let ctx = classifier().classify(&FieldDescriptor::new(name, declared.clone(), kind, required, false));
            prop_assert!(ctx.needs_import);
            prop_assert_eq!(ctx.ts_type.to_string(), declared);
        }

        #[test]
        fn prop_validators_are_unique(
            name in "[a-z][a-zA-Z]{0,10}",
            declared in declared_type(),
            kind in field_kind(),
            required in any::<bool>(),
        ) {
            let ctx = classifier().classify(&FieldDescriptor::new(name, declared, kind, required, false));
            for (idx, v) in ctx.validators.iter().enumerate() {
                prop_assert!(!ctx.validators[idx + 1..].contains(v));
            }
            prop_assert_eq!(ctx.validators.len(), ctx.decorators.len());
        }
    }
}
