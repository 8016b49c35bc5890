//! Scaffold generator orchestrator
//!
//! Turns one model definition into the fourteen files of a NestJS module:
//! module wiring, entity, mappers, repositories, use cases, controller and
//! request DTOs. Nothing touches the filesystem here; see
//! [`super::writer`] for that.

use super::classifier::{FieldClassifier, FieldContext, TsType, Validator};
use super::helpers::TemplateHelpers;
use super::templates::{TemplateKind, TemplateRegistry};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::schema::ModelDefinition;
use serde::Serialize;
use std::path::PathBuf;

/// Generated file information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Rendered file content
    pub content: String,
    /// Template that produced the file
    pub kind: TemplateKind,
    /// Description of the file
    pub description: String,
}

/// Everything the templates see for one model
#[derive(Debug, Clone, Serialize)]
pub struct ModelContext {
    /// Model name as declared (`Account`)
    pub model_name: String,
    /// Plural class-name form (`Accounts`)
    pub model_plural: String,
    /// Prisma delegate accessor (`account`)
    pub model_camel: String,
    /// Module directory name (`accounts`)
    pub module_name: String,
    /// Singular file stem (`account`)
    pub singular_name: String,
    /// Identifier field name
    pub id_field: String,
    /// Field used to order list results
    pub order_field: String,
    /// Module the Prisma client types are imported from
    pub client_module: String,
    /// Repository property name in use cases
    pub repo_prop_name: String,
    /// Local variable name for a single entity
    pub entity_var_name: String,
    /// DTO fields; the default field list for templates
    pub fields: Vec<FieldContext>,
    /// Entity fields
    pub entity_fields: Vec<FieldContext>,
    /// DTO fields
    pub dto_fields: Vec<FieldContext>,
    /// Non-excluded string fields, used for free-text search
    pub searchable_fields: Vec<String>,
    /// Whether any field is searchable
    pub has_searchable_fields: bool,
    /// Model has an `email` field
    pub has_email: bool,
    /// Model has a `password` field
    pub has_password: bool,
    /// Model has a `googleId` field
    pub has_google_id: bool,
    /// Model has an `accountId` field
    pub has_account_id: bool,
    /// Validator decorators used by entity and DTO fields, first-seen order
    #[serde(skip)]
    pub validator_imports: Vec<Validator>,
    /// Client types used by entity and DTO fields, first-seen order
    #[serde(skip)]
    pub type_imports: Vec<String>,
}

/// CRUD scaffold generator
#[derive(Debug)]
pub struct ScaffoldGenerator<'a> {
    templates: &'a TemplateRegistry,
    config: &'a GeneratorConfig,
    classifier: FieldClassifier,
}

impl<'a> ScaffoldGenerator<'a> {
    /// Create a generator over compiled templates and a configuration
    #[must_use]
    pub fn new(templates: &'a TemplateRegistry, config: &'a GeneratorConfig) -> Self {
        Self {
            templates,
            config,
            classifier: FieldClassifier::new(config.reserved.clone()),
        }
    }

    /// Build the template context for a model
    #[must_use]
    pub fn context(&self, model: &ModelDefinition) -> ModelContext {
        let reserved = self.classifier.reserved();

        let entity_fields: Vec<FieldContext> = self
            .classifier
            .classify_all(&model.fields)
            .into_iter()
            .filter(|f| !f.is_relation())
            .collect();

        let dto_fields: Vec<FieldContext> = entity_fields
            .iter()
            .cloned()
            .map(|mut field| {
                if reserved.is_dto_optional(&field.name) {
                    field.add_validator(Validator::IsOptional);
                }
                field
            })
            .collect();

        let mut validator_imports = Vec::new();
        let mut type_imports = Vec::new();
        for field in entity_fields.iter().chain(&dto_fields) {
            if field.needs_import {
                let label = field.ts_type.to_string();
                if !type_imports.contains(&label) {
                    type_imports.push(label);
                }
            }
            for validator in &field.validators {
                if !validator_imports.contains(validator) {
                    validator_imports.push(*validator);
                }
            }
        }

        let searchable_fields: Vec<String> = dto_fields
            .iter()
            .filter(|f| f.ts_type == TsType::String && !f.excluded)
            .map(|f| f.name.clone())
            .collect();

        let has_field = |name: &str| dto_fields.iter().any(|f| f.name == name);

        let order_field = reserved
            .timestamps
            .iter()
            .find(|name| has_field(name))
            .cloned()
            .unwrap_or_else(|| reserved.identifier.clone());

        let model_camel = TemplateHelpers::to_camel_case(&model.name);

        ModelContext {
            model_plural: TemplateHelpers::to_plural_model(&model.name),
            module_name: TemplateHelpers::to_module_name(&model.name),
            singular_name: TemplateHelpers::to_singular_name(&model.name),
            id_field: reserved.identifier.clone(),
            order_field,
            client_module: self.config.imports.client_module.clone(),
            repo_prop_name: format!("{model_camel}Repository"),
            entity_var_name: model_camel.clone(),
            has_searchable_fields: !searchable_fields.is_empty(),
            has_email: has_field("email"),
            has_password: has_field("password"),
            has_google_id: has_field("googleId"),
            has_account_id: has_field("accountId"),
            model_name: model.name.clone(),
            model_camel,
            fields: dto_fields.clone(),
            entity_fields,
            dto_fields,
            searchable_fields,
            validator_imports,
            type_imports,
        }
    }

    /// Generate all files for a model
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render. No files are
    /// returned in that case.
    pub fn generate(&self, model: &ModelDefinition) -> Result<Vec<GeneratedFile>> {
        let context = self.context(model);
        let module_dir = self.config.output_root.join(&context.module_name);

        tracing::debug!(
            model = %context.model_name,
            module = %context.module_name,
            fields = context.entity_fields.len(),
            "rendering module"
        );

        TemplateKind::ALL
            .iter()
            .map(|&kind| -> Result<GeneratedFile> {
                let mut content = self.templates.render(kind, &context)?;
                if let Some(header) = self.import_header(kind, &context) {
                    content.insert_str(0, &header);
                }

                Ok(GeneratedFile {
                    path: module_dir.join(Self::relative_path(kind, &context)),
                    content,
                    kind,
                    description: format!("{} for {}", kind.label(), context.model_name),
                })
            })
            .collect()
    }

    /// Location of a file inside the module directory
    fn relative_path(kind: TemplateKind, context: &ModelContext) -> String {
        let module = &context.module_name;
        let singular = &context.singular_name;

        match kind {
            TemplateKind::Module => format!("{module}.module.ts"),
            TemplateKind::Entity => format!("core/entities/{singular}.entity.ts"),
            TemplateKind::Mapper => format!("core/mappers/{singular}.mapper.ts"),
            TemplateKind::Repository => format!("core/repositories/{singular}.repository.ts"),
            TemplateKind::CreateUseCase => format!("core/use-cases/create-{singular}.use-case.ts"),
            TemplateKind::DeleteUseCase => format!("core/use-cases/delete-{singular}.use-case.ts"),
            TemplateKind::FindByIdUseCase => {
                format!("core/use-cases/find-{singular}-by-id.use-case.ts")
            }
            TemplateKind::ListUseCase => format!("core/use-cases/list-{module}.use-case.ts"),
            TemplateKind::UpdateUseCase => format!("core/use-cases/update-{singular}.use-case.ts"),
            TemplateKind::PrismaMapper => {
                format!("infra/database/prisma/mappers/prisma.{singular}.mapper.ts")
            }
            TemplateKind::PrismaRepository => {
                format!("infra/database/prisma/repositories/prisma.{singular}.repository.ts")
            }
            TemplateKind::Controller => format!("infra/http/controllers/{singular}.controller.ts"),
            TemplateKind::CreateDto => format!("infra/http/dtos/create-{singular}.dto.ts"),
            TemplateKind::UpdateDto => format!("infra/http/dtos/update-{singular}.dto.ts"),
        }
    }

    /// Import lines prepended to entity and DTO files
    fn import_header(&self, kind: TemplateKind, context: &ModelContext) -> Option<String> {
        let mut validators = match kind {
            TemplateKind::Entity | TemplateKind::CreateDto | TemplateKind::UpdateDto => {
                context.validator_imports.clone()
            }
            _ => return None,
        };
        if kind == TemplateKind::UpdateDto && !validators.contains(&Validator::IsOptional) {
            validators.push(Validator::IsOptional);
        }

        if validators.is_empty() && context.type_imports.is_empty() {
            return None;
        }

        let imports = &self.config.imports;
        let mut header = String::new();
        if !validators.is_empty() {
            let names: Vec<&str> = validators.iter().map(|v| v.name()).collect();
            header.push_str(&format!(
                "import {{ {} }} from '{}';\n",
                names.join(", "),
                imports.validator_module
            ));
        }
        if !context.type_imports.is_empty() {
            header.push_str(&format!(
                "import {{ {} }} from '{}';\n",
                context.type_imports.join(", "),
                imports.client_module
            ));
        }
        header.push('\n');

        Some(header)
    }
}
