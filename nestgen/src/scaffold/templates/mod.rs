//! Template registry for scaffold generation
//!
//! Every file kind the generator emits has one embedded Handlebars template.
//! Templates are compiled once when the registry is created.

mod files;

use super::helpers::TemplateHelpers;
use crate::error::Result;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::fmt;

pub use files::*;

handlebars_helper!(kebab: |input: str| TemplateHelpers::to_kebab_case(input));

/// The fixed set of generated file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Module wiring
    Module,
    /// Domain entity
    Entity,
    /// Entity to response mapper
    Mapper,
    /// Repository contract
    Repository,
    /// Create handler
    CreateUseCase,
    /// Delete handler
    DeleteUseCase,
    /// Find-by-id handler
    FindByIdUseCase,
    /// List handler
    ListUseCase,
    /// Update handler
    UpdateUseCase,
    /// Persistence mapper
    PrismaMapper,
    /// Persistence repository implementation
    PrismaRepository,
    /// HTTP controller
    Controller,
    /// Create request DTO
    CreateDto,
    /// Update request DTO
    UpdateDto,
}

impl TemplateKind {
    /// All kinds, in generation order
    pub const ALL: [Self; 14] = [
        Self::Module,
        Self::Entity,
        Self::Mapper,
        Self::Repository,
        Self::CreateUseCase,
        Self::DeleteUseCase,
        Self::FindByIdUseCase,
        Self::ListUseCase,
        Self::UpdateUseCase,
        Self::PrismaMapper,
        Self::PrismaRepository,
        Self::Controller,
        Self::CreateDto,
        Self::UpdateDto,
    ];

    /// Registry name of the template
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Entity => "entity",
            Self::Mapper => "mapper",
            Self::Repository => "repository",
            Self::CreateUseCase => "usecase_create",
            Self::DeleteUseCase => "usecase_delete",
            Self::FindByIdUseCase => "usecase_find_by_id",
            Self::ListUseCase => "usecase_list",
            Self::UpdateUseCase => "usecase_update",
            Self::PrismaMapper => "prisma_mapper",
            Self::PrismaRepository => "prisma_repository",
            Self::Controller => "controller",
            Self::CreateDto => "dto_create",
            Self::UpdateDto => "dto_update",
        }
    }

    /// Embedded template source
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Module => MODULE_TEMPLATE,
            Self::Entity => ENTITY_TEMPLATE,
            Self::Mapper => MAPPER_TEMPLATE,
            Self::Repository => REPOSITORY_TEMPLATE,
            Self::CreateUseCase => USECASE_CREATE_TEMPLATE,
            Self::DeleteUseCase => USECASE_DELETE_TEMPLATE,
            Self::FindByIdUseCase => USECASE_FIND_BY_ID_TEMPLATE,
            Self::ListUseCase => USECASE_LIST_TEMPLATE,
            Self::UpdateUseCase => USECASE_UPDATE_TEMPLATE,
            Self::PrismaMapper => PRISMA_MAPPER_TEMPLATE,
            Self::PrismaRepository => PRISMA_REPOSITORY_TEMPLATE,
            Self::Controller => CONTROLLER_TEMPLATE,
            Self::CreateDto => DTO_CREATE_TEMPLATE,
            Self::UpdateDto => DTO_UPDATE_TEMPLATE,
        }
    }

    /// Human-readable description, used in command output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Module => "module wiring",
            Self::Entity => "entity",
            Self::Mapper => "response mapper",
            Self::Repository => "repository contract",
            Self::CreateUseCase => "create use case",
            Self::DeleteUseCase => "delete use case",
            Self::FindByIdUseCase => "find-by-id use case",
            Self::ListUseCase => "list use case",
            Self::UpdateUseCase => "update use case",
            Self::PrismaMapper => "Prisma mapper",
            Self::PrismaRepository => "Prisma repository",
            Self::Controller => "HTTP controller",
            Self::CreateDto => "create DTO",
            Self::UpdateDto => "update DTO",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled scaffold templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile all embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("kebab", Box::new(kebab));

        for kind in TemplateKind::ALL {
            handlebars.register_template_string(kind.name(), kind.source())?;
        }

        Ok(Self { handlebars })
    }

    /// Render one template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render<T: Serialize>(&self, kind: TemplateKind, context: &T) -> Result<String> {
        Ok(self.handlebars.render(kind.name(), context)?)
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &TemplateKind::ALL.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_compile() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn test_names_are_unique() {
        for (idx, kind) in TemplateKind::ALL.iter().enumerate() {
            assert!(!TemplateKind::ALL[idx + 1..].iter().any(|k| k.name() == kind.name()));
        }
    }

    #[test]
    fn test_no_html_escaping() {
        let registry = TemplateRegistry::new().unwrap();
        let rendered = registry
            .render(
                TemplateKind::CreateDto,
                &json!({
                    "model_name": "Note",
                    "fields": [{
                        "name": "meta",
                        "property_type": "Record<string, any>",
                        "is_required": true,
                        "decorators": ["@IsObject()"],
                    }],
                }),
            )
            .unwrap();
        assert!(rendered.contains("meta!: Record<string, any>;"));
    }

    #[test]
    fn test_kebab_helper() {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("kebab", Box::new(kebab));
        let out = handlebars
            .render_template("{{kebab name}}", &json!({ "name": "UserProfile" }))
            .unwrap();
        assert_eq!(out, "user-profile");
    }
}
