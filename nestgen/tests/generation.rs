//! End-to-end generation tests
//!
//! Loads schemas from disk and writes complete modules into a temporary
//! project directory.

use anyhow::Result;
use nestgen::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

generator client {
  provider = "prisma-client-js"
  output   = "../generated/prisma"
}

enum Role {
  OWNER
  MEMBER
}

/// Tenant account
model Account {
  id        String    @id @default(uuid())
  name      String
  email     String    @unique
  password  String?
  googleId  String?   @unique
  role      Role      @default(MEMBER)
  settings  Json?
  webhooks  Webhook[]
  createdAt DateTime  @default(now())
  updatedAt DateTime  @updatedAt
  deletedAt DateTime?
}

model Webhook {
  id        String   @id @default(uuid())
  url       String
  secret    String   // signing secret
  attempts  Int      @default(0)
  active    Boolean  @default(true)
  accountId String
  account   Account  @relation(fields: [accountId], references: [id])
  createdAt DateTime @default(now())

  @@index([accountId])
}
"#;

fn write_schema(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("prisma"))?;
    fs::write(root.join("prisma/schema.prisma"), SCHEMA)?;
    Ok(())
}

fn read(root: &Path, relative: &str) -> Result<String> {
    Ok(fs::read_to_string(root.join(relative))?)
}

#[test]
fn test_generates_account_module() -> Result<()> {
    let project = TempDir::new()?;
    write_schema(project.path())?;

    let config = GeneratorConfig::default();
    let schema = Schema::load(&project.path().join(&config.schema_path))?;
    let runner = Runner::new(&schema, &config)?;

    let report = runner.run(&GenerationRequest::new(["Account"]).project_root(project.path()))?;
    assert_eq!(report.count(FileOutcome::Created), 14);
    assert!(report.missing.is_empty());

    let entity = read(project.path(), "src/modules/accounts/core/entities/account.entity.ts")?;
    assert!(entity.contains("import { Role } from 'generated/prisma';"));
    assert!(entity.contains("id?: string;"));
    assert!(entity.contains("email!: string;"));
    assert!(entity.contains("role!: Role;"));
    assert!(entity.contains("settings?: Record<string, any>;"));
    assert!(entity.contains("createdAt?: Date;"));
    assert!(!entity.contains("webhooks"));

    let create_dto = read(project.path(), "src/modules/accounts/infra/http/dtos/create-account.dto.ts")?;
    assert!(create_dto.contains("@IsEnum(Role)"));
    assert!(create_dto.contains("@IsUUID()"));

    let repository = read(
        project.path(),
        "src/modules/accounts/infra/database/prisma/repositories/prisma.account.repository.ts",
    )?;
    assert!(repository.contains("findByEmail"));
    assert!(repository.contains("{ name: { contains: search, mode: 'insensitive' } },"));
    assert!(repository.contains("orderBy: { createdAt: 'desc' }"));

    Ok(())
}

#[test]
fn test_generates_scoped_webhook_module() -> Result<()> {
    let project = TempDir::new()?;
    write_schema(project.path())?;

    let config = GeneratorConfig::default();
    let schema = Schema::load(&project.path().join(&config.schema_path))?;
    let runner = Runner::new(&schema, &config)?;
    runner.run(&GenerationRequest::new(["Webhook"]).project_root(project.path()))?;

    let controller = read(
        project.path(),
        "src/modules/webhooks/infra/http/controllers/webhook.controller.ts",
    )?;
    assert!(controller.contains("@Controller('webhooks')"));
    assert!(controller.contains("@Headers('x-account-id')"));

    let module = read(project.path(), "src/modules/webhooks/webhooks.module.ts")?;
    assert!(module.contains("export class WebhooksModule {}"));

    let create = read(
        project.path(),
        "src/modules/webhooks/core/use-cases/create-webhook.use-case.ts",
    )?;
    assert!(!create.contains("ConflictException"));
    assert!(!create.contains("account:"));

    Ok(())
}

#[test]
fn test_dmmf_schema_matches_prisma_text() -> Result<()> {
    let project = TempDir::new()?;
    let dmmf = r#"{
      "datamodel": {
        "models": [{
          "name": "Webhook",
          "fields": [
            {"name": "id", "type": "String", "kind": "scalar", "isRequired": true, "isList": false},
            {"name": "url", "type": "String", "kind": "scalar", "isRequired": true, "isList": false},
            {"name": "account", "type": "Account", "kind": "object", "isRequired": true, "isList": false}
          ]
        }],
        "enums": []
      }
    }"#;
    let path = project.path().join("dmmf.json");
    fs::write(&path, dmmf)?;

    let schema = Schema::load(&path)?;
    let config = GeneratorConfig::default();
    let report = Runner::new(&schema, &config)?
        .run(&GenerationRequest::new(["Webhook"]).project_root(project.path()).dry_run(true))?;

    assert_eq!(report.count(FileOutcome::Planned), 14);
    assert!(!project.path().join("src").exists());
    Ok(())
}

#[test]
fn test_custom_output_root_and_force() -> Result<()> {
    let project = TempDir::new()?;
    write_schema(project.path())?;

    let config = GeneratorConfig {
        output_root: "app/features".into(),
        ..GeneratorConfig::default()
    };
    let schema = Schema::load(&project.path().join("prisma/schema.prisma"))?;
    let runner = Runner::new(&schema, &config)?;
    let request = GenerationRequest::new(["Webhook"]).project_root(project.path());

    runner.run(&request)?;
    let module_path = project.path().join("app/features/webhooks/webhooks.module.ts");
    fs::write(&module_path, "// edited by hand\n")?;

    runner.run(&request)?;
    assert_eq!(fs::read_to_string(&module_path)?, "// edited by hand\n");

    runner.run(&request.clone().force(true))?;
    assert!(fs::read_to_string(&module_path)?.contains("WebhooksModule"));
    Ok(())
}

#[test]
fn test_missing_schema_is_reported() {
    let project = TempDir::new().unwrap();
    let result = Schema::load(&project.path().join("prisma/schema.prisma"));
    assert!(matches!(result, Err(NestgenError::SchemaNotFound(_))));
}
