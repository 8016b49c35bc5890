//! Prisma schema text parser
//!
//! Only the parts needed for scaffolding are understood: block structure,
//! field names, field types and their `[]` / `?` modifiers. Attributes are
//! skipped, and `datasource` / `generator` blocks are ignored entirely.

use super::{EnumDefinition, FieldDescriptor, FieldKind, ModelDefinition, Schema};
use crate::error::{NestgenError, Result};
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(model|enum|type|view|datasource|generator)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{$")
        .expect("block header pattern is valid")
});

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([A-Za-z_][A-Za-z0-9_]*)\s+([A-Za-z_][A-Za-z0-9_]*)(\("[^"]*"\))?(\[\])?(\?)?(?:\s+.*)?$"#,
    )
    .expect("field line pattern is valid")
});

static ENUM_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\s+.*)?$").expect("enum value pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Model,
    Enum,
    Composite,
    View,
    Ignored,
}

/// Field as written, before its kind is known
#[derive(Debug)]
struct RawField {
    name: String,
    field_type: String,
    list: bool,
    optional: bool,
}

#[derive(Debug)]
struct Block {
    kind: BlockKind,
    name: String,
    fields: Vec<RawField>,
    values: Vec<String>,
}

pub(super) fn parse(source: &str) -> Result<Schema> {
    let blocks = read_blocks(source)?;

    let enum_names: Vec<&str> = blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Enum)
        .map(|b| b.name.as_str())
        .collect();
    let object_names: Vec<&str> = blocks
        .iter()
        .filter(|b| matches!(b.kind, BlockKind::Model | BlockKind::Composite | BlockKind::View))
        .map(|b| b.name.as_str())
        .collect();

    let mut schema = Schema::default();

    for block in &blocks {
        match block.kind {
            BlockKind::Model => {
                let fields = block
                    .fields
                    .iter()
                    .map(|raw| {
                        let kind = if enum_names.contains(&raw.field_type.as_str()) {
                            FieldKind::Enum
                        } else if object_names.contains(&raw.field_type.as_str()) {
                            FieldKind::Object
                        } else {
                            FieldKind::Scalar
                        };
                        FieldDescriptor::new(&raw.name, &raw.field_type, kind, !raw.optional, raw.list)
                    })
                    .collect();

                schema.models.push(ModelDefinition {
                    name: block.name.clone(),
                    fields,
                });
            }
            BlockKind::Enum => schema.enums.push(EnumDefinition {
                name: block.name.clone(),
                values: block.values.clone(),
            }),
            BlockKind::Composite | BlockKind::View | BlockKind::Ignored => {}
        }
    }

    Schema::ensure_unique_models(&schema.models)?;

    Ok(schema)
}

fn read_blocks(source: &str) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut current: Option<(usize, Block)> = None;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if line == "}" {
            if let Some((_, block)) = current.take() {
                blocks.push(block);
                continue;
            }
        }

        let Some((_, block)) = current.as_mut() else {
            let captures = BLOCK_HEADER.captures(line).ok_or_else(|| NestgenError::SchemaParse {
                line: line_no,
                message: format!("expected a block declaration, found '{line}'"),
            })?;

            let kind = match &captures[1] {
                "model" => BlockKind::Model,
                "enum" => BlockKind::Enum,
                "type" => BlockKind::Composite,
                "view" => BlockKind::View,
                _ => BlockKind::Ignored,
            };

            current = Some((
                line_no,
                Block {
                    kind,
                    name: captures[2].to_string(),
                    fields: Vec::new(),
                    values: Vec::new(),
                },
            ));
            continue;
        };

        // Block-level attributes such as @@id, @@map, @@index
        if line.starts_with("@@") {
            continue;
        }

        match block.kind {
            BlockKind::Model | BlockKind::Composite | BlockKind::View => {
                block.fields.push(parse_field(line, line_no)?);
            }
            BlockKind::Enum => {
                let captures = ENUM_VALUE.captures(line).ok_or_else(|| NestgenError::SchemaParse {
                    line: line_no,
                    message: format!("invalid enum value '{line}'"),
                })?;
                block.values.push(captures[1].to_string());
            }
            BlockKind::Ignored => {}
        }
    }

    if let Some((start, block)) = current {
        return Err(NestgenError::SchemaParse {
            line: start,
            message: format!("block '{}' is never closed", block.name),
        });
    }

    Ok(blocks)
}

fn parse_field(line: &str, line_no: usize) -> Result<RawField> {
    let captures = FIELD_LINE.captures(line).ok_or_else(|| NestgenError::SchemaParse {
        line: line_no,
        message: format!("invalid field declaration '{line}'"),
    })?;

    Ok(RawField {
        name: captures[1].to_string(),
        field_type: captures[2].to_string(),
        list: captures.get(4).is_some(),
        optional: captures.get(5).is_some(),
    })
}

/// Drop a trailing `//` comment that is not inside a string literal
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;

    for (idx, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\\' if in_string => {
                escaped = !escaped;
                continue;
            }
            b'"' if !escaped => in_string = !in_string,
            b'/' if !in_string && bytes.get(idx + 1) == Some(&b'/') => return &line[..idx],
            _ => {}
        }
        escaped = false;
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
// Application schema
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

generator client {
  provider = "prisma-client-js"
  output   = "../generated/prisma"
}

enum Role {
  ADMIN  @map("admin")
  MEMBER
  @@map("roles")
}

/// A customer account
model Account {
  id        String    @id @default(uuid())
  email     String    @unique // login
  name      String?
  role      Role      @default(MEMBER)
  tags      String[]
  settings  Json?     @default("{\"theme\": \"dark//light\"}")
  balance   Decimal
  legacy    Unsupported("circle")?
  address   Address?
  posts     Post[]
  createdAt DateTime  @default(now())
  deletedAt DateTime?

  @@map("accounts")
}

type Address {
  street String
  city   String
}

model Post {
  id        String  @id
  accountId String
  account   Account @relation(fields: [accountId], references: [id])
}
"#;

    #[test]
    fn test_parses_models_and_enums() {
        let schema = parse(SCHEMA).unwrap();
        assert_eq!(schema.model_names(), vec!["Account", "Post"]);
        assert_eq!(schema.enums.len(), 1);
        assert_eq!(schema.enums[0].name, "Role");
        assert_eq!(schema.enums[0].values, vec!["ADMIN", "MEMBER"]);
    }

    #[test]
    fn test_field_kinds_and_modifiers() {
        let schema = parse(SCHEMA).unwrap();
        let account = schema.model("Account").unwrap();
        let field = |name: &str| account.fields.iter().find(|f| f.name == name).unwrap();

        assert_eq!(field("id"), &FieldDescriptor::scalar("id", "String"));
        assert_eq!(field("name"), &FieldDescriptor::scalar("name", "String").optional());
        assert_eq!(field("role").kind, FieldKind::Enum);
        assert!(field("tags").list);
        assert!(field("tags").required);
        assert_eq!(field("settings").field_type, "Json");
        assert!(!field("settings").required);
        assert_eq!(field("legacy").field_type, "Unsupported");
        assert_eq!(field("legacy").kind, FieldKind::Scalar);
        assert_eq!(field("address").kind, FieldKind::Object);
        assert_eq!(field("posts").kind, FieldKind::Object);
        assert!(field("posts").list);
        assert_eq!(account.fields.len(), 12);
    }

    #[test]
    fn test_relation_back_reference() {
        let schema = parse(SCHEMA).unwrap();
        let post = schema.model("Post").unwrap();
        assert_eq!(post.fields[2].kind, FieldKind::Object);
        assert_eq!(post.fields[2].field_type, "Account");
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse("model Broken {\n  id String\n").unwrap_err();
        match err {
            NestgenError::SchemaParse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("Broken"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_field() {
        let err = parse("model Broken {\n  lonely\n}\n").unwrap_err();
        assert!(matches!(err, NestgenError::SchemaParse { line: 2, .. }));
    }

    #[test]
    fn test_stray_text_outside_blocks() {
        assert!(parse("hello world\n").is_err());
    }

    #[test]
    fn test_duplicate_model() {
        let err = parse("model A {\n  id String\n}\nmodel A {\n  id String\n}\n").unwrap_err();
        assert!(matches!(err, NestgenError::DuplicateModel(name) if name == "A"));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("name String // note"), "name String ");
        assert_eq!(strip_comment(r#"url String @default("http://x")"#), r#"url String @default("http://x")"#);
        assert_eq!(strip_comment("/// doc"), "");
    }
}
