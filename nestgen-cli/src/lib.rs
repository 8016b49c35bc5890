//! nestgen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod selection;
pub mod settings;

pub use selection::{merge_model_names, prompt_models};
pub use settings::{resolve_schema_path, Overrides};
