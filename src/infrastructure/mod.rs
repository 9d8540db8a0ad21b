//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the adapters that turn serde data (JSON documents,
//! serializable structs) and TOML schema files into records the domain
//! walker understands.

pub mod converters;
pub mod schema;

pub use converters::{JsonRecord, ValueConverter};
pub use schema::{Schema, SchemaField};
