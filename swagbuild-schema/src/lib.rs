//! # swagbuild Schema
//!
//! Swagger 1.2 document parser, model graph resolver and intermediate
//! representation.
//!
//! This crate provides:
//! - JSON document parsing into typed definitions
//! - Schema type conversion and identifier canonicalization
//! - Inheritance flattening for models declared through `subTypes`
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod operations;
pub mod parser;
pub mod resolver;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use ir::{FieldRecord, SchemaIr, TypeRecord, canonicalize, convert_type};
pub use operations::{ApiDef, ErrorResponse, OperationDef, ParamLocation, ParameterDef};
pub use parser::{parse_document, parse_document_file};
pub use resolver::{InheritancePolicy, ModelResolver, resolve};
pub use types::{Document, ModelDef, PropertyDef};
