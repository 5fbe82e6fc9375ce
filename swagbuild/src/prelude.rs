//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use swagbuild::prelude::*;
//! ```

// Schema types
pub use swagbuild_schema::{
    ApiDef, Document, FieldRecord, InheritancePolicy, ModelDef, OperationDef, ParamLocation,
    ParameterDef, ParseError, SchemaError, SchemaIr, TypeRecord, canonicalize, convert_type,
    parse_document,
};

// Codegen types
pub use swagbuild_codegen::go::{ClientFunction, ClientGenerator, StructGenerator};
pub use swagbuild_codegen::{CodegenError, FunctionNames, Generator, GeneratorConfig};

// Driver types
pub use crate::driver::{Driver, DriverError, DriverOptions, GenerationReport, SkippedFile};

pub use std::path::Path;
