//! # swagbuild
//!
//! Generate Go structs and client functions from Swagger 1.2 API documents.
//!
//! swagbuild reads a directory of JSON schema documents (such as the Asterisk
//! REST Interface resource listings) and emits one Go source unit holding a
//! struct per model and a client method per API operation.
//!
//! ## Features
//!
//! - **Inheritance flattening** - Models declared through `subTypes` carry
//!   their ancestors' fields, with cycle detection
//! - **Parameter classification** - Required and path parameters become
//!   arguments, the rest a bounds-checked variadic
//! - **Error tables** - Declared status codes map to errors with their reason
//! - **Deterministic output** - Same input, byte-identical output
//!
//! ## Quick Start
//!
//! ```ignore
//! use swagbuild::prelude::*;
//!
//! let report = Driver::new(DriverOptions::default()).run(Path::new("api-docs"))?;
//! println!("{}", report.output);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Document parsing, type mapping and model resolution
//! - [`codegen`] - Go struct and client function generation
//! - [`driver`] - Directory processing and output assembly

pub mod driver;
pub mod prelude;

/// Document parsing and model resolution.
pub mod schema {
    pub use swagbuild_schema::*;
}

/// Go code generation.
pub mod codegen {
    pub use swagbuild_codegen::*;
}

// Re-export commonly used items at the crate root
pub use driver::{Driver, DriverError, DriverOptions, GenerationReport, SkippedFile};
pub use swagbuild_codegen::{CodegenError, Generator, GeneratorConfig};
pub use swagbuild_schema::{InheritancePolicy, SchemaIr};
