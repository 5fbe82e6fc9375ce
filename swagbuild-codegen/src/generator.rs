//! Output unit assembly.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::go::{ClientFunction, ClientGenerator, StructGenerator, preamble};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use swagbuild_schema::ir::{SchemaIr, TypeRecord};
use tracing::{debug, warn};

/// Assembles one Go source unit from resolved documents.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the output unit.
    ///
    /// # Errors
    /// Returns `CodegenError` if a function cannot be generated or two
    /// operations produce the same function name.
    pub fn generate(&self, schemas: &[SchemaIr]) -> Result<String, CodegenError> {
        let functions = if self.config.emit_api {
            self.client_functions(schemas)?
        } else {
            Vec::new()
        };
        Ok(self.assemble(schemas, &functions))
    }

    /// Assembles the output unit from resolved documents and their
    /// already generated client functions.
    ///
    /// The unit holds, in order: the package line, the API preamble, the
    /// struct declarations and the client functions. The last two follow
    /// document order, then model or operation order within a document.
    #[must_use]
    pub fn assemble(&self, schemas: &[SchemaIr], functions: &[ClientFunction]) -> String {
        let mut output = preamble::package_line(&self.config.package_name);

        if self.config.emit_api {
            let imports: BTreeSet<&str> = functions
                .iter()
                .flat_map(|f| f.imports.iter().copied())
                .collect();
            output.push_str(&preamble::api_preamble(&imports));
        }

        if self.config.emit_structs {
            let types = merge_types(schemas);
            debug!(structs = types.len(), "emitting struct declarations");
            output.push_str(&StructGenerator::new(types.into_values()).generate());
        }

        if self.config.emit_api {
            for function in functions {
                output.push_str(&function.source);
            }
        }

        output
    }

    /// Generates every client function, rejecting name clashes.
    fn client_functions(&self, schemas: &[SchemaIr]) -> Result<Vec<ClientFunction>, CodegenError> {
        let client = ClientGenerator::new(self.config);
        let mut names = FunctionNames::new();
        let mut functions = Vec::new();

        for ir in schemas {
            let generated = client.generate(ir)?;
            names.admit(&ir.api_base, &generated)?;
            functions.extend(generated);
        }

        debug!(functions = functions.len(), "generated client functions");
        Ok(functions)
    }
}

/// Function names taken by the documents accepted so far.
#[derive(Debug, Default)]
pub struct FunctionNames {
    taken: BTreeSet<String>,
}

impl FunctionNames {
    /// Creates an empty name set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the names of one document's functions.
    ///
    /// Nothing is taken when any name is already in use.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` naming the first clashing function.
    pub fn admit(
        &mut self,
        api_base: &str,
        functions: &[ClientFunction],
    ) -> Result<(), CodegenError> {
        if let Some(clash) = functions.iter().find(|f| self.taken.contains(&f.name)) {
            return Err(CodegenError::generation(format!(
                "duplicate client function '{}' in '{}'",
                clash.name, api_base
            )));
        }
        self.taken.extend(functions.iter().map(|f| f.name.clone()));
        Ok(())
    }
}

/// Collects the types of all documents, a later definition replacing an
/// earlier one of the same name in place.
fn merge_types(schemas: &[SchemaIr]) -> IndexMap<&str, &TypeRecord> {
    let mut merged = IndexMap::new();
    for ir in schemas {
        for (name, record) in &ir.types {
            if merged.insert(name.as_str(), record).is_some() {
                warn!(
                    model = %name,
                    api = %ir.api_base,
                    "model defined by several documents, keeping the later definition"
                );
            }
        }
    }
    merged
}
