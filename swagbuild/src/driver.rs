//! Directory processing and output assembly.
//!
//! The driver lists a schema directory, loads every `.json` document
//! independently and hands the surviving documents to the [`Generator`].
//! Documents that fail to load, or whose client functions clash with those
//! of an earlier document, are skipped and reported, never fatal.

use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use swagbuild_codegen::go::{ClientFunction, ClientGenerator};
use swagbuild_codegen::{CodegenError, FunctionNames, Generator, GeneratorConfig};
use swagbuild_schema::{InheritancePolicy, SchemaIr, parse_document_file};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Extension of schema documents.
const SCHEMA_EXTENSION: &str = "json";

/// Options for a driver run.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    /// Generator configuration.
    pub generator: GeneratorConfig,
    /// How subtypes claimed by several parents are handled.
    pub inheritance: InheritancePolicy,
}

/// Fatal driver errors.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The schema directory could not be listed.
    #[error("cannot read schema directory '{path}': {source}")]
    ReadDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Document left out of the output.
#[derive(Debug)]
pub struct SkippedFile {
    /// Document path.
    pub path: PathBuf,
    /// Why the document was skipped.
    pub error: CodegenError,
}

/// Document ready for assembly.
#[derive(Debug)]
struct LoadedDocument {
    ir: SchemaIr,
    functions: Vec<ClientFunction>,
}

/// Result of a driver run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Generated source unit.
    pub output: String,
    /// Number of documents that made it into the output.
    pub documents: usize,
    /// Documents that were skipped, in file order.
    pub skipped: Vec<SkippedFile>,
}

impl GenerationReport {
    /// Returns true if no document was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Generates one source unit from a directory of schema documents.
pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    /// Creates a new driver.
    #[must_use]
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    /// Processes every schema document in `dir`.
    ///
    /// Documents are accepted in file order; one whose function names clash
    /// with an already accepted document is skipped as a whole.
    ///
    /// # Errors
    /// Returns `DriverError::ReadDir` if the directory cannot be listed.
    pub fn run(&self, dir: &Path) -> Result<GenerationReport, DriverError> {
        let files = discover(dir)?;
        info!(dir = %dir.display(), files = files.len(), "processing schema documents");

        let loaded: Vec<_> = files
            .into_par_iter()
            .map(|path| {
                let result = self.load(&path);
                (path, result)
            })
            .collect();

        let mut names = FunctionNames::new();
        let mut schemas = Vec::with_capacity(loaded.len());
        let mut functions = Vec::new();
        let mut skipped = Vec::new();
        for (path, result) in loaded {
            let accepted = result.and_then(|doc| {
                names.admit(&doc.ir.api_base, &doc.functions)?;
                Ok(doc)
            });
            match accepted {
                Ok(doc) => {
                    schemas.push(doc.ir);
                    functions.extend(doc.functions);
                }
                Err(error) => {
                    warn!(file = %path.display(), %error, "skipping schema document");
                    skipped.push(SkippedFile { path, error });
                }
            }
        }

        let output = Generator::new(&self.options.generator).assemble(&schemas, &functions);

        Ok(GenerationReport {
            output,
            documents: schemas.len(),
            skipped,
        })
    }

    /// Reads, parses and resolves one document and generates its client
    /// functions.
    fn load(&self, path: &Path) -> Result<LoadedDocument, CodegenError> {
        let api_base = api_base(path)?;
        let document = parse_document_file(path)?;
        let ir = SchemaIr::from_document(api_base, document, self.options.inheritance)?;

        let functions = if self.options.generator.emit_api {
            ClientGenerator::new(&self.options.generator).generate(&ir)?
        } else {
            Vec::new()
        };

        debug!(
            file = %path.display(),
            types = ir.types.len(),
            operations = ir.operation_count(),
            "loaded schema document"
        );
        Ok(LoadedDocument { ir, functions })
    }
}

/// Lists the schema documents of a directory, sorted by file name.
///
/// # Errors
/// Returns `DriverError::ReadDir` if the directory cannot be listed.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let read_dir_error = |source| DriverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let is_schema = path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION);
        if is_file && is_schema {
            files.push(path);
        } else {
            debug!(path = %path.display(), "ignoring directory entry");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn api_base(path: &Path) -> Result<&str, CodegenError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            CodegenError::generation(format!("cannot derive API name from '{}'", path.display()))
        })
}
