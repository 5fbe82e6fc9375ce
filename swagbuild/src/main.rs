//! `swagbuild` command line.
//!
//! Reads a directory of schema documents and writes one Go source unit to
//! stdout or to `--out`.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use swagbuild::codegen::config::{DEFAULT_DISPATCH, DEFAULT_PACKAGE, DEFAULT_RECEIVER};
use swagbuild::{Driver, DriverOptions, GeneratorConfig, InheritancePolicy};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// generate Go structs and client functions from Swagger 1.2 API documents
#[derive(Parser, Debug)]
#[command(name = "swagbuild", version)]
struct Cli {
    /// directory holding the `.json` schema documents
    #[arg(long, env = "SWAGBUILD_PATH")]
    path: PathBuf,

    /// emit struct declarations for models
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    structs: bool,

    /// emit the preamble and client functions
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    api: bool,

    /// Go package name of the output
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    package: String,

    /// receiver type the client functions are declared on
    #[arg(long, default_value = DEFAULT_RECEIVER)]
    receiver: String,

    /// receiver method performing the HTTP call
    #[arg(long, default_value = DEFAULT_DISPATCH)]
    dispatch: String,

    /// handling of a subtype claimed by several parents
    #[arg(long, value_enum, default_value_t = Inheritance::Reject)]
    inheritance: Inheritance,

    /// output .go file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Inheritance {
    /// fail the document
    Reject,
    /// keep the last claiming parent
    LastWriterWins,
}

impl From<Inheritance> for InheritancePolicy {
    fn from(value: Inheritance) -> Self {
        match value {
            Inheritance::Reject => Self::Reject,
            Inheritance::LastWriterWins => Self::LastWriterWins,
        }
    }
}

impl Cli {
    fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            generator: GeneratorConfig::new()
                .with_package(&self.package)
                .with_receiver(&self.receiver)
                .with_dispatch(&self.dispatch)
                .with_structs(self.structs)
                .with_api(self.api),
            inheritance: self.inheritance.into(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = Driver::new(cli.driver_options())
        .run(&cli.path)
        .with_context(|| format!("failed to generate from '{}'", cli.path.display()))?;

    match &cli.out {
        Some(out) => std::fs::write(out, &report.output)
            .with_context(|| format!("failed to write '{}'", out.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(report.output.as_bytes())
            .context("failed to write to stdout")?,
    }

    if report.is_complete() {
        info!(documents = report.documents, "generation finished");
    } else {
        warn!(
            documents = report.documents,
            skipped = report.skipped.len(),
            "generation finished with skipped documents"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["swagbuild", "--path", "api-docs"]).expect("parse");
        let options = cli.driver_options();

        assert_eq!(cli.path, PathBuf::from("api-docs"));
        assert_eq!(options.generator, GeneratorConfig::default());
        assert_eq!(options.inheritance, InheritancePolicy::Reject);
        assert!(cli.out.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "swagbuild",
            "--path",
            "docs",
            "--structs",
            "false",
            "--package",
            "client",
            "--inheritance",
            "last-writer-wins",
            "--out",
            "ari.go",
        ])
        .expect("parse");
        let options = cli.driver_options();

        assert!(!options.generator.emit_structs);
        assert!(options.generator.emit_api);
        assert_eq!(options.generator.package_name, "client");
        assert_eq!(options.inheritance, InheritancePolicy::LastWriterWins);
        assert_eq!(cli.out, Some(PathBuf::from("ari.go")));
    }
}
