//! Client function generation.
//!
//! Every operation becomes one method on the configured receiver type.
//! Required and path parameters are positional arguments; the remaining ones
//! are passed as a trailing `options ...string` in declaration order, and a
//! call with more tokens than declared optional parameters returns an error
//! instead of reading out of range.
//!
//! Status codes listed in the operation's error table map to errors carrying
//! the declared reason. Any other status code clears the error, so an
//! unlisted failure status is reported as success.

use super::{doc_comment, go_quote};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use std::collections::BTreeSet;
use swagbuild_schema::ir::{SchemaIr, canonicalize, convert_type};
use swagbuild_schema::operations::{ErrorResponse, OperationDef, ParamLocation, ParameterDef};
use swagbuild_schema::SchemaError;
use tracing::warn;

/// Go import paths used by generated functions.
pub const IMPORT_ERRORS: &str = "errors";
/// `fmt` import path.
pub const IMPORT_FMT: &str = "fmt";
/// `encoding/json` import path.
pub const IMPORT_JSON: &str = "encoding/json";

/// One generated client function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFunction {
    /// Go function name.
    pub name: String,
    /// Function source text.
    pub source: String,
    /// Import paths the source relies on.
    pub imports: BTreeSet<&'static str>,
}

/// Generator for client functions.
pub struct ClientGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ClientGenerator<'a> {
    /// Creates a new client generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the functions for every operation of a document.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name is not a valid identifier or two
    /// operations produce the same function name.
    pub fn generate(&self, ir: &SchemaIr) -> Result<Vec<ClientFunction>, CodegenError> {
        let mut seen = BTreeSet::new();
        let mut functions = Vec::with_capacity(ir.operation_count());
        for api in &ir.apis {
            for op in &api.operations {
                let function = self.generate_function(&ir.api_base, &api.path, op)?;
                if !seen.insert(function.name.clone()) {
                    return Err(CodegenError::generation(format!(
                        "duplicate client function '{}' in '{}'",
                        function.name, ir.api_base
                    )));
                }
                functions.push(function);
            }
        }
        Ok(functions)
    }

    /// Generates one client function.
    ///
    /// # Arguments
    /// * `api_base` - API base name, prefixed to the function name
    /// * `path_template` - Path with `{name}` placeholders
    /// * `op` - Operation to call
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the API base, the nickname or a
    /// parameter name is empty, and `CodegenError::InvalidIdentifier` if one
    /// of them does not canonicalize to a Go identifier.
    pub fn generate_function(
        &self,
        api_base: &str,
        path_template: &str,
        op: &OperationDef,
    ) -> Result<ClientFunction, CodegenError> {
        let name = format!(
            "{}{}",
            go_identifier(api_base, "API base name")?,
            go_identifier(
                &op.nickname,
                format!("nickname of operation on '{path_template}'"),
            )?
        );

        let (positional, optional): (Vec<&ParameterDef>, Vec<&ParameterDef>) =
            op.parameters.iter().partition(|p| p.is_positional());
        let positional = positional
            .into_iter()
            .map(|p| {
                let arg = go_identifier(&p.name, format!("parameter name of operation '{name}'"))?;
                Ok::<_, CodegenError>((p, arg))
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;

        let response_type = op.has_response().then(|| convert_type(&op.response_class));
        let mut imports = BTreeSet::new();
        let mut output = String::new();

        // Signature
        let mut args: Vec<String> = positional
            .iter()
            .map(|(p, arg)| format!("{} {}", arg, convert_type(&p.data_type)))
            .collect();
        if !optional.is_empty() {
            args.push("options ...string".to_string());
        }
        let returns = match &response_type {
            Some(t) => format!("({t}, error)"),
            None => "error".to_string(),
        };

        output.push_str(&doc_comment(&name, op.summary.as_deref()));
        output.push_str(&format!(
            "func (a *{}) {}({}) {} {{\n",
            self.config.receiver_type,
            name,
            args.join(", "),
            returns
        ));

        if let Some(t) = &response_type {
            output.push_str(&format!("\tvar r {t}\n"));
        }

        if !optional.is_empty() {
            imports.insert(IMPORT_FMT);
            output.push_str(&bounds_check(&name, optional.len(), response_type.is_some()));
        }

        output.push_str("\tparamMap := make(map[string]string)\n");

        for (p, arg) in positional
            .iter()
            .filter(|(p, _)| p.param_type != ParamLocation::Path)
        {
            let value = if convert_type(&p.data_type) == "string" {
                arg.clone()
            } else {
                imports.insert(IMPORT_FMT);
                format!("fmt.Sprint({arg})")
            };
            output.push_str(&format!("\tparamMap[{}] = {}\n", go_quote(&p.name), value));
        }

        let (url, path_args) = substitute_path(&name, path_template, &positional);
        if path_args.is_empty() {
            output.push_str(&format!("\turl := {}\n", go_quote(&url)));
        } else {
            imports.insert(IMPORT_FMT);
            output.push_str(&format!(
                "\turl := fmt.Sprintf({}, {})\n",
                go_quote(&url),
                path_args.join(", ")
            ));
        }

        if !optional.is_empty() {
            output.push_str(&option_dispatch(&optional));
        }

        output.push_str("\tbody := buildJSON(paramMap)\n");

        let dispatch = format!(
            "a.{}(url, body, {})",
            self.config.dispatch_method,
            go_quote(&op.http_method)
        );
        let errors = declared_errors(&name, &op.error_responses);

        if response_type.is_none() && errors.is_empty() {
            output.push_str(&format!("\t{dispatch}\n"));
            output.push_str("\treturn nil\n");
        } else {
            output.push_str(&format!("\tresult := {dispatch}\n"));
            if !errors.is_empty() {
                imports.insert(IMPORT_ERRORS);
                output.push_str(&status_switch(&errors));
            }
            match (response_type.is_some(), errors.is_empty()) {
                (true, true) => {
                    imports.insert(IMPORT_JSON);
                    output.push_str("\terr := json.Unmarshal(result.Body, &r)\n");
                    output.push_str("\treturn r, err\n");
                }
                (true, false) => {
                    imports.insert(IMPORT_JSON);
                    output.push_str("\tif err == nil {\n");
                    output.push_str("\t\terr = json.Unmarshal(result.Body, &r)\n");
                    output.push_str("\t}\n");
                    output.push_str("\treturn r, err\n");
                }
                (false, _) => output.push_str("\treturn err\n"),
            }
        }

        output.push_str("}\n\n");

        Ok(ClientFunction {
            name,
            source: output,
            imports,
        })
    }
}

/// Canonicalizes a schema name into an exported Go identifier.
fn go_identifier(raw: &str, context: impl Into<String>) -> Result<String, CodegenError> {
    let context = context.into();
    let name = canonicalize(raw).map_err(|_| SchemaError::empty_identifier(context.clone()))?;
    if is_go_identifier(&name) {
        Ok(name)
    } else {
        Err(CodegenError::invalid_identifier(context, name))
    }
}

/// Returns true for a letter or underscore followed by letters, digits and
/// underscores.
fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Emits the guard rejecting more option tokens than declared.
fn bounds_check(name: &str, declared: usize, has_response: bool) -> String {
    let zero = if has_response { "r, " } else { "" };
    let message = format!("{name}: %d optional arguments given, at most {declared} accepted");
    format!(
        "\tif len(options) > {declared} {{\n\
         \t\treturn {zero}fmt.Errorf({}, len(options))\n\
         \t}}\n",
        go_quote(&message)
    )
}

/// Replaces path placeholders with indexed format verbs.
///
/// Returns the format string and the arguments feeding it. Each path
/// parameter is passed once; all of its placeholders refer to it by index.
fn substitute_path(
    name: &str,
    path_template: &str,
    positional: &[(&ParameterDef, String)],
) -> (String, Vec<String>) {
    let mut url = path_template.replace('%', "%%");
    let mut path_args = Vec::new();

    for (p, arg) in positional
        .iter()
        .filter(|(p, _)| p.param_type == ParamLocation::Path)
    {
        let placeholder = format!("{{{}}}", p.name);
        if !url.contains(&placeholder) {
            warn!(
                function = %name,
                parameter = %p.name,
                path = %path_template,
                "path parameter has no placeholder in the path template"
            );
            continue;
        }
        path_args.push(arg.clone());
        url = url.replace(&placeholder, &format!("%[{}]v", path_args.len()));
    }

    (url, path_args)
}

/// Emits the loop copying option tokens into the parameter map.
fn option_dispatch(optional: &[&ParameterDef]) -> String {
    let mut output = String::new();
    output.push_str("\tfor index, value := range options {\n");
    output.push_str("\t\tswitch index {\n");
    for (index, p) in optional.iter().enumerate() {
        output.push_str(&format!("\t\tcase {index}:\n"));
        output.push_str("\t\t\tif len(value) > 0 {\n");
        output.push_str(&format!("\t\t\t\tparamMap[{}] = value\n", go_quote(&p.name)));
        output.push_str("\t\t\t}\n");
    }
    output.push_str("\t\t}\n");
    output.push_str("\t}\n");
    output
}

/// Returns the error table with repeated status codes dropped.
fn declared_errors<'e>(name: &str, responses: &'e [ErrorResponse]) -> Vec<&'e ErrorResponse> {
    let mut seen = BTreeSet::new();
    responses
        .iter()
        .filter(|e| {
            let first = seen.insert(e.code);
            if !first {
                warn!(function = %name, code = e.code, "repeated error response code ignored");
            }
            first
        })
        .collect()
}

/// Emits the status code switch. Unlisted codes clear the error.
fn status_switch(errors: &[&ErrorResponse]) -> String {
    let mut output = String::new();
    output.push_str("\tvar err error\n");
    output.push_str("\tswitch result.StatusCode {\n");
    for e in errors {
        output.push_str(&format!("\tcase {}:\n", e.code));
        output.push_str(&format!("\t\terr = errors.New({})\n", go_quote(&e.reason)));
    }
    output.push_str("\tdefault:\n");
    output.push_str("\t\terr = nil\n");
    output.push_str("\t}\n");
    output
}
