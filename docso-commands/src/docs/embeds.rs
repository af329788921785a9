//! Pure card builders for documentation lookups.
//!
//! Nothing here performs HTTP requests.

use twilight_model::channel::message::embed::Embed;

use docso_docs::{DocError, Document, Function, TypeDoc, lookup};
use docso_utils::COMMAND_PREFIX;
use docso_utils::embed::{build_embed, error_embed, truncate_description};

const NO_INFORMATION: &str = "*no information*";

/// Help card shown for a bare `lookup`.
pub fn docs_help_embed() -> anyhow::Result<Embed> {
    let p = COMMAND_PREFIX;
    let description = format!(
        "`{p}lookup <package>` package summary\n\
         `{p}lookup <package> <func>` function\n\
         `{p}lookup <package> <Type.method>` method\n\
         `{p}lookup <package> func|type <name>` explicit kind\n\
         `{p}pages functions|types <package>` browse page by page"
    );

    build_embed("Docs help!", description, None)
}

/// Card for a failed document fetch.
pub fn fetch_error_embed(package: &str, error: &DocError) -> anyhow::Result<Embed> {
    match error {
        DocError::NotFound(_) => error_embed(format!("No results found for package `{package}`")),
        DocError::Fetch { .. } => error_embed(format!(
            "An error occurred while fetching the page for the package `{package}`"
        )),
    }
}

pub fn unsupported_kind_embed(kind: &str) -> anyhow::Result<Embed> {
    error_embed(format!(
        "Unsupported search type {kind:?}\nValid options are:\n\t`func`\n\t`type`"
    ))
}

pub fn malformed_name_embed(raw: &str) -> anyhow::Result<Embed> {
    error_embed(format!(
        "Malformed name `{raw}`, expected `Name` or `Type.method`"
    ))
}

pub fn package_embed(document: &Document) -> anyhow::Result<Embed> {
    build_embed(
        &format!("Info for {}", document.package),
        format!(
            "Types: {}\nFunctions: {}",
            document.types.len(),
            document.functions.len()
        ),
        Some(&document.url),
    )
}

pub fn function_embed(document: &Document, name: &str) -> anyhow::Result<Embed> {
    let package = &document.package;
    if document.functions.is_empty() {
        return error_embed(format!(
            "No results found for package: {package:?}, function: {name:?}"
        ));
    }

    let matches = lookup::find_functions(document, name);
    let Some(first) = matches.first() else {
        return error_embed(format!(
            "The package `{package}` does not have function `{name}`"
        ));
    };

    build_embed(
        &format!("{package}: func {}", first.name),
        functions_body(&matches),
        Some(&format!("{}#{}", document.url, first.name)),
    )
}

pub fn method_embed(document: &Document, receiver: &str, name: &str) -> anyhow::Result<Embed> {
    let package = &document.package;
    if document.functions.is_empty() {
        return error_embed(format!("Package `{package}` seems to have no functions"));
    }

    let matches = lookup::find_methods(document, receiver, name);
    let Some(first) = matches.first() else {
        return error_embed(format!(
            "Package `{package}` does not have `func({receiver}) {name}`"
        ));
    };
    let receiver = first.method_of.as_deref().unwrap_or(receiver);

    build_embed(
        &format!("{package}: func({receiver}) {}", first.name),
        functions_body(&matches),
        Some(&format!("{}#{receiver}.{}", document.url, first.name)),
    )
}

pub fn type_embed(document: &Document, name: &str) -> anyhow::Result<Embed> {
    let package = &document.package;
    if document.types.is_empty() {
        return error_embed(format!(
            "Package `{package}` seems to have no type definitions"
        ));
    }

    let matches = lookup::find_types(document, name);
    let Some(first) = matches.first() else {
        return error_embed(format!(
            "Package `{package}` does not have type `{name}`"
        ));
    };

    build_embed(
        &format!("{package}: type {}", first.name),
        types_body(&matches),
        Some(&format!("{}#{}", document.url, first.name)),
    )
}

fn functions_body(functions: &[&Function]) -> String {
    let body = functions
        .iter()
        .map(|function| {
            let mut entry = format!(
                "`{}`\n{}",
                function.signature,
                function.first_comment().unwrap_or(NO_INFORMATION)
            );
            if let Some(example) = function.example.as_deref().filter(|ex| !ex.is_empty()) {
                entry.push_str(&format!("\n\nExample:\n```go\n{example}\n```"));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    truncate_description(&body)
}

fn types_body(types: &[&TypeDoc]) -> String {
    let body = types
        .iter()
        .map(|ty| {
            format!(
                "```go\n{}\n```\n{}",
                ty.signature,
                ty.first_comment().unwrap_or(NO_INFORMATION)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    truncate_description(&body)
}
