use serde::Deserialize;

/// Parsed documentation for one package.
///
/// Documents are immutable once fetched; the cache hands out shared
/// references to the same value for the lifetime of the process.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Package identifier, e.g. `strings` or `net/http`.
    pub package: String,
    /// Link to the rendered documentation page.
    pub url: String,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub types: Vec<TypeDoc>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    #[default]
    Plain,
    Method,
}

/// A package-level function or a method declared on one of its types.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub kind: FunctionKind,
    /// Receiver type name, present only for methods.
    #[serde(default)]
    pub method_of: Option<String>,
    pub signature: String,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub example: Option<String>,
}

/// A type declared by a package.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TypeDoc {
    pub name: String,
    pub signature: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Function {
    pub fn is_method(&self) -> bool {
        self.kind == FunctionKind::Method
    }

    pub fn first_comment(&self) -> Option<&str> {
        first_line(&self.comments)
    }

    /// One-line form used in listings: the first line of the signature.
    pub fn short_form(&self) -> &str {
        self.signature.lines().next().unwrap_or(self.name.as_str())
    }
}

impl TypeDoc {
    pub fn first_comment(&self) -> Option<&str> {
        first_line(&self.comments)
    }

    pub fn short_form(&self) -> String {
        format!("type {}", self.name)
    }
}

fn first_line(comments: &[String]) -> Option<&str> {
    comments
        .first()
        .map(|comment| comment.trim())
        .filter(|comment| !comment.is_empty())
}
