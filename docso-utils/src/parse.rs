use crate::pagination::SubjectKind;

/// A name a user asked to look up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Symbol<'a> {
    /// A package-level function, e.g. `Contains`.
    Function(&'a str),
    /// A method written as `Receiver.name`, e.g. `Builder.String`.
    Method { receiver: &'a str, name: &'a str },
}

/// Parse a lookup name; a `.` separates receiver type from method name.
///
/// Returns `None` when either side of the dot is empty.
pub fn parse_symbol(raw: &str) -> Option<Symbol<'_>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.split_once('.') {
        Some((receiver, name)) if !receiver.is_empty() && !name.is_empty() => {
            Some(Symbol::Method { receiver, name })
        }
        Some(_) => None,
        None => Some(Symbol::Function(raw)),
    }
}

/// Parse the collection argument of the `pages` command.
pub fn parse_subject_kind(raw: &str) -> Option<SubjectKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "functions" | "function" | "funcs" | "fns" => Some(SubjectKind::Functions),
        "types" | "type" => Some(SubjectKind::Types),
        _ => None,
    }
}
