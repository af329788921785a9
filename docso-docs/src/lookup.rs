//! Case-insensitive name lookup over a document's collections.

use crate::model::{Document, Function, TypeDoc};

/// Package-level functions whose name matches `name`, ignoring case.
pub fn find_functions<'a>(document: &'a Document, name: &str) -> Vec<&'a Function> {
    document
        .functions
        .iter()
        .filter(|function| !function.is_method() && same_name(&function.name, name))
        .collect()
}

/// Methods named `name` declared on `receiver`, both ignoring case.
pub fn find_methods<'a>(document: &'a Document, receiver: &str, name: &str) -> Vec<&'a Function> {
    document
        .functions
        .iter()
        .filter(|function| {
            function.is_method()
                && same_name(&function.name, name)
                && function
                    .method_of
                    .as_deref()
                    .is_some_and(|owner| same_name(owner, receiver))
        })
        .collect()
}

pub fn find_types<'a>(document: &'a Document, name: &str) -> Vec<&'a TypeDoc> {
    document
        .types
        .iter()
        .filter(|ty| same_name(&ty.name, name))
        .collect()
}

/// Unicode case-insensitive comparison, so identifiers like `Äpfel` match
/// `äpfel` as well as `Marshal` matches `marshal`.
fn same_name(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FunctionKind;

    fn function(name: &str) -> Function {
        Function {
            name: name.to_owned(),
            signature: format!("func {name}(v any) ([]byte, error)"),
            ..Function::default()
        }
    }

    fn method(receiver: &str, name: &str) -> Function {
        Function {
            name: name.to_owned(),
            kind: FunctionKind::Method,
            method_of: Some(receiver.to_owned()),
            signature: format!("func (x *{receiver}) {name}()"),
            ..Function::default()
        }
    }

    fn document() -> Document {
        Document {
            package: "encoding/json".to_owned(),
            url: "https://pkg.go.dev/encoding/json".to_owned(),
            functions: vec![
                function("Marshal"),
                function("Unmarshal"),
                method("Decoder", "Decode"),
                method("Encoder", "Encode"),
                method("RawMessage", "MarshalJSON"),
            ],
            types: vec![TypeDoc {
                name: "Decoder".to_owned(),
                signature: "type Decoder struct {}".to_owned(),
                comments: vec![],
            }],
        }
    }

    #[test]
    fn function_names_match_ignoring_case() {
        let doc = document();

        for query in ["marshal", "MARSHAL", "Marshal"] {
            let found = find_functions(&doc, query);
            assert_eq!(found.len(), 1, "query {query}");
            assert_eq!(found[0].name, "Marshal");
        }
    }

    #[test]
    fn plain_lookup_skips_methods() {
        let doc = document();

        assert!(find_functions(&doc, "decode").is_empty());
    }

    #[test]
    fn method_lookup_filters_by_receiver() {
        let doc = document();

        let found = find_methods(&doc, "decoder", "DECODE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].method_of.as_deref(), Some("Decoder"));

        assert!(find_methods(&doc, "Encoder", "Decode").is_empty());
    }

    #[test]
    fn type_lookup_ignores_case() {
        let doc = document();

        assert_eq!(find_types(&doc, "decoder")[0].name, "Decoder");
        assert!(find_types(&doc, "Encoder").is_empty());
    }

    #[test]
    fn non_ascii_names_match_ignoring_case() {
        let doc = Document {
            functions: vec![function("Äpfel"), method("Σigma", "Größe")],
            types: vec![TypeDoc {
                name: "Σigma".to_owned(),
                signature: "type Σigma int".to_owned(),
                comments: vec![],
            }],
            ..Document::default()
        };

        assert_eq!(find_functions(&doc, "äpfel").len(), 1);
        assert_eq!(find_functions(&doc, "ÄPFEL").len(), 1);
        assert_eq!(find_types(&doc, "σigma")[0].name, "Σigma");
        assert_eq!(find_methods(&doc, "σIGMA", "grösse").len(), 0);
        assert_eq!(find_methods(&doc, "σIGMA", "GRÖßE").len(), 1);
    }
}
