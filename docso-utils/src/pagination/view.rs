//! Rendering of a pagination session into message content.

use twilight_model::channel::message::embed::Embed;

use crate::embed::{build_paginated_embed, truncate_description};

use super::PAGE_SIZE;
use super::page::page_window;
use super::state::{PaginationState, SubjectKind};

const NO_INFORMATION: &str = "*no information*";

/// Content for one page of a session, ready to send or edit in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedPage {
    pub title: String,
    pub description: String,
    /// `Page X/Y`.
    pub page_indicator: String,
    pub page: usize,
    pub page_limit: usize,
}

impl RenderedPage {
    pub fn to_embed(&self) -> anyhow::Result<Embed> {
        build_paginated_embed(&self.title, self.description.clone(), &self.page_indicator)
    }
}

/// Render the session's current page.
pub fn render_page(state: &PaginationState) -> RenderedPage {
    let document = state.document();
    let subject = state.subject();
    let page = state.current_page();
    let (start, end) = page_window(subject.item_count(document), PAGE_SIZE, page);

    let lines: Vec<String> = match subject {
        SubjectKind::Functions => document.functions[start..end]
            .iter()
            .map(|function| item_line(function.short_form(), function.first_comment()))
            .collect(),
        SubjectKind::Types => document.types[start..end]
            .iter()
            .map(|ty| item_line(&ty.short_form(), ty.first_comment()))
            .collect(),
    };

    let description = if lines.is_empty() {
        format!("*no {} documented*", subject.label())
    } else {
        truncate_description(&lines.join("\n\n"))
    };

    RenderedPage {
        title: format!("{} {}", document.package, subject.label()),
        description,
        page_indicator: page_indicator(page, state.page_limit()),
        page,
        page_limit: state.page_limit(),
    }
}

pub fn page_indicator(page: usize, page_limit: usize) -> String {
    format!("Page {page}/{page_limit}")
}

fn item_line(short_form: &str, comment: Option<&str>) -> String {
    format!("`{short_form}`\n{}", comment.unwrap_or(NO_INFORMATION))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Instant};

    use docso_docs::{Document, Function, TypeDoc};

    use super::*;

    fn state(subject: SubjectKind, document: Document) -> PaginationState {
        PaginationState::new(subject, Arc::new(document), 7, 9, Instant::now())
    }

    #[test]
    fn renders_signature_and_first_comment() {
        let document = Document {
            package: "strings".to_owned(),
            functions: vec![
                Function {
                    name: "Contains".to_owned(),
                    signature: "func Contains(s, substr string) bool".to_owned(),
                    comments: vec![
                        "Contains reports whether substr is within s.".to_owned(),
                        "second line".to_owned(),
                    ],
                    ..Function::default()
                },
                Function {
                    name: "Fields".to_owned(),
                    signature: "func Fields(s string) []string".to_owned(),
                    ..Function::default()
                },
            ],
            ..Document::default()
        };

        let page = render_page(&state(SubjectKind::Functions, document));

        assert_eq!(page.title, "strings functions");
        assert_eq!(page.page_indicator, "Page 1/1");
        assert_eq!(
            page.description,
            "`func Contains(s, substr string) bool`\nContains reports whether substr is within s.\n\n\
             `func Fields(s string) []string`\n*no information*"
        );
    }

    #[test]
    fn types_render_by_name() {
        let document = Document {
            package: "strings".to_owned(),
            types: vec![TypeDoc {
                name: "Builder".to_owned(),
                signature: "type Builder struct {\n\t// contains filtered or unexported fields\n}"
                    .to_owned(),
                comments: vec!["A Builder is used to efficiently build a string.".to_owned()],
            }],
            ..Document::default()
        };

        let page = render_page(&state(SubjectKind::Types, document));

        assert_eq!(page.title, "strings types");
        assert!(page.description.starts_with("`type Builder`\nA Builder"));
    }

    #[test]
    fn empty_collections_render_a_placeholder() {
        let document = Document {
            package: "unsafe".to_owned(),
            ..Document::default()
        };

        let page = render_page(&state(SubjectKind::Types, document));

        assert_eq!(page.description, "*no types documented*");
        assert_eq!(page.page_indicator, "Page 1/1");
    }

    #[test]
    fn embed_carries_the_indicator_in_the_footer() {
        let document = Document {
            package: "errors".to_owned(),
            ..Document::default()
        };
        let embed = render_page(&state(SubjectKind::Functions, document))
            .to_embed()
            .unwrap();

        assert_eq!(embed.title.as_deref(), Some("errors functions"));
        assert_eq!(embed.footer.map(|footer| footer.text), Some("Page 1/1".to_owned()));
    }
}
