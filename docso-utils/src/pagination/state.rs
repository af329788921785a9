//! Per-message pagination cursor.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use docso_docs::Document;

use super::PAGE_SIZE;
use super::page::total_pages;

/// Which collection of a document a session browses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SubjectKind {
    Functions,
    Types,
}

impl SubjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Functions => "functions",
            Self::Types => "types",
        }
    }

    pub fn item_count(self, document: &Document) -> usize {
        match self {
            Self::Functions => document.functions.len(),
            Self::Types => document.types.len(),
        }
    }
}

/// A navigation request carried by a control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavAction {
    Prev,
    Next,
    Destroy,
}

/// Live cursor for one paginated message.
#[derive(Clone, Debug)]
pub struct PaginationState {
    subject: SubjectKind,
    document: Arc<Document>,
    current_page: usize,
    page_limit: usize,
    owner_id: u64,
    channel_id: u64,
    last_activity: Instant,
}

impl PaginationState {
    pub fn new(
        subject: SubjectKind,
        document: Arc<Document>,
        owner_id: u64,
        channel_id: u64,
        now: Instant,
    ) -> Self {
        let page_limit = total_pages(subject.item_count(&document), PAGE_SIZE);

        Self {
            subject,
            document,
            current_page: 1,
            page_limit,
            owner_id,
            channel_id,
            last_activity: now,
        }
    }

    pub fn subject(&self) -> SubjectKind {
        self.subject
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_limit(&self) -> usize {
        self.page_limit
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn channel_id(&self) -> u64 {
        self.channel_id
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn is_idle(&self, now: Instant, threshold: Duration) -> bool {
        now.saturating_duration_since(self.last_activity) >= threshold
    }

    /// Move one page in the requested direction, saturating at both ends.
    ///
    /// Returns whether the page changed; activity is refreshed only then.
    pub(crate) fn step(&mut self, action: NavAction, now: Instant) -> bool {
        let target = match action {
            NavAction::Next if self.current_page < self.page_limit => self.current_page + 1,
            NavAction::Prev if self.current_page > 1 => self.current_page - 1,
            _ => return false,
        };

        self.current_page = target;
        self.last_activity = now;
        true
    }
}
