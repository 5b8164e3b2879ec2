//! Parsed article page and the CSS queries run against it.

use crate::config::SelectorConfig;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// A configured selector that failed to parse.
#[derive(Debug, Error)]
#[error("invalid {name} selector {selector:?}: {reason}")]
pub struct SelectorError {
    pub name: &'static str,
    pub selector: String,
    pub reason: String,
}

/// Compiled form of [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct Selectors {
    snippets: Selector,
    label: Selector,
    body: Selector,
    title: Selector,
}

impl Selectors {
    pub fn compile(cfg: &SelectorConfig) -> Result<Self, SelectorError> {
        Ok(Self {
            snippets: compile_one("snippets", &cfg.snippets)?,
            label: compile_one("label", &cfg.label)?,
            body: compile_one("body", &cfg.body)?,
            title: compile_one("title", &cfg.title)?,
        })
    }
}

fn compile_one(name: &'static str, selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|e| SelectorError {
        name,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// One code frame in the article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Label text as rendered, untrimmed.
    pub label: String,
    /// Whether the frame has a label element at all (it may still be blank).
    pub has_label: bool,
    /// Snippet text.
    pub body: String,
}

/// The fetched page. Queried, never mutated.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Text of every title element, concatenated.
    pub fn title(&self, selectors: &Selectors) -> String {
        self.html
            .select(&selectors.title)
            .flat_map(|el| el.text())
            .collect()
    }

    /// All snippet frames in document order.
    pub fn candidates(&self, selectors: &Selectors) -> Vec<Candidate> {
        self.html
            .select(&selectors.snippets)
            .map(|frame| Candidate {
                label: text_within(frame, &selectors.label),
                has_label: frame.select(&selectors.label).next().is_some(),
                body: text_within(frame, &selectors.body),
            })
            .collect()
    }
}

fn text_within(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector).flat_map(|m| m.text()).collect()
}
