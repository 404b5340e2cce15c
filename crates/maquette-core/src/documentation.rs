//! Documentation sections and architecture decision records.
//!
//! A workspace carries narrative documentation (ordered sections, optionally
//! scoped to an element) and a log of architecture decisions. Content is
//! stored verbatim in the declared [`Format`]; rendering is a consumer's
//! concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifier::ElementId;

/// Markup format of documentation content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    #[default]
    Markdown,
    AsciiDoc,
}

/// Lifecycle status of an architecture decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    Proposed,
    Accepted,
    Superseded,
    Deprecated,
    Rejected,
}

/// A section of narrative documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    element_id: Option<ElementId>,
    title: String,
    order: u32,
    format: Format,
    content: String,
}

impl Section {
    /// Get the element this section documents, if scoped.
    pub fn element_id(&self) -> Option<ElementId> {
        self.element_id
    }

    /// Get the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the section's position in the document, starting at 1.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the markup format of the content.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Get the section content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A dated architecture decision record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: String,
    date: DateTime<Utc>,
    title: String,
    status: DecisionStatus,
    format: Format,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    element_id: Option<ElementId>,
}

impl Decision {
    /// Get the decision's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the date the decision was taken.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Get the decision title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the decision's lifecycle status.
    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    /// Get the markup format of the content.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Get the decision content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the element this decision is scoped to, if any.
    pub fn element_id(&self) -> Option<ElementId> {
        self.element_id
    }
}

/// Errors raised by documentation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentationError {
    #[error("a section titled `{0}` already exists for this element")]
    DuplicateSection(String),

    #[error("a decision with id `{0}` already exists")]
    DuplicateDecision(String),
}

/// The documentation attached to a workspace.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use maquette_core::documentation::{DecisionStatus, Documentation, Format};
///
/// let mut docs = Documentation::new();
/// docs.add_section(None, "Overview", Format::Markdown, "# Overview").unwrap();
/// docs.add_decision("1", Utc::now(), "Record decisions", DecisionStatus::Accepted,
///     Format::Markdown, "We will record architecture decisions.").unwrap();
///
/// assert_eq!(docs.sections().len(), 1);
/// assert_eq!(docs.decisions().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    sections: Vec<Section>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    decisions: Vec<Decision>,
}

impl Documentation {
    /// Creates empty documentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a documentation section, optionally scoped to an element.
    ///
    /// The section's order is assigned automatically, starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::DuplicateSection`] if a section with the
    /// same title already exists for the same element scope.
    pub fn add_section(
        &mut self,
        element_id: Option<ElementId>,
        title: &str,
        format: Format,
        content: &str,
    ) -> Result<&Section, DocumentationError> {
        let duplicate = self
            .sections
            .iter()
            .any(|s| s.element_id == element_id && s.title == title);
        if duplicate {
            return Err(DocumentationError::DuplicateSection(title.to_string()));
        }

        let order = self.sections.iter().map(|s| s.order).max().unwrap_or(0) + 1;
        self.sections.push(Section {
            element_id,
            title: title.to_string(),
            order,
            format,
            content: content.to_string(),
        });
        Ok(self.sections.last().expect("section was just pushed"))
    }

    /// Adds a "Context" section for an element.
    ///
    /// This is the conventional opening section describing an element and
    /// its environment.
    pub fn add_context_section(
        &mut self,
        element_id: ElementId,
        format: Format,
        content: &str,
    ) -> Result<&Section, DocumentationError> {
        self.add_section(Some(element_id), "Context", format, content)
    }

    /// Records a workspace-level architecture decision.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::DuplicateDecision`] if a decision with
    /// this id already exists.
    pub fn add_decision(
        &mut self,
        id: &str,
        date: DateTime<Utc>,
        title: &str,
        status: DecisionStatus,
        format: Format,
        content: &str,
    ) -> Result<&Decision, DocumentationError> {
        self.push_decision(None, id, date, title, status, format, content)
    }

    /// Records an architecture decision scoped to an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentationError::DuplicateDecision`] if a decision with
    /// this id already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn add_decision_for(
        &mut self,
        element_id: ElementId,
        id: &str,
        date: DateTime<Utc>,
        title: &str,
        status: DecisionStatus,
        format: Format,
        content: &str,
    ) -> Result<&Decision, DocumentationError> {
        self.push_decision(Some(element_id), id, date, title, status, format, content)
    }

    /// Borrow the documentation sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Borrow the recorded decisions in insertion order.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Returns `true` if there are no sections and no decisions.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.decisions.is_empty()
    }

    #[allow(clippy::too_many_arguments)]
    fn push_decision(
        &mut self,
        element_id: Option<ElementId>,
        id: &str,
        date: DateTime<Utc>,
        title: &str,
        status: DecisionStatus,
        format: Format,
        content: &str,
    ) -> Result<&Decision, DocumentationError> {
        if self.decisions.iter().any(|d| d.id == id) {
            return Err(DocumentationError::DuplicateDecision(id.to_string()));
        }
        self.decisions.push(Decision {
            id: id.to_string(),
            date,
            title: title.to_string(),
            status,
            format,
            content: content.to_string(),
            element_id,
        });
        Ok(self.decisions.last().expect("decision was just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_assigned_sequentially() {
        let mut docs = Documentation::new();
        let first = docs
            .add_section(None, "Overview", Format::Markdown, "")
            .unwrap()
            .order();
        let second = docs
            .add_section(None, "Deployment", Format::Markdown, "")
            .unwrap()
            .order();
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn duplicate_section_titles_are_scoped_to_the_element() {
        let mut docs = Documentation::new();
        let element = "7".parse().unwrap();

        docs.add_section(None, "Context", Format::Markdown, "").unwrap();
        // Same title scoped to an element is a different section.
        docs.add_context_section(element, Format::Markdown, "").unwrap();

        assert_eq!(
            docs.add_section(None, "Context", Format::Markdown, "").unwrap_err(),
            DocumentationError::DuplicateSection("Context".to_string())
        );
        assert_eq!(
            docs.add_context_section(element, Format::Markdown, "").unwrap_err(),
            DocumentationError::DuplicateSection("Context".to_string())
        );
    }

    #[test]
    fn duplicate_decision_ids_are_rejected() {
        let mut docs = Documentation::new();
        let date = Utc::now();

        docs.add_decision("1", date, "First", DecisionStatus::Accepted, Format::Markdown, "")
            .unwrap();
        let err = docs
            .add_decision("1", date, "Second", DecisionStatus::Rejected, Format::Markdown, "")
            .unwrap_err();
        assert_eq!(err, DocumentationError::DuplicateDecision("1".to_string()));
    }

    #[test]
    fn decisions_keep_their_scope_and_status() {
        let mut docs = Documentation::new();
        let element = "3".parse().unwrap();
        let date = Utc::now();

        docs.add_decision("1", date, "Global", DecisionStatus::Accepted, Format::Markdown, "x")
            .unwrap();
        docs.add_decision_for(element, "2", date, "Scoped", DecisionStatus::Rejected, Format::Markdown, "y")
            .unwrap();

        let scoped = &docs.decisions()[1];
        assert_eq!(scoped.element_id(), Some(element));
        assert_eq!(scoped.status(), DecisionStatus::Rejected);
        assert_eq!(docs.decisions()[0].element_id(), None);
    }

    #[test]
    fn documentation_roundtrips_through_json() {
        let mut docs = Documentation::new();
        docs.add_section(None, "Overview", Format::Markdown, "# Hello").unwrap();
        docs.add_decision("1", Utc::now(), "Use Rust", DecisionStatus::Accepted, Format::Markdown, "")
            .unwrap();

        let json = serde_json::to_string(&docs).unwrap();
        let back: Documentation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sections().len(), 1);
        assert_eq!(back.decisions().len(), 1);
        assert_eq!(back.sections()[0].content(), "# Hello");
    }
}
