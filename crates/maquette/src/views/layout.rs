//! Layout merging between workspace generations.
//!
//! A regenerated workspace allocates fresh ids, so saved coordinates cannot
//! be matched by id. Matching goes through canonical names instead: an
//! element keeps its saved position as long as its canonical name resolves in
//! both models, and a relationship keeps its routing as long as both endpoint
//! canonical names and its description match.

use log::{debug, trace};

use maquette_core::model::{Model, Relationship};

use crate::views::view::{RelationshipView, View};

/// Copies element positions and relationship routing from `source` into
/// `target`.
///
/// Elements new to `target` keep no position; saved positions for elements
/// that no longer resolve are dropped with the old view. Paper size and
/// automatic layout settings are never copied.
pub(crate) fn copy_view_layout(
    target: &mut View,
    target_model: &Model,
    source: &View,
    source_model: &Model,
) {
    let mut copied = 0usize;
    for element_view in target.element_views_mut() {
        let Some(canonical) = target_model.canonical_name(element_view.id()) else {
            continue;
        };
        let Some(source_id) = source_model.find_by_canonical_name(&canonical) else {
            trace!(element = canonical.as_str(); "No saved layout for element");
            continue;
        };
        let Some(saved) = source.element_view(source_id) else {
            continue;
        };
        if let (Some(x), Some(y)) = (saved.x(), saved.y()) {
            element_view.set_position(x, y);
            copied += 1;
        }
    }

    for relationship_view in target.relationship_views_mut() {
        let Some(relationship) = target_model.relationship(relationship_view.id()) else {
            continue;
        };
        let Some(saved) = find_saved_relationship(relationship, target_model, source, source_model)
        else {
            continue;
        };
        if !saved.vertices().is_empty() {
            relationship_view.set_vertices(saved.vertices().to_vec());
            copied += 1;
        }
    }

    debug!(key = target.key(), copied = copied; "Copied layout information into view");
}

fn find_saved_relationship<'a>(
    relationship: &Relationship,
    target_model: &Model,
    source: &'a View,
    source_model: &Model,
) -> Option<&'a RelationshipView> {
    let source_name = target_model.canonical_name(relationship.source_id())?;
    let destination_name = target_model.canonical_name(relationship.destination_id())?;

    let saved = source_model.relationships().iter().find(|r| {
        r.description() == relationship.description()
            && source_model.canonical_name(r.source_id()).as_deref() == Some(source_name.as_str())
            && source_model.canonical_name(r.destination_id()).as_deref()
                == Some(destination_name.as_str())
    })?;
    source.relationship_view(saved.id())
}
