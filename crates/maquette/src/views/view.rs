//! View types and their population operations.
//!
//! Each concrete view wraps the shared [`View`] state (key, description,
//! paper size, automatic layout, and the included element/relationship
//! views) and adds the population operations that make sense for its scope.
//! The concrete types deref to [`View`] for the shared surface.
//!
//! Population never invents relationships: after any change to the included
//! elements, a view includes exactly the model relationships whose two
//! endpoints are both present.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use maquette_core::{
    identifier::{ElementId, RelationshipId},
    model::{ElementKind, ElementRef, Model},
};

use crate::views::paper::{AutomaticLayout, PaperSize};

/// The placement of one element within a view.
///
/// Coordinates are absent until layout information is supplied, either by a
/// diagramming tool editing the workspace file or by
/// [`Workspace::copy_layout_information_from`](crate::Workspace::copy_layout_information_from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementView {
    id: ElementId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    y: Option<i64>,
}

impl ElementView {
    fn new(id: ElementId) -> Self {
        Self { id, x: None, y: None }
    }

    /// Get the element's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the x coordinate, if positioned.
    pub fn x(&self) -> Option<i64> {
        self.x
    }

    /// Get the y coordinate, if positioned.
    pub fn y(&self) -> Option<i64> {
        self.y
    }

    pub(crate) fn set_position(&mut self, x: i64, y: i64) {
        self.x = Some(x);
        self.y = Some(y);
    }
}

/// A point on a relationship's path through a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    x: i64,
    y: i64,
}

impl Vertex {
    /// Creates a vertex.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Get the x coordinate.
    pub fn x(self) -> i64 {
        self.x
    }

    /// Get the y coordinate.
    pub fn y(self) -> i64 {
        self.y
    }
}

/// The routing of one relationship within a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipView {
    id: RelationshipId,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    vertices: Vec<Vertex>,
}

impl RelationshipView {
    fn new(id: RelationshipId) -> Self {
        Self {
            id,
            vertices: Vec::new(),
        }
    }

    /// Get the relationship's identifier.
    pub fn id(&self) -> RelationshipId {
        self.id
    }

    /// Borrow the routing vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn set_vertices(&mut self, vertices: Vec<Vertex>) {
        self.vertices = vertices;
    }
}

/// State shared by every view kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    key: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    paper_size: Option<PaperSize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    automatic_layout: Option<AutomaticLayout>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    elements: Vec<ElementView>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    relationships: Vec<RelationshipView>,
}

impl View {
    fn new(key: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            paper_size: None,
            automatic_layout: None,
            elements: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Get the view's unique key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the view's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the paper size, if set.
    pub fn paper_size(&self) -> Option<PaperSize> {
        self.paper_size
    }

    /// Sets the paper size.
    pub fn set_paper_size(&mut self, paper_size: PaperSize) {
        self.paper_size = Some(paper_size);
    }

    /// Get the automatic layout settings, if enabled.
    pub fn automatic_layout(&self) -> Option<&AutomaticLayout> {
        self.automatic_layout.as_ref()
    }

    /// Enables automatic layout with default settings.
    pub fn enable_automatic_layout(&mut self) {
        self.automatic_layout = Some(AutomaticLayout::default());
    }

    /// Enables automatic layout with explicit settings.
    pub fn enable_automatic_layout_with(&mut self, layout: AutomaticLayout) {
        self.automatic_layout = Some(layout);
    }

    /// Borrow the included element views.
    pub fn elements(&self) -> &[ElementView] {
        &self.elements
    }

    /// Borrow the included relationship views.
    pub fn relationships(&self) -> &[RelationshipView] {
        &self.relationships
    }

    /// Returns `true` if the element is included in this view.
    pub fn contains_element(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    /// Look up the element view for an element.
    pub fn element_view(&self, id: ElementId) -> Option<&ElementView> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Look up the relationship view for a relationship.
    pub fn relationship_view(&self, id: RelationshipId) -> Option<&RelationshipView> {
        self.relationships.iter().find(|r| r.id() == id)
    }

    /// Positions an element within the view.
    ///
    /// Returns `false` if the element is not included in the view.
    pub fn set_element_position(&mut self, id: ElementId, x: i64, y: i64) -> bool {
        match self.elements.iter_mut().find(|e| e.id() == id) {
            Some(element) => {
                element.set_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Sets the routing vertices of a relationship within the view.
    ///
    /// Returns `false` if the relationship is not included in the view.
    pub fn set_relationship_vertices(&mut self, id: RelationshipId, vertices: Vec<Vertex>) -> bool {
        match self.relationships.iter_mut().find(|r| r.id() == id) {
            Some(relationship) => {
                relationship.set_vertices(vertices);
                true
            }
            None => false,
        }
    }

    pub(crate) fn element_views_mut(&mut self) -> impl Iterator<Item = &mut ElementView> {
        self.elements.iter_mut()
    }

    pub(crate) fn relationship_views_mut(&mut self) -> impl Iterator<Item = &mut RelationshipView> {
        self.relationships.iter_mut()
    }

    fn add_element(&mut self, id: ElementId) {
        if !self.contains_element(id) {
            self.elements.push(ElementView::new(id));
        }
    }

    // A view includes exactly the model relationships with both endpoints
    // present; called after every change to the included elements.
    fn include_relationships(&mut self, model: &Model) {
        for relationship in model.relationships() {
            let included = self.contains_element(relationship.source_id())
                && self.contains_element(relationship.destination_id());
            if included && self.relationship_view(relationship.id()).is_none() {
                self.relationships.push(RelationshipView::new(relationship.id()));
            }
        }
    }
}

/// A view of every person and software system in the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemLandscapeView {
    #[serde(flatten)]
    view: View,
}

impl SystemLandscapeView {
    pub(crate) fn new(key: &str, description: &str) -> Self {
        Self {
            view: View::new(key, description),
        }
    }

    /// Includes every person and software system in the model.
    pub fn add_all_elements(&mut self, model: &Model) {
        for person in model.people() {
            self.view.add_element(person.id());
        }
        for system in model.software_systems() {
            self.view.add_element(system.id());
        }
        self.view.include_relationships(model);
    }
}

impl Deref for SystemLandscapeView {
    type Target = View;

    fn deref(&self) -> &View {
        &self.view
    }
}

impl DerefMut for SystemLandscapeView {
    fn deref_mut(&mut self) -> &mut View {
        &mut self.view
    }
}

/// A view of one software system and the people and systems around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContextView {
    software_system_id: ElementId,
    #[serde(flatten)]
    view: View,
}

impl SystemContextView {
    pub(crate) fn new(software_system_id: ElementId, key: &str, description: &str) -> Self {
        Self {
            software_system_id,
            view: View::new(key, description),
        }
    }

    /// Get the identifier of the software system this view is scoped to.
    pub fn software_system_id(&self) -> ElementId {
        self.software_system_id
    }

    /// Includes every software system in the model.
    pub fn add_all_software_systems(&mut self, model: &Model) {
        for system in model.software_systems() {
            self.view.add_element(system.id());
        }
        self.view.include_relationships(model);
    }

    /// Includes every person in the model.
    pub fn add_all_people(&mut self, model: &Model) {
        for person in model.people() {
            self.view.add_element(person.id());
        }
        self.view.include_relationships(model);
    }

    /// Includes the subject system plus the people and software systems it
    /// has a direct relationship with, in either direction.
    pub fn add_default_elements(&mut self, model: &Model) {
        self.view.add_element(self.software_system_id);
        for relationship in model.relationships() {
            let neighbour = if relationship.source_id() == self.software_system_id {
                relationship.destination_id()
            } else if relationship.destination_id() == self.software_system_id {
                relationship.source_id()
            } else {
                continue;
            };
            if is_top_level(model, neighbour) {
                self.view.add_element(neighbour);
            }
        }
        self.view.include_relationships(model);
    }
}

impl Deref for SystemContextView {
    type Target = View;

    fn deref(&self) -> &View {
        &self.view
    }
}

impl DerefMut for SystemContextView {
    fn deref_mut(&mut self) -> &mut View {
        &mut self.view
    }
}

/// A view of the containers inside one software system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerView {
    software_system_id: ElementId,
    #[serde(flatten)]
    view: View,
}

impl ContainerView {
    pub(crate) fn new(software_system_id: ElementId, key: &str, description: &str) -> Self {
        Self {
            software_system_id,
            view: View::new(key, description),
        }
    }

    /// Get the identifier of the software system this view is scoped to.
    pub fn software_system_id(&self) -> ElementId {
        self.software_system_id
    }

    /// Includes every container of the subject software system.
    pub fn add_all_containers(&mut self, model: &Model) {
        for container in self.subject_containers(model) {
            self.view.add_element(container);
        }
        self.view.include_relationships(model);
    }

    /// Includes the subject's containers plus the people and other software
    /// systems with a direct relationship to any of them.
    pub fn add_default_elements(&mut self, model: &Model) {
        let containers = self.subject_containers(model);
        for container in &containers {
            self.view.add_element(*container);
        }
        for relationship in model.relationships() {
            let outside = if containers.contains(&relationship.destination_id()) {
                relationship.source_id()
            } else if containers.contains(&relationship.source_id()) {
                relationship.destination_id()
            } else {
                continue;
            };
            if outside != self.software_system_id && is_top_level(model, outside) {
                self.view.add_element(outside);
            }
        }
        self.view.include_relationships(model);
    }

    fn subject_containers(&self, model: &Model) -> Vec<ElementId> {
        model
            .software_systems()
            .iter()
            .find(|s| s.id() == self.software_system_id)
            .map(|s| s.containers().iter().map(|c| c.id()).collect())
            .unwrap_or_default()
    }
}

impl Deref for ContainerView {
    type Target = View;

    fn deref(&self) -> &View {
        &self.view
    }
}

impl DerefMut for ContainerView {
    fn deref_mut(&mut self) -> &mut View {
        &mut self.view
    }
}

/// A view of the components inside one container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    container_id: ElementId,
    #[serde(flatten)]
    view: View,
}

impl ComponentView {
    pub(crate) fn new(container_id: ElementId, key: &str, description: &str) -> Self {
        Self {
            container_id,
            view: View::new(key, description),
        }
    }

    /// Get the identifier of the container this view is scoped to.
    pub fn container_id(&self) -> ElementId {
        self.container_id
    }

    /// Includes every component of the subject container.
    pub fn add_all_components(&mut self, model: &Model) {
        if let Some(ElementRef::Container(container)) = model.element(self.container_id) {
            let components: Vec<ElementId> =
                container.components().iter().map(|c| c.id()).collect();
            for component in components {
                self.view.add_element(component);
            }
        }
        self.view.include_relationships(model);
    }
}

impl Deref for ComponentView {
    type Target = View;

    fn deref(&self) -> &View {
        &self.view
    }
}

impl DerefMut for ComponentView {
    fn deref_mut(&mut self) -> &mut View {
        &mut self.view
    }
}

fn is_top_level(model: &Model, id: ElementId) -> bool {
    matches!(
        model.element(id).map(|e| e.kind()),
        Some(ElementKind::Person) | Some(ElementKind::SoftwareSystem)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> (Model, ElementId, ElementId, ElementId, ElementId, ElementId) {
        let mut model = Model::new();
        let user = model.add_person("User", "").unwrap();
        let system = model.add_software_system("Billing", "").unwrap();
        let other = model.add_software_system("Ledger", "").unwrap();
        let api = model.add_container(system, "API", "").unwrap();
        let controller = model.add_component(api, "Controller", "", "Rust").unwrap();
        let repository = model.add_component(api, "Repository", "", "Rust").unwrap();
        model.add_relationship(controller, repository, "Reads data through").unwrap();
        model.add_relationship(user, system, "Uses").unwrap();
        model.add_relationship(system, other, "Posts entries to").unwrap();
        (model, user, system, other, api, controller)
    }

    #[test]
    fn landscape_views_include_people_and_systems_only() {
        let (model, user, system, other, api, _) = sample_model();
        let mut view = SystemLandscapeView::new("landscape", "");
        view.add_all_elements(&model);

        assert!(view.contains_element(user));
        assert!(view.contains_element(system));
        assert!(view.contains_element(other));
        assert!(!view.contains_element(api));
        // user->system and system->other are visible, the component
        // relationship is not.
        assert_eq!(view.relationships().len(), 2);
    }

    #[test]
    fn population_is_idempotent() {
        let (model, ..) = sample_model();
        let mut view = SystemLandscapeView::new("landscape", "");
        view.add_all_elements(&model);
        let elements = view.elements().len();
        let relationships = view.relationships().len();

        view.add_all_elements(&model);
        assert_eq!(view.elements().len(), elements);
        assert_eq!(view.relationships().len(), relationships);
    }

    #[test]
    fn context_default_elements_are_the_subject_and_its_neighbours() {
        let (model, user, system, other, _, _) = sample_model();
        let mut view = SystemContextView::new(system, "context", "");
        view.add_default_elements(&model);

        assert!(view.contains_element(system));
        assert!(view.contains_element(user));
        assert!(view.contains_element(other));
        assert_eq!(view.elements().len(), 3);
    }

    #[test]
    fn context_default_elements_skip_unrelated_elements() {
        let (mut model, _, system, _, _, _) = sample_model();
        let stranger = model.add_person("Stranger", "").unwrap();

        let mut view = SystemContextView::new(system, "context", "");
        view.add_default_elements(&model);
        assert!(!view.contains_element(stranger));
    }

    #[test]
    fn container_views_show_the_subjects_containers() {
        let (model, _, system, _, api, controller) = sample_model();
        let mut view = ContainerView::new(system, "containers", "");
        view.add_all_containers(&model);

        assert!(view.contains_element(api));
        assert!(!view.contains_element(controller));
        assert!(!view.contains_element(system));
    }

    #[test]
    fn container_default_elements_pull_in_external_neighbours() {
        let (mut model, user, system, _, api, _) = sample_model();
        model.add_relationship_with(
            user,
            api,
            "Submits invoices through",
            Some("HTTP"),
            maquette_core::model::InteractionStyle::Asynchronous,
        )
        .unwrap();

        let mut view = ContainerView::new(system, "containers", "");
        view.add_default_elements(&model);

        assert!(view.contains_element(api));
        assert!(view.contains_element(user));
        assert!(!view.contains_element(system));
        // The user->api relationship is drawable, both endpoints present.
        assert_eq!(view.relationships().len(), 1);
    }

    #[test]
    fn component_views_show_the_subjects_components() {
        let (model, _, _, _, api, controller) = sample_model();
        let mut view = ComponentView::new(api, "components", "");
        view.add_all_components(&model);

        assert!(view.contains_element(controller));
        assert_eq!(view.elements().len(), 2);
        assert_eq!(view.relationships().len(), 1);
    }

    #[test]
    fn automatic_layout_settings_can_be_explicit() {
        use crate::views::paper::{AutomaticLayout, RankDirection};

        let mut view = SystemLandscapeView::new("landscape", "");
        assert!(view.automatic_layout().is_none());

        view.enable_automatic_layout_with(AutomaticLayout::new(
            RankDirection::LeftRight,
            600,
            300,
            0,
        ));
        let layout = view.automatic_layout().unwrap();
        assert_eq!(layout.rank_direction(), RankDirection::LeftRight);
        assert_eq!(layout.rank_separation(), 600);
    }

    #[test]
    fn positions_only_apply_to_included_elements() {
        let (model, user, system, ..) = sample_model();
        let mut view = SystemContextView::new(system, "context", "");
        view.add_default_elements(&model);

        assert!(view.set_element_position(user, 100, 200));
        let element = view.element_view(user).unwrap();
        assert_eq!((element.x(), element.y()), (Some(100), Some(200)));

        let ghost = "99".parse().unwrap();
        assert!(!view.set_element_position(ghost, 0, 0));
    }

    #[test]
    fn views_serialize_flattened() {
        let (model, _, system, ..) = sample_model();
        let mut view = SystemContextView::new(system, "context", "the context");
        view.add_default_elements(&model);
        view.set_paper_size(PaperSize::A5Landscape);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["key"], "context");
        assert_eq!(json["softwareSystemId"], "2");
        assert_eq!(json["paperSize"], "A5_Landscape");
        assert!(json["elements"].is_array());
    }
}
