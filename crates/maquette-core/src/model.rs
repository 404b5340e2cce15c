//! The architecture model: an element graph with enforced naming invariants.
//!
//! This module contains [`Model`], the registry of people, software systems,
//! containers, components, and the relationships between them. The model
//! allocates every identifier from a single sequence and guarantees:
//!
//! - names are unique within their scope (people and software systems share
//!   the top-level scope; containers are scoped to their system, components
//!   to their container)
//! - relationship endpoints exist and differ
//! - every element and relationship carries its built-in tags
//!
//! Identity across regenerations of a workspace is established through
//! canonical names (see [`Model::canonical_name`]), never through raw ids.

mod element;

pub use element::{
    Component, Container, ElementKind, ElementRef, InteractionStyle, Person, Relationship,
    SoftwareSystem,
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identifier::{ElementId, RelationshipId};

/// Errors raised by model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("element names must not be blank")]
    BlankName,

    #[error("an element named `{0}` already exists in this scope")]
    DuplicateName(String),

    #[error("unknown element id `{0}`")]
    UnknownElement(ElementId),

    #[error("element `{id}` is a {actual}, expected a {expected}")]
    UnexpectedKind {
        id: ElementId,
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("a {0} does not carry a technology")]
    TechnologyNotSupported(ElementKind),

    #[error("a relationship cannot connect `{0}` to itself")]
    SelfRelationship(ElementId),

    #[error("a relationship from `{source_id}` to `{destination}` described `{description}` already exists")]
    DuplicateRelationship {
        source_id: ElementId,
        destination: ElementId,
        description: String,
    },
}

/// The element graph of an architecture workspace.
///
/// # Examples
///
/// ```
/// use maquette_core::model::{InteractionStyle, Model};
///
/// let mut model = Model::new();
/// let user = model.add_person("User", "Uses the system").unwrap();
/// let system = model.add_software_system("Billing", "Issues invoices").unwrap();
/// let api = model.add_container(system, "API", "Public HTTP API").unwrap();
/// model.set_technology(api, "Rust").unwrap();
///
/// model
///     .add_relationship_with(user, api, "Submits invoices", Some("HTTP"), InteractionStyle::Asynchronous)
///     .unwrap();
///
/// assert_eq!(model.canonical_name(api).as_deref(), Some("/Billing/API"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    people: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    software_systems: Vec<SoftwareSystem>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    relationships: Vec<Relationship>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person to the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a person or software system
    /// with the same name already exists, or [`ModelError::BlankName`] for a
    /// blank name.
    pub fn add_person(&mut self, name: &str, description: &str) -> Result<ElementId, ModelError> {
        self.check_top_level_name(name)?;
        let id = self.allocate_element_id();
        self.people.push(Person::new(id, name, description));
        debug!(id = id.to_string(), name = name; "Added person to model");
        Ok(id)
    }

    /// Adds a software system to the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateName`] if a person or software system
    /// with the same name already exists, or [`ModelError::BlankName`] for a
    /// blank name.
    pub fn add_software_system(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<ElementId, ModelError> {
        self.check_top_level_name(name)?;
        let id = self.allocate_element_id();
        self.software_systems
            .push(SoftwareSystem::new(id, name, description));
        debug!(id = id.to_string(), name = name; "Added software system to model");
        Ok(id)
    }

    /// Adds a container to a software system.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if `software_system` is not in
    /// the model, [`ModelError::UnexpectedKind`] if it is not a software
    /// system, and [`ModelError::DuplicateName`] if the system already owns a
    /// container with this name.
    pub fn add_container(
        &mut self,
        software_system: ElementId,
        name: &str,
        description: &str,
    ) -> Result<ElementId, ModelError> {
        check_name(name)?;
        // Existence and duplicate checks happen before the id is allocated so
        // a failed add leaves the sequence untouched.
        let system = self
            .software_systems
            .iter()
            .find(|s| s.id() == software_system)
            .ok_or_else(|| self.unknown_or_unexpected(software_system, ElementKind::SoftwareSystem))?;
        if system.containers().iter().any(|c| c.name() == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }

        let id = self.allocate_element_id();
        let system = self
            .software_systems
            .iter_mut()
            .find(|s| s.id() == software_system)
            .expect("software system was found above");
        system.containers_mut().push(Container::new(id, name, description));
        debug!(id = id.to_string(), name = name; "Added container to model");
        Ok(id)
    }

    /// Adds a component to a container.
    ///
    /// An empty `technology` string leaves the component's technology unset.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if `container` is not in the
    /// model, [`ModelError::UnexpectedKind`] if it is not a container, and
    /// [`ModelError::DuplicateName`] if the container already owns a
    /// component with this name.
    pub fn add_component(
        &mut self,
        container: ElementId,
        name: &str,
        description: &str,
        technology: &str,
    ) -> Result<ElementId, ModelError> {
        check_name(name)?;
        let found = self
            .containers()
            .find(|c| c.id() == container)
            .ok_or_else(|| self.unknown_or_unexpected(container, ElementKind::Container))?;
        if found.components().iter().any(|c| c.name() == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }

        let id = self.allocate_element_id();
        let found = self
            .containers_mut()
            .find(|c| c.id() == container)
            .expect("container was found above");
        found
            .components_mut()
            .push(Component::new(id, name, description, technology));
        debug!(id = id.to_string(), name = name; "Added component to model");
        Ok(id)
    }

    /// Sets the implementation technology of a container or component.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::TechnologyNotSupported`] for people and software
    /// systems, and [`ModelError::UnknownElement`] for ids not in the model.
    pub fn set_technology(
        &mut self,
        element: ElementId,
        technology: &str,
    ) -> Result<(), ModelError> {
        let kind = self
            .element(element)
            .ok_or(ModelError::UnknownElement(element))?
            .kind();
        match kind {
            ElementKind::Container => {
                let container = self
                    .containers_mut()
                    .find(|c| c.id() == element)
                    .expect("container kind was resolved above");
                container.set_technology(technology);
                Ok(())
            }
            ElementKind::Component => {
                let component = self
                    .components_mut()
                    .find(|c| c.id() == element)
                    .expect("component kind was resolved above");
                component.set_technology(technology);
                Ok(())
            }
            other => Err(ModelError::TechnologyNotSupported(other)),
        }
    }

    /// Adds a custom tag to an element.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if the element is not in the
    /// model.
    pub fn add_tag(&mut self, element: ElementId, tag: &str) -> Result<(), ModelError> {
        let kind = self
            .element(element)
            .ok_or(ModelError::UnknownElement(element))?
            .kind();
        match kind {
            ElementKind::Person => {
                let person = self
                    .people
                    .iter_mut()
                    .find(|p| p.id() == element)
                    .expect("person kind was resolved above");
                person.tags_mut().add(tag);
            }
            ElementKind::SoftwareSystem => {
                let system = self
                    .software_systems
                    .iter_mut()
                    .find(|s| s.id() == element)
                    .expect("software system kind was resolved above");
                system.tags_mut().add(tag);
            }
            ElementKind::Container => {
                let container = self
                    .containers_mut()
                    .find(|c| c.id() == element)
                    .expect("container kind was resolved above");
                container.tags_mut().add(tag);
            }
            ElementKind::Component => {
                let component = self
                    .components_mut()
                    .find(|c| c.id() == element)
                    .expect("component kind was resolved above");
                component.tags_mut().add(tag);
            }
        }
        Ok(())
    }

    /// Adds a synchronous relationship with no technology.
    ///
    /// See [`Model::add_relationship_with`] for the full form.
    pub fn add_relationship(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
    ) -> Result<RelationshipId, ModelError> {
        self.add_relationship_with(source, destination, description, None, InteractionStyle::default())
    }

    /// Adds a relationship between two elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownElement`] if either endpoint is not in
    /// the model, [`ModelError::SelfRelationship`] if the endpoints are
    /// equal, and [`ModelError::DuplicateRelationship`] if a relationship
    /// with the same endpoints and description already exists.
    pub fn add_relationship_with(
        &mut self,
        source: ElementId,
        destination: ElementId,
        description: &str,
        technology: Option<&str>,
        interaction_style: InteractionStyle,
    ) -> Result<RelationshipId, ModelError> {
        if self.element(source).is_none() {
            return Err(ModelError::UnknownElement(source));
        }
        if self.element(destination).is_none() {
            return Err(ModelError::UnknownElement(destination));
        }
        if source == destination {
            return Err(ModelError::SelfRelationship(source));
        }
        let duplicate = self.relationships.iter().any(|r| {
            r.source_id() == source
                && r.destination_id() == destination
                && r.description() == description
        });
        if duplicate {
            return Err(ModelError::DuplicateRelationship {
                source_id: source,
                destination,
                description: description.to_string(),
            });
        }

        let id = RelationshipId::from_raw(self.next_raw_id());
        self.relationships.push(Relationship::new(
            id,
            source,
            destination,
            description,
            technology,
            interaction_style,
        ));
        debug!(id = id.to_string(), source = source.to_string(), destination = destination.to_string(); "Added relationship to model");
        Ok(id)
    }

    /// Borrow the people in the model.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Borrow the software systems in the model.
    pub fn software_systems(&self) -> &[SoftwareSystem] {
        &self.software_systems
    }

    /// Borrow the relationships in the model.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Look up a relationship by id.
    pub fn relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id() == id)
    }

    /// Look up any element by id.
    pub fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.elements().find(|e| e.id() == id)
    }

    /// Iterate over every element in the model, depth-first.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        let people = self.people.iter().map(ElementRef::Person);
        let nested = self.software_systems.iter().flat_map(|system| {
            std::iter::once(ElementRef::SoftwareSystem(system)).chain(
                system.containers().iter().flat_map(|container| {
                    std::iter::once(ElementRef::Container(container)).chain(
                        container.components().iter().map(ElementRef::Component),
                    )
                }),
            )
        });
        people.chain(nested)
    }

    /// Find a software system by name.
    pub fn find_software_system(&self, name: &str) -> Option<&SoftwareSystem> {
        self.software_systems.iter().find(|s| s.name() == name)
    }

    /// Find a person by name.
    pub fn find_person(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name() == name)
    }

    /// Returns the canonical name of an element: its slash-joined path from
    /// the model root, e.g. `/Billing/API/Invoice Controller`.
    ///
    /// Canonical names identify elements stably across regenerations of a
    /// workspace, where raw ids do not.
    pub fn canonical_name(&self, id: ElementId) -> Option<String> {
        if let Some(person) = self.people.iter().find(|p| p.id() == id) {
            return Some(format!("/{}", person.name()));
        }
        for system in &self.software_systems {
            if system.id() == id {
                return Some(format!("/{}", system.name()));
            }
            for container in system.containers() {
                if container.id() == id {
                    return Some(format!("/{}/{}", system.name(), container.name()));
                }
                for component in container.components() {
                    if component.id() == id {
                        return Some(format!(
                            "/{}/{}/{}",
                            system.name(),
                            container.name(),
                            component.name()
                        ));
                    }
                }
            }
        }
        None
    }

    /// Resolves a canonical name produced by [`Model::canonical_name`] back
    /// to an element id.
    pub fn find_by_canonical_name(&self, canonical_name: &str) -> Option<ElementId> {
        let path = canonical_name.strip_prefix('/')?;
        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [name] => self
                .find_person(name)
                .map(Person::id)
                .or_else(|| self.find_software_system(name).map(SoftwareSystem::id)),
            [system, container] => self
                .find_software_system(system)?
                .containers()
                .iter()
                .find(|c| c.name() == *container)
                .map(Container::id),
            [system, container, component] => self
                .find_software_system(system)?
                .containers()
                .iter()
                .find(|c| c.name() == *container)?
                .components()
                .iter()
                .find(|c| c.name() == *component)
                .map(Component::id),
            _ => None,
        }
    }

    fn containers(&self) -> impl Iterator<Item = &Container> {
        self.software_systems
            .iter()
            .flat_map(|s| s.containers().iter())
    }

    fn containers_mut(&mut self) -> impl Iterator<Item = &mut Container> {
        self.software_systems
            .iter_mut()
            .flat_map(|s| s.containers_mut().iter_mut())
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.containers_mut()
            .flat_map(|c| c.components_mut().iter_mut())
    }

    fn check_top_level_name(&self, name: &str) -> Result<(), ModelError> {
        check_name(name)?;
        let taken = self.people.iter().any(|p| p.name() == name)
            || self.software_systems.iter().any(|s| s.name() == name);
        if taken {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn unknown_or_unexpected(&self, id: ElementId, expected: ElementKind) -> ModelError {
        match self.element(id) {
            Some(element) => ModelError::UnexpectedKind {
                id,
                expected,
                actual: element.kind(),
            },
            None => ModelError::UnknownElement(id),
        }
    }

    fn allocate_element_id(&self) -> ElementId {
        ElementId::from_raw(self.next_raw_id())
    }

    // Ids are never persisted as a counter; allocation always scans for the
    // highest id in use, so a deserialized model can be extended safely.
    fn next_raw_id(&self) -> u32 {
        let highest_element = self.elements().map(|e| e.id().raw()).max().unwrap_or(0);
        let highest_relationship = self
            .relationships
            .iter()
            .map(|r| r.id().raw())
            .max()
            .unwrap_or(0);
        highest_element.max(highest_relationship) + 1
    }
}

fn check_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::BlankName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    fn sample_model() -> (Model, ElementId, ElementId, ElementId) {
        let mut model = Model::new();
        let user = model.add_person("User", "A user").unwrap();
        let system = model.add_software_system("Billing", "Issues invoices").unwrap();
        let api = model.add_container(system, "API", "Public API").unwrap();
        (model, user, system, api)
    }

    #[test]
    fn ids_are_sequential_across_element_kinds() {
        let (model, user, system, api) = sample_model();
        assert_eq!(user.to_string(), "1");
        assert_eq!(system.to_string(), "2");
        assert_eq!(api.to_string(), "3");
        assert_eq!(model.elements().count(), 3);
    }

    #[test]
    fn relationships_share_the_id_sequence() {
        let (mut model, user, _, api) = sample_model();
        let relationship = model.add_relationship(user, api, "Uses").unwrap();
        assert_eq!(relationship.to_string(), "4");
    }

    #[test]
    fn people_and_systems_share_the_top_level_scope() {
        let mut model = Model::new();
        model.add_person("Billing", "A person").unwrap();
        let err = model.add_software_system("Billing", "A system").unwrap_err();
        assert_eq!(err, ModelError::DuplicateName("Billing".to_string()));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut model = Model::new();
        assert_eq!(model.add_person("  ", "desc").unwrap_err(), ModelError::BlankName);
    }

    #[test]
    fn container_names_are_scoped_to_their_system() {
        let mut model = Model::new();
        let billing = model.add_software_system("Billing", "").unwrap();
        let shipping = model.add_software_system("Shipping", "").unwrap();

        model.add_container(billing, "API", "").unwrap();
        // Same name under a different system is fine.
        model.add_container(shipping, "API", "").unwrap();

        let err = model.add_container(billing, "API", "").unwrap_err();
        assert_eq!(err, ModelError::DuplicateName("API".to_string()));
    }

    #[test]
    fn add_container_requires_a_software_system() {
        let (mut model, user, _, api) = sample_model();
        assert!(matches!(
            model.add_container(user, "X", "").unwrap_err(),
            ModelError::UnexpectedKind { expected: ElementKind::SoftwareSystem, .. }
        ));
        assert!(matches!(
            model.add_component(api, "C", "", "Rust"),
            Ok(_)
        ));
        assert!(matches!(
            model.add_component(user, "C", "", "Rust").unwrap_err(),
            ModelError::UnexpectedKind { expected: ElementKind::Container, .. }
        ));
    }

    #[test]
    fn failed_adds_do_not_consume_ids() {
        let (mut model, _, system, _) = sample_model();
        model.add_container(system, "API", "").unwrap_err();
        let next = model.add_container(system, "Database", "").unwrap();
        assert_eq!(next.to_string(), "4");
    }

    #[test]
    fn technology_applies_to_containers_and_components_only() {
        let (mut model, user, system, api) = sample_model();
        model.set_technology(api, "Rust").unwrap();

        let container = model.element(api).unwrap();
        match container {
            ElementRef::Container(c) => assert_eq!(c.technology(), Some("Rust")),
            other => panic!("expected a container, got {:?}", other.kind()),
        }

        assert_eq!(
            model.set_technology(user, "Rust").unwrap_err(),
            ModelError::TechnologyNotSupported(ElementKind::Person)
        );
        assert_eq!(
            model.set_technology(system, "Rust").unwrap_err(),
            ModelError::TechnologyNotSupported(ElementKind::SoftwareSystem)
        );
    }

    #[test]
    fn empty_component_technology_is_unset() {
        let (mut model, _, _, api) = sample_model();
        let component = model.add_component(api, "Controller", "", "").unwrap();
        match model.element(component).unwrap() {
            ElementRef::Component(c) => assert_eq!(c.technology(), None),
            other => panic!("expected a component, got {:?}", other.kind()),
        }
    }

    #[test]
    fn elements_carry_built_in_tags() {
        let (mut model, user, system, api) = sample_model();
        let component = model.add_component(api, "Controller", "", "Rust").unwrap();

        assert!(model.element(user).unwrap().tags().contains(tags::PERSON));
        assert!(model.element(system).unwrap().tags().contains(tags::SOFTWARE_SYSTEM));
        assert!(model.element(api).unwrap().tags().contains(tags::CONTAINER));
        assert!(model.element(component).unwrap().tags().contains(tags::COMPONENT));
        for id in [user, system, api, component] {
            assert!(model.element(id).unwrap().tags().contains(tags::ELEMENT));
        }
    }

    #[test]
    fn relationships_carry_style_tags() {
        let (mut model, user, system, api) = sample_model();

        let sync = model.add_relationship(user, system, "Uses").unwrap();
        let rel = model.relationship(sync).unwrap();
        assert!(rel.tags().contains(tags::RELATIONSHIP));
        assert!(rel.tags().contains(tags::SYNCHRONOUS));

        let asynch = model
            .add_relationship_with(user, api, "Submits", Some("HTTP"), InteractionStyle::Asynchronous)
            .unwrap();
        let rel = model.relationship(asynch).unwrap();
        assert!(rel.tags().contains(tags::ASYNCHRONOUS));
        assert_eq!(rel.technology(), Some("HTTP"));
    }

    #[test]
    fn self_and_duplicate_relationships_are_rejected() {
        let (mut model, user, system, _) = sample_model();
        assert_eq!(
            model.add_relationship(user, user, "Talks to itself").unwrap_err(),
            ModelError::SelfRelationship(user)
        );

        model.add_relationship(user, system, "Uses").unwrap();
        assert!(matches!(
            model.add_relationship(user, system, "Uses").unwrap_err(),
            ModelError::DuplicateRelationship { .. }
        ));
        // A different description between the same endpoints is a new relationship.
        model.add_relationship(user, system, "Administers").unwrap();
    }

    #[test]
    fn relationship_endpoints_must_exist() {
        let (mut model, user, _, _) = sample_model();
        let ghost = "99".parse().unwrap();
        assert_eq!(
            model.add_relationship(user, ghost, "Uses").unwrap_err(),
            ModelError::UnknownElement(ghost)
        );
    }

    #[test]
    fn canonical_names_resolve_back_to_ids() {
        let (mut model, user, system, api) = sample_model();
        let component = model.add_component(api, "Controller", "", "Rust").unwrap();

        assert_eq!(model.canonical_name(user).as_deref(), Some("/User"));
        assert_eq!(model.canonical_name(system).as_deref(), Some("/Billing"));
        assert_eq!(model.canonical_name(api).as_deref(), Some("/Billing/API"));
        assert_eq!(
            model.canonical_name(component).as_deref(),
            Some("/Billing/API/Controller")
        );

        for id in [user, system, api, component] {
            let name = model.canonical_name(id).unwrap();
            assert_eq!(model.find_by_canonical_name(&name), Some(id));
        }
        assert_eq!(model.find_by_canonical_name("/Nobody"), None);
        assert_eq!(model.find_by_canonical_name("Billing"), None);
    }

    #[test]
    fn model_roundtrips_through_json() {
        let (mut model, user, _, api) = sample_model();
        model.set_technology(api, "Rust").unwrap();
        model.add_relationship(user, api, "Uses").unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();

        assert_eq!(back.people().len(), 1);
        assert_eq!(back.relationships().len(), 1);
        assert_eq!(back.canonical_name(api).as_deref(), Some("/Billing/API"));
        // Allocation continues past the highest deserialized id.
        let mut back = back;
        let next = back.add_person("Operator", "").unwrap();
        assert_eq!(next.to_string(), "5");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unique_names_produce_unique_ids_and_canonical_names(
                names in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9 ]{0,12}", 1..8)
            ) {
                let mut model = Model::new();
                let mut ids = Vec::new();
                for name in &names {
                    ids.push(model.add_person(name, "generated").unwrap());
                }

                let mut seen = std::collections::HashSet::new();
                for id in &ids {
                    prop_assert!(seen.insert(*id), "duplicate id allocated");
                    let canonical = model.canonical_name(*id).unwrap();
                    prop_assert_eq!(model.find_by_canonical_name(&canonical), Some(*id));
                }
            }
        }
    }
}
