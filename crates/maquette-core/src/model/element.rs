//! Element and relationship types for the architecture model.
//!
//! These types are created through [`Model`](crate::model::Model) operations,
//! which allocate identifiers and enforce naming invariants. The structs here
//! own their data and expose read access; structural mutation goes through
//! the model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    identifier::{ElementId, RelationshipId},
    tags::{self, TagSet},
};

/// A person who uses the software systems being modelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: ElementId,
    name: String,
    description: String,
    tags: TagSet,
}

impl Person {
    pub(crate) fn new(id: ElementId, name: &str, description: &str) -> Self {
        let mut tags = TagSet::new();
        tags.add(tags::ELEMENT);
        tags.add(tags::PERSON);
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            tags,
        }
    }

    /// Get the person's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the person's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Borrow the person's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}

/// A software system: the highest level of abstraction in the model.
///
/// A software system owns its containers; containers are created through
/// [`Model::add_container`](crate::model::Model::add_container).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystem {
    id: ElementId,
    name: String,
    description: String,
    tags: TagSet,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    containers: Vec<Container>,
}

impl SoftwareSystem {
    pub(crate) fn new(id: ElementId, name: &str, description: &str) -> Self {
        let mut tags = TagSet::new();
        tags.add(tags::ELEMENT);
        tags.add(tags::SOFTWARE_SYSTEM);
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            tags,
            containers: Vec::new(),
        }
    }

    /// Get the software system's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the software system's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the software system's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Borrow the software system's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Borrow the containers owned by this software system.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    pub(crate) fn containers_mut(&mut self) -> &mut Vec<Container> {
        &mut self.containers
    }
}

/// A deployable or runnable unit within a software system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    id: ElementId,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    technology: Option<String>,
    tags: TagSet,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    components: Vec<Component>,
}

impl Container {
    pub(crate) fn new(id: ElementId, name: &str, description: &str) -> Self {
        let mut tags = TagSet::new();
        tags.add(tags::ELEMENT);
        tags.add(tags::CONTAINER);
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            technology: None,
            tags,
            components: Vec::new(),
        }
    }

    /// Get the container's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the container's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the container's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the container's implementation technology, if set.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    /// Borrow the container's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Borrow the components owned by this container.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub(crate) fn set_technology(&mut self, technology: &str) {
        self.technology = Some(technology.to_string());
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }

    pub(crate) fn components_mut(&mut self) -> &mut Vec<Component> {
        &mut self.components
    }
}

/// A grouping of related functionality within a container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    id: ElementId,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    technology: Option<String>,
    tags: TagSet,
}

impl Component {
    pub(crate) fn new(id: ElementId, name: &str, description: &str, technology: &str) -> Self {
        let mut tags = TagSet::new();
        tags.add(tags::ELEMENT);
        tags.add(tags::COMPONENT);
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            technology: (!technology.is_empty()).then(|| technology.to_string()),
            tags,
        }
    }

    /// Get the component's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Get the component's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the component's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the component's implementation technology, if set.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    /// Borrow the component's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub(crate) fn set_technology(&mut self, technology: &str) {
        self.technology = Some(technology.to_string());
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}

/// How a relationship's interaction takes place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionStyle {
    /// Request/response style interaction (default).
    #[default]
    Synchronous,
    /// Fire-and-forget or event-driven interaction.
    Asynchronous,
}

impl InteractionStyle {
    /// The built-in tag applied to relationships with this style.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Synchronous => tags::SYNCHRONOUS,
            Self::Asynchronous => tags::ASYNCHRONOUS,
        }
    }
}

/// A directed relationship between two model elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    id: RelationshipId,
    source_id: ElementId,
    destination_id: ElementId,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    technology: Option<String>,
    interaction_style: InteractionStyle,
    tags: TagSet,
}

impl Relationship {
    pub(crate) fn new(
        id: RelationshipId,
        source_id: ElementId,
        destination_id: ElementId,
        description: &str,
        technology: Option<&str>,
        interaction_style: InteractionStyle,
    ) -> Self {
        let mut tags = TagSet::new();
        tags.add(tags::RELATIONSHIP);
        tags.add(interaction_style.tag());
        Self {
            id,
            source_id,
            destination_id,
            description: description.to_string(),
            technology: technology.map(str::to_string),
            interaction_style,
            tags,
        }
    }

    /// Get the relationship's identifier.
    pub fn id(&self) -> RelationshipId {
        self.id
    }

    /// Get the source element's identifier.
    pub fn source_id(&self) -> ElementId {
        self.source_id
    }

    /// Get the destination element's identifier.
    pub fn destination_id(&self) -> ElementId {
        self.destination_id
    }

    /// Get the relationship's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the technology carrying the interaction, if set.
    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    /// Get the interaction style.
    pub fn interaction_style(&self) -> InteractionStyle {
        self.interaction_style
    }

    /// Borrow the relationship's tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

/// The kind of a model element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Person,
    SoftwareSystem,
    Container,
    Component,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Person => "person",
            Self::SoftwareSystem => "software system",
            Self::Container => "container",
            Self::Component => "component",
        };
        write!(f, "{name}")
    }
}

/// A borrowed view of any element in the model.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    Person(&'a Person),
    SoftwareSystem(&'a SoftwareSystem),
    Container(&'a Container),
    Component(&'a Component),
}

impl ElementRef<'_> {
    /// Get the element's identifier.
    pub fn id(&self) -> ElementId {
        match self {
            Self::Person(p) => p.id(),
            Self::SoftwareSystem(s) => s.id(),
            Self::Container(c) => c.id(),
            Self::Component(c) => c.id(),
        }
    }

    /// Get the element's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => p.name(),
            Self::SoftwareSystem(s) => s.name(),
            Self::Container(c) => c.name(),
            Self::Component(c) => c.name(),
        }
    }

    /// Get the element's description.
    pub fn description(&self) -> &str {
        match self {
            Self::Person(p) => p.description(),
            Self::SoftwareSystem(s) => s.description(),
            Self::Container(c) => c.description(),
            Self::Component(c) => c.description(),
        }
    }

    /// Borrow the element's tags.
    pub fn tags(&self) -> &TagSet {
        match self {
            Self::Person(p) => p.tags(),
            Self::SoftwareSystem(s) => s.tags(),
            Self::Container(c) => c.tags(),
            Self::Component(c) => c.tags(),
        }
    }

    /// Get the element's kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Person(_) => ElementKind::Person,
            Self::SoftwareSystem(_) => ElementKind::SoftwareSystem,
            Self::Container(_) => ElementKind::Container,
            Self::Component(_) => ElementKind::Component,
        }
    }
}
