//! Tag-keyed visual styling for rendered diagrams.
//!
//! Styles do not render anything themselves; they are declarations carried in
//! the workspace file for whatever tool renders the views. Styles are keyed
//! by tag, and an element picks up every style whose tag it carries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// The shape used to draw elements carrying a styled tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Cylinder,
    Pipe,
    Person,
    Folder,
}

/// Errors raised by style operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("{0}")]
    InvalidColor(String),
}

/// Visual style applied to elements carrying a tag.
///
/// Setters return `&mut Self` so styles can be declared in one chain:
///
/// ```
/// use maquette_core::{style::{Shape, Styles}, tags};
///
/// let mut styles = Styles::new();
/// styles
///     .add_element_style(tags::PERSON)
///     .with_background("#08427b")?
///     .with_color("#ffffff")?
///     .with_shape(Shape::Person);
/// # Ok::<(), maquette_core::style::StyleError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    opacity: Option<u8>,
}

impl ElementStyle {
    /// Sets the background color.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] if the string is not a CSS color.
    pub fn with_background(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.background = Some(Color::new(color).map_err(StyleError::InvalidColor)?);
        Ok(self)
    }

    /// Sets the text color.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] if the string is not a CSS color.
    pub fn with_color(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.color = Some(Color::new(color).map_err(StyleError::InvalidColor)?);
        Ok(self)
    }

    /// Sets the shape.
    pub fn with_shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the opacity as a percentage, clamped to 0..=100.
    pub fn with_opacity(&mut self, opacity: u8) -> &mut Self {
        self.opacity = Some(opacity.min(100));
        self
    }

    /// Get the background color, if set.
    pub fn background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    /// Get the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Get the shape, if set.
    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Get the opacity percentage, if set.
    pub fn opacity(&self) -> Option<u8> {
        self.opacity
    }
}

/// Visual style applied to relationships carrying a tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipStyle {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    dashed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    thickness: Option<u32>,
}

impl RelationshipStyle {
    /// Sets the line color.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] if the string is not a CSS color.
    pub fn with_color(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.color = Some(Color::new(color).map_err(StyleError::InvalidColor)?);
        Ok(self)
    }

    /// Sets whether the line is dashed.
    pub fn with_dashed(&mut self, dashed: bool) -> &mut Self {
        self.dashed = Some(dashed);
        self
    }

    /// Sets the line thickness in pixels.
    pub fn with_thickness(&mut self, thickness: u32) -> &mut Self {
        self.thickness = Some(thickness);
        self
    }

    /// Get the line color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Get the dashed flag, if set.
    pub fn dashed(&self) -> Option<bool> {
        self.dashed
    }

    /// Get the line thickness, if set.
    pub fn thickness(&self) -> Option<u32> {
        self.thickness
    }
}

/// The set of element and relationship styles for a workspace.
///
/// Styles are keyed by tag and preserve declaration order. Declaring a style
/// for a tag that already has one replaces the earlier declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Styles {
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    elements: IndexMap<String, ElementStyle>,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    relationships: IndexMap<String, RelationshipStyle>,
}

impl Styles {
    /// Creates an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh element style for a tag, replacing any earlier one.
    pub fn add_element_style(&mut self, tag: &str) -> &mut ElementStyle {
        self.elements.insert(tag.to_string(), ElementStyle::default());
        self.elements
            .get_mut(tag)
            .expect("style was just inserted")
    }

    /// Starts a fresh relationship style for a tag, replacing any earlier one.
    pub fn add_relationship_style(&mut self, tag: &str) -> &mut RelationshipStyle {
        self.relationships
            .insert(tag.to_string(), RelationshipStyle::default());
        self.relationships
            .get_mut(tag)
            .expect("style was just inserted")
    }

    /// Look up the element style for a tag.
    pub fn element_style(&self, tag: &str) -> Option<&ElementStyle> {
        self.elements.get(tag)
    }

    /// Look up the relationship style for a tag.
    pub fn relationship_style(&self, tag: &str) -> Option<&RelationshipStyle> {
        self.relationships.get(tag)
    }

    /// Iterate over element styles in declaration order.
    pub fn element_styles(&self) -> impl Iterator<Item = (&str, &ElementStyle)> {
        self.elements.iter().map(|(tag, style)| (tag.as_str(), style))
    }

    /// Iterate over relationship styles in declaration order.
    pub fn relationship_styles(&self) -> impl Iterator<Item = (&str, &RelationshipStyle)> {
        self.relationships
            .iter()
            .map(|(tag, style)| (tag.as_str(), style))
    }

    /// Returns `true` if no styles are declared.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.relationships.is_empty()
    }
}
