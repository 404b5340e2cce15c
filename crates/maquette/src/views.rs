//! Views over the architecture model.
//!
//! This module contains the fundamental building blocks of the view model:
//! - [`ViewSet`] - All views of a workspace, plus the styling configuration
//! - [`SystemLandscapeView`], [`SystemContextView`], [`ContainerView`],
//!   [`ComponentView`] - The four view kinds, scoped from the whole model
//!   down to a single container
//! - [`PaperSize`] and [`AutomaticLayout`] - Presentation settings carried
//!   with each view
//!
//! Views reference model elements by id and are populated explicitly; a view
//! holds the elements it was told to include and exactly the relationships
//! drawable between them.

mod layout;
mod paper;
mod view;

pub use paper::{AutomaticLayout, PaperSize, RankDirection};
pub use view::{
    ComponentView, ContainerView, ElementView, RelationshipView, SystemContextView,
    SystemLandscapeView, Vertex, View,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use maquette_core::{
    identifier::ElementId,
    model::{ElementKind, Model},
    style::Styles,
};

/// Errors raised by view operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("view keys must not be blank")]
    BlankKey,

    #[error("a view with key `{0}` already exists")]
    DuplicateKey(String),

    #[error("unknown element id `{0}`")]
    UnknownElement(ElementId),

    #[error("view subject `{id}` is a {actual}, expected a {expected}")]
    UnexpectedKind {
        id: ElementId,
        expected: ElementKind,
        actual: ElementKind,
    },
}

/// View-related configuration carried in the workspace: currently the styles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Styles::is_empty", default)]
    styles: Styles,
}

impl Configuration {
    /// Borrow the styles.
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Borrow the styles mutably.
    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// All views of a workspace.
///
/// View keys are unique across every view kind; the key is what layout
/// merging matches on between workspace generations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSet {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    system_landscape_views: Vec<SystemLandscapeView>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    system_context_views: Vec<SystemContextView>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    container_views: Vec<ContainerView>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    component_views: Vec<ComponentView>,
    #[serde(skip_serializing_if = "Configuration::is_empty", default)]
    configuration: Configuration,
}

impl ViewSet {
    /// Creates an empty view set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system landscape view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DuplicateKey`] if the key is already in use, or
    /// [`ViewError::BlankKey`] for a blank key.
    pub fn create_system_landscape_view(
        &mut self,
        key: &str,
        description: &str,
    ) -> Result<&mut SystemLandscapeView, ViewError> {
        self.check_key(key)?;
        self.system_landscape_views
            .push(SystemLandscapeView::new(key, description));
        Ok(self
            .system_landscape_views
            .last_mut()
            .expect("view was just pushed"))
    }

    /// Creates a system context view scoped to a software system.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DuplicateKey`]/[`ViewError::BlankKey`] for key
    /// problems, [`ViewError::UnknownElement`] if the subject is not in the
    /// model, and [`ViewError::UnexpectedKind`] if it is not a software
    /// system.
    pub fn create_system_context_view(
        &mut self,
        model: &Model,
        software_system: ElementId,
        key: &str,
        description: &str,
    ) -> Result<&mut SystemContextView, ViewError> {
        self.check_key(key)?;
        ensure_kind(model, software_system, ElementKind::SoftwareSystem)?;
        self.system_context_views
            .push(SystemContextView::new(software_system, key, description));
        Ok(self
            .system_context_views
            .last_mut()
            .expect("view was just pushed"))
    }

    /// Creates a container view scoped to a software system.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ViewSet::create_system_context_view`].
    pub fn create_container_view(
        &mut self,
        model: &Model,
        software_system: ElementId,
        key: &str,
        description: &str,
    ) -> Result<&mut ContainerView, ViewError> {
        self.check_key(key)?;
        ensure_kind(model, software_system, ElementKind::SoftwareSystem)?;
        self.container_views
            .push(ContainerView::new(software_system, key, description));
        Ok(self.container_views.last_mut().expect("view was just pushed"))
    }

    /// Creates a component view scoped to a container.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::DuplicateKey`]/[`ViewError::BlankKey`] for key
    /// problems, [`ViewError::UnknownElement`] if the subject is not in the
    /// model, and [`ViewError::UnexpectedKind`] if it is not a container.
    pub fn create_component_view(
        &mut self,
        model: &Model,
        container: ElementId,
        key: &str,
        description: &str,
    ) -> Result<&mut ComponentView, ViewError> {
        self.check_key(key)?;
        ensure_kind(model, container, ElementKind::Container)?;
        self.component_views
            .push(ComponentView::new(container, key, description));
        Ok(self.component_views.last_mut().expect("view was just pushed"))
    }

    /// Borrow the system landscape views.
    pub fn system_landscape_views(&self) -> &[SystemLandscapeView] {
        &self.system_landscape_views
    }

    /// Borrow the system landscape views mutably.
    pub fn system_landscape_views_mut(&mut self) -> &mut [SystemLandscapeView] {
        &mut self.system_landscape_views
    }

    /// Borrow the system context views.
    pub fn system_context_views(&self) -> &[SystemContextView] {
        &self.system_context_views
    }

    /// Borrow the system context views mutably.
    pub fn system_context_views_mut(&mut self) -> &mut [SystemContextView] {
        &mut self.system_context_views
    }

    /// Borrow the container views.
    pub fn container_views(&self) -> &[ContainerView] {
        &self.container_views
    }

    /// Borrow the container views mutably.
    pub fn container_views_mut(&mut self) -> &mut [ContainerView] {
        &mut self.container_views
    }

    /// Borrow the component views.
    pub fn component_views(&self) -> &[ComponentView] {
        &self.component_views
    }

    /// Borrow the component views mutably.
    pub fn component_views_mut(&mut self) -> &mut [ComponentView] {
        &mut self.component_views
    }

    /// Borrow the view configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Borrow the view configuration mutably.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Returns `true` if a view with this key exists, of any kind.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k == key)
    }

    /// Copies layout information from another view set.
    ///
    /// Views are matched by key within each view kind; elements match by
    /// canonical name and relationships by endpoint canonical names plus
    /// description. Unmatched views on either side are left untouched.
    pub fn copy_layout_information_from(
        &mut self,
        model: &Model,
        source: &ViewSet,
        source_model: &Model,
    ) {
        for target in &mut self.system_landscape_views {
            if let Some(saved) = source
                .system_landscape_views
                .iter()
                .find(|v| v.key() == target.key())
            {
                layout::copy_view_layout(target, model, saved, source_model);
            }
        }
        for target in &mut self.system_context_views {
            if let Some(saved) = source
                .system_context_views
                .iter()
                .find(|v| v.key() == target.key())
            {
                layout::copy_view_layout(target, model, saved, source_model);
            }
        }
        for target in &mut self.container_views {
            if let Some(saved) = source
                .container_views
                .iter()
                .find(|v| v.key() == target.key())
            {
                layout::copy_view_layout(target, model, saved, source_model);
            }
        }
        for target in &mut self.component_views {
            if let Some(saved) = source
                .component_views
                .iter()
                .find(|v| v.key() == target.key())
            {
                layout::copy_view_layout(target, model, saved, source_model);
            }
        }
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        let landscape = self.system_landscape_views.iter().map(|v| v.key());
        let context = self.system_context_views.iter().map(|v| v.key());
        let container = self.container_views.iter().map(|v| v.key());
        let component = self.component_views.iter().map(|v| v.key());
        landscape.chain(context).chain(container).chain(component)
    }

    fn check_key(&self, key: &str) -> Result<(), ViewError> {
        if key.trim().is_empty() {
            return Err(ViewError::BlankKey);
        }
        if self.contains_key(key) {
            return Err(ViewError::DuplicateKey(key.to_string()));
        }
        Ok(())
    }
}

fn ensure_kind(model: &Model, id: ElementId, expected: ElementKind) -> Result<(), ViewError> {
    let element = model.element(id).ok_or(ViewError::UnknownElement(id))?;
    if element.kind() != expected {
        return Err(ViewError::UnexpectedKind {
            id,
            expected,
            actual: element.kind(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> (Model, ElementId, ElementId) {
        let mut model = Model::new();
        let user = model.add_person("User", "").unwrap();
        let system = model.add_software_system("Billing", "").unwrap();
        model.add_relationship(user, system, "Uses").unwrap();
        (model, user, system)
    }

    #[test]
    fn view_keys_are_unique_across_kinds() {
        let (model, _, system) = sample_model();
        let mut views = ViewSet::new();

        views.create_system_landscape_view("main", "").unwrap();
        let err = views
            .create_system_context_view(&model, system, "main", "")
            .unwrap_err();
        assert_eq!(err, ViewError::DuplicateKey("main".to_string()));
    }

    #[test]
    fn blank_view_keys_are_rejected() {
        let mut views = ViewSet::new();
        assert_eq!(
            views.create_system_landscape_view("  ", "").unwrap_err(),
            ViewError::BlankKey
        );
    }

    #[test]
    fn view_subjects_are_kind_checked() {
        let (model, user, system) = sample_model();
        let mut views = ViewSet::new();

        assert!(matches!(
            views
                .create_system_context_view(&model, user, "context", "")
                .unwrap_err(),
            ViewError::UnexpectedKind {
                expected: ElementKind::SoftwareSystem,
                ..
            }
        ));
        assert!(matches!(
            views
                .create_component_view(&model, system, "components", "")
                .unwrap_err(),
            ViewError::UnexpectedKind {
                expected: ElementKind::Container,
                ..
            }
        ));

        let ghost = "99".parse().unwrap();
        assert_eq!(
            views
                .create_container_view(&model, ghost, "containers", "")
                .unwrap_err(),
            ViewError::UnknownElement(ghost)
        );
    }

    #[test]
    fn layout_merge_matches_views_by_key_and_elements_by_canonical_name() {
        // "Saved" workspace: same shape, built in a different order so the
        // ids differ.
        let mut saved_model = Model::new();
        let saved_system = saved_model.add_software_system("Billing", "").unwrap();
        let saved_user = saved_model.add_person("User", "").unwrap();
        saved_model.add_relationship(saved_user, saved_system, "Uses").unwrap();

        let mut saved_views = ViewSet::new();
        let saved_view = saved_views
            .create_system_context_view(&saved_model, saved_system, "context", "")
            .unwrap();
        saved_view.add_default_elements(&saved_model);
        saved_view.set_element_position(saved_user, 100, 200);
        saved_view.set_element_position(saved_system, 400, 200);

        // Fresh workspace regeneration.
        let (model, user, system) = sample_model();
        assert_ne!(user, saved_user);

        let mut views = ViewSet::new();
        let view = views
            .create_system_context_view(&model, system, "context", "")
            .unwrap();
        view.add_default_elements(&model);

        views.copy_layout_information_from(&model, &saved_views, &saved_model);

        let view = &views.system_context_views()[0];
        let element = view.element_view(user).unwrap();
        assert_eq!((element.x(), element.y()), (Some(100), Some(200)));
    }

    #[test]
    fn layout_merge_ignores_unmatched_keys_and_elements() {
        let mut saved_model = Model::new();
        let saved_user = saved_model.add_person("Someone Else", "").unwrap();
        let mut saved_views = ViewSet::new();
        let saved_view = saved_views
            .create_system_landscape_view("old-key", "")
            .unwrap();
        saved_view.add_all_elements(&saved_model);
        saved_view.set_element_position(saved_user, 1, 1);

        let (model, user, _) = sample_model();
        let mut views = ViewSet::new();
        let view = views.create_system_landscape_view("landscape", "").unwrap();
        view.add_all_elements(&model);

        views.copy_layout_information_from(&model, &saved_views, &saved_model);

        let view = &views.system_landscape_views()[0];
        let element = view.element_view(user).unwrap();
        assert_eq!((element.x(), element.y()), (None, None));
    }

    #[test]
    fn layout_merge_copies_relationship_vertices() {
        let mut saved_model = Model::new();
        let saved_user = saved_model.add_person("User", "").unwrap();
        let saved_system = saved_model.add_software_system("Billing", "").unwrap();
        let saved_rel = saved_model
            .add_relationship(saved_user, saved_system, "Uses")
            .unwrap();

        let mut saved_views = ViewSet::new();
        let saved_view = saved_views.create_system_landscape_view("landscape", "").unwrap();
        saved_view.add_all_elements(&saved_model);
        saved_view.set_relationship_vertices(saved_rel, vec![Vertex::new(10, 20)]);

        let (model, user, system) = sample_model();
        let mut views = ViewSet::new();
        let view = views.create_system_landscape_view("landscape", "").unwrap();
        view.add_all_elements(&model);

        views.copy_layout_information_from(&model, &saved_views, &saved_model);

        let view = &views.system_landscape_views()[0];
        let relationship = model
            .relationships()
            .iter()
            .find(|r| r.source_id() == user && r.destination_id() == system)
            .unwrap();
        let routed = view.relationship_view(relationship.id()).unwrap();
        assert_eq!(routed.vertices(), &[Vertex::new(10, 20)]);
    }
}
