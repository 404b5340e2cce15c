//! The workspace: the top-level aggregate of model, views, and documentation.

use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use maquette_core::{documentation::Documentation, model::Model};

use crate::{error::MaquetteError, views::ViewSet};

/// A complete architecture description: the model, the views over it, and
/// the documentation attached to it.
///
/// # Examples
///
/// ```
/// use maquette::Workspace;
///
/// let mut workspace = Workspace::new("Big Bank", "Models the internet banking estate");
///
/// let customer = workspace.model_mut().add_person("Customer", "A bank customer").unwrap();
/// let banking = workspace
///     .model_mut()
///     .add_software_system("Internet Banking", "Lets customers manage their accounts")
///     .unwrap();
/// workspace.model_mut().add_relationship(customer, banking, "Uses").unwrap();
///
/// let (model, views) = workspace.model_and_views_mut();
/// let view = views.create_system_landscape_view("landscape", "Everything").unwrap();
/// view.add_all_elements(model);
///
/// let json = workspace.to_json_pretty().unwrap();
/// assert!(json.contains("\"Customer\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    name: String,
    description: String,
    #[serde(default)]
    model: Model,
    #[serde(default)]
    views: ViewSet,
    #[serde(skip_serializing_if = "Documentation::is_empty", default)]
    documentation: Documentation,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            model: Model::new(),
            views: ViewSet::new(),
            documentation: Documentation::new(),
        }
    }

    /// Get the workspace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the workspace description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Borrow the model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Borrow the model mutably.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Borrow the views.
    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// Borrow the views mutably.
    pub fn views_mut(&mut self) -> &mut ViewSet {
        &mut self.views
    }

    /// Borrow the model and views mutably at the same time.
    ///
    /// View population needs the model while the view is borrowed mutably;
    /// this split borrow makes `views.create_*(model, ...)` chains possible
    /// without cloning the model.
    pub fn model_and_views_mut(&mut self) -> (&Model, &mut ViewSet) {
        (&self.model, &mut self.views)
    }

    /// Borrow the documentation.
    pub fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    /// Borrow the documentation mutably.
    pub fn documentation_mut(&mut self) -> &mut Documentation {
        &mut self.documentation
    }

    /// Serializes the workspace to compact JSON.
    pub fn to_json(&self) -> Result<String, MaquetteError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the workspace to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, MaquetteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a workspace from JSON.
    pub fn from_json(json: &str) -> Result<Self, MaquetteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the workspace as pretty-printed JSON, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `MaquetteError::Io` for filesystem problems and
    /// `MaquetteError::Json` if serialization fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), MaquetteError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = self.to_json_pretty()?;
        fs::write(path, json)?;
        info!(path = path.display().to_string(); "Workspace saved");
        Ok(())
    }

    /// Reads a workspace from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `MaquetteError::MissingFile` if the file does not exist,
    /// distinct from `MaquetteError::Json` for undecodable content.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MaquetteError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MaquetteError::MissingFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let workspace = Self::from_json(&content)?;
        debug!(path = path.display().to_string(); "Workspace loaded");
        Ok(workspace)
    }

    /// Copies layout information from a previously saved workspace.
    ///
    /// This is the regeneration bridge: a freshly built workspace has no
    /// coordinates, and ids are not stable between generations, so element
    /// positions and relationship routing are carried over by canonical
    /// name. Paper sizes and automatic layout settings are not copied; the
    /// generating program owns those.
    pub fn copy_layout_information_from(&mut self, other: &Workspace) {
        info!(source = other.name.as_str(); "Copying layout information from saved workspace");
        let Self { model, views, .. } = self;
        views.copy_layout_information_from(model, other.views(), other.model());
    }
}
