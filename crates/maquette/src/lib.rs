//! Maquette - an architecture model workspace.
//!
//! A workspace holds an in-memory model of a software architecture (people,
//! software systems, containers, components, and the relationships between
//! them), views over that model, documentation with architecture decision
//! records, and visual styling. Workspaces serialize to JSON and carry
//! diagram layout forward across regenerations.
//!
//! # Examples
//!
//! ```rust,no_run
//! use maquette::{Workspace, views::PaperSize};
//!
//! let mut workspace = Workspace::new("Shop", "The online shop estate");
//!
//! // Build the model.
//! let customer = workspace.model_mut().add_person("Customer", "Buys things")?;
//! let shop = workspace.model_mut().add_software_system("Shop", "Sells things")?;
//! workspace.model_mut().add_relationship(customer, shop, "Buys from")?;
//!
//! // Create and populate a view.
//! let (model, views) = workspace.model_and_views_mut();
//! let view = views.create_system_context_view(model, shop, "context", "Shop context")?;
//! view.add_default_elements(model);
//! view.set_paper_size(PaperSize::A5Landscape);
//!
//! // Regenerate: carry saved layout forward, then overwrite the file.
//! if let Ok(saved) = Workspace::load_from_file("workspace.json") {
//!     workspace.copy_layout_information_from(&saved);
//! }
//! workspace.save_to_file("workspace.json")?;
//! # Ok::<(), maquette::MaquetteError>(())
//! ```

pub mod views;

mod error;
mod workspace;

pub use maquette_core::{color, documentation, identifier, model, style, tags};

pub use error::MaquetteError;
pub use workspace::Workspace;
