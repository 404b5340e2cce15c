//! The showcase workspace the CLI generates.
//!
//! This is a small but complete workspace: two people, one software system
//! with a container and two components, relationships at every level, the
//! four view kinds, documentation with decision records, and element styles.
//! Regenerating it over an existing file keeps whatever layout a diagram
//! editor has saved into that file.

use chrono::Utc;

use maquette::{
    MaquetteError, Workspace,
    documentation::{DecisionStatus, Format},
    model::InteractionStyle,
    style::Shape,
    tags,
    views::PaperSize,
};

use crate::config::AppConfig;

const CONTEXT_SECTION: &str = "\
The online store sells products directly to customers.

![](embed:context)

The API application owns all business logic; customers and operators reach
it over HTTPS.";

/// Builds the showcase workspace.
///
/// # Errors
///
/// Returns `MaquetteError` if a configured style color is invalid; the model
/// and view construction itself cannot fail for this fixed shape.
pub fn build(config: &AppConfig) -> Result<Workspace, MaquetteError> {
    let mut workspace = Workspace::new("Online Store", "Architecture of the online store");

    // model
    let model = workspace.model_mut();
    let customer = model.add_person("Customer", "A customer of the store")?;
    let operator = model.add_person("Operator", "Keeps the store running")?;
    let store = model.add_software_system("Store", "Sells products online")?;
    let api = model.add_container(store, "API Application", "Backend HTTP API")?;
    model.set_technology(api, "Rust")?;
    let catalog = model.add_component(api, "Catalog", "Product lookups and search", "Rust")?;
    let orders = model.add_component(api, "Orders", "Order placement and tracking", "Rust")?;

    model.add_relationship(orders, catalog, "Checks stock through")?;
    model.add_relationship_with(
        customer,
        api,
        "Shops using",
        Some("HTTPS"),
        InteractionStyle::Asynchronous,
    )?;
    model.add_relationship_with(
        operator,
        store,
        "Operates",
        Some("HTTPS"),
        InteractionStyle::Synchronous,
    )?;

    // views
    let (model, views) = workspace.model_and_views_mut();

    let component_view =
        views.create_component_view(model, api, "components", "Components of the API application")?;
    component_view.set_paper_size(PaperSize::A5Landscape);
    component_view.add_all_components(model);

    let container_view =
        views.create_container_view(model, store, "containers", "Containers of the store")?;
    container_view.set_paper_size(PaperSize::A5Landscape);
    container_view.add_all_containers(model);

    let context_view =
        views.create_system_context_view(model, store, "context", "The store in its environment")?;
    context_view.set_paper_size(PaperSize::A5Landscape);
    context_view.add_all_software_systems(model);
    context_view.add_all_people(model);
    context_view.add_default_elements(model);

    let landscape_view =
        views.create_system_landscape_view("landscape", "Everything in the model")?;
    landscape_view.add_all_elements(model);
    landscape_view.enable_automatic_layout();

    // documentation
    let documentation = workspace.documentation_mut();
    documentation.add_context_section(store, Format::Markdown, CONTEXT_SECTION)?;

    // ADRs
    documentation.add_decision(
        "1",
        Utc::now(),
        "Record architecture decisions",
        DecisionStatus::Accepted,
        Format::Markdown,
        "We will keep a log of architecture decisions in the workspace.",
    )?;
    documentation.add_decision(
        "2",
        Utc::now(),
        "Store orders in a document database",
        DecisionStatus::Rejected,
        Format::Markdown,
        "Rejected in favour of the existing relational database.",
    )?;
    documentation.add_decision_for(
        store,
        "3",
        Utc::now(),
        "Expose a public ordering API",
        DecisionStatus::Rejected,
        Format::Markdown,
        "Rejected until partner demand justifies the support burden.",
    )?;

    // styling
    let styles = workspace.views_mut().configuration_mut().styles_mut();
    let system_background = config.style().system_background().unwrap_or("#1168bd");
    styles
        .add_element_style(tags::SOFTWARE_SYSTEM)
        .with_background(system_background)?
        .with_color("#ffffff")?;
    let person_background = config.style().person_background().unwrap_or("#08427b");
    styles
        .add_element_style(tags::PERSON)
        .with_background(person_background)?
        .with_color("#ffffff")?
        .with_shape(Shape::Person);

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_builds_with_default_config() {
        let workspace = build(&AppConfig::default()).unwrap();

        assert_eq!(workspace.model().people().len(), 2);
        assert_eq!(workspace.model().software_systems().len(), 1);
        assert_eq!(workspace.model().relationships().len(), 3);
        assert_eq!(workspace.views().component_views().len(), 1);
        assert_eq!(workspace.views().system_landscape_views().len(), 1);
        assert_eq!(workspace.documentation().decisions().len(), 3);
        assert_eq!(workspace.documentation().sections().len(), 1);
    }

    #[test]
    fn showcase_landscape_view_has_automatic_layout() {
        let workspace = build(&AppConfig::default()).unwrap();
        let landscape = &workspace.views().system_landscape_views()[0];
        assert!(landscape.automatic_layout().is_some());
        assert_eq!(landscape.paper_size(), None);
    }

    #[test]
    fn style_overrides_reach_the_workspace() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            person_background = "#333333"
            "##,
        )
        .unwrap();

        let workspace = build(&config).unwrap();
        let styles = workspace.views().configuration().styles();
        let person = styles.element_style(tags::PERSON).unwrap();
        assert_eq!(person.background().unwrap().as_str(), "#333333");
        // The system style keeps its default.
        let system = styles.element_style(tags::SOFTWARE_SYSTEM).unwrap();
        assert_eq!(system.background().unwrap().as_str(), "#1168bd");
    }

    #[test]
    fn invalid_configured_colors_fail_the_build() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            system_background = "not-a-color"
            "#,
        )
        .unwrap();

        assert!(matches!(build(&config), Err(MaquetteError::Style(_))));
    }
}
