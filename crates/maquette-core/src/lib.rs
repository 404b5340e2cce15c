//! Maquette Core Types and Definitions
//!
//! This crate provides the foundational types for maquette architecture
//! models. It includes:
//!
//! - **Identifiers**: Model-allocated element and relationship handles
//!   ([`identifier::ElementId`], [`identifier::RelationshipId`])
//! - **Model**: The element graph of people, software systems, containers,
//!   components, and relationships ([`model`] module)
//! - **Tags**: Built-in tag names and the [`tags::TagSet`] collection
//! - **Documentation**: Sections and architecture decision records
//!   ([`documentation`] module)
//! - **Styles**: Tag-keyed visual styling definitions ([`style`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod documentation;
pub mod identifier;
pub mod model;
pub mod style;
pub mod tags;
