//! Domain logic for per-item SEO metadata.
//!
//! Everything in this crate is database-free: field definitions, input
//! sanitizers, output escaping, the head/form/analysis renderers, and the
//! [`manager::SeoManager`] that ties them to a [`store::FieldStore`].

pub mod analysis;
pub mod error;
pub mod escape;
pub mod fields;
pub mod form;
pub mod head;
pub mod item;
pub mod manager;
pub mod record;
pub mod sanitize;
pub mod store;
pub mod types;
