//! Databind: dynamic data binding for dashboard components
//!
//! Binds component properties to fields of arbitrary JSON API responses:
//!
//! ```text
//!   sample response ──► extract ──► catalogue of field paths ──► (user picks bindings)
//!                                                                       │
//!   live response ───────────────┐                                      ▼
//!                                ▼                      single / multi mappings
//!                          PathResolver ◄──────────────  content fields + template
//!                                │
//!                                ▼
//!                  PropertyBag + rendered template text
//! ```
//!
//! ## Modules
//!
//! - [`path`]: `FieldPath` and its dot/bracket tokenizer
//! - [`extract`]: infers the ordered list of addressable paths from a sample
//! - [`resolver`]: resolves a path against a document, with optional [`rules`]
//! - [`mapping`]: single-value and multi-value property bindings
//! - [`template`]: `{{label}}` placeholder substitution
//! - [`catalogue`], [`sample`], [`binding`]: provider-side helpers around the engine
//!
//! Resolution never fails: a path that does not resolve yields `None` and the
//! binding that asked for it is skipped. Only parsing at the provider boundary
//! ([`sample::parse_sample`], [`binding::WidgetConfig::from_json_str`]) returns
//! errors.

pub mod binding;
pub mod catalogue;
pub mod extract;
pub mod mapping;
pub mod path;
pub mod resolver;
pub mod rules;
pub mod sample;
pub mod template;
pub mod value;

pub use binding::{ComponentBinding, ConfigError, EngineOptions, RenderedComponent, WidgetConfig};
pub use catalogue::{FieldCatalogue, FieldEntry, FieldKind};
pub use extract::extract_field_paths;
pub use mapping::{
    apply_multi_mapping, apply_single_mapping, MultiMapping, SingleMapping, MULTI_PROPERTY_PREFIX,
};
pub use path::{FieldPath, PathSegment};
pub use resolver::{resolve, PathResolver};
pub use rules::{FnRule, FormatRule, LocationSummaryRule};
pub use sample::{parse_sample, SampleError};
pub use template::{placeholder_pattern, placeholders, substitute, unresolved_placeholders, ContentField};
pub use value::{BoundValue, PropertyBag};
