//! Component binding configuration and per-component rendering.
//!
//! A widget document holds a list of components. Each one may name the API
//! whose response feeds it, static default props, single and multi mappings,
//! and a content template with its fields:
//!
//! ```json
//! {
//!   "name": "Weather",
//!   "options": { "locationSummary": true },
//!   "components": [{
//!     "id": "header-1",
//!     "type": "header",
//!     "apiId": "weather",
//!     "props": { "title": "Loading", "color": "blue" },
//!     "mapping": { "title": "location" },
//!     "multiMapping": { "temps": ["current.temp_c", "current.feelslike_c"] },
//!     "template": "Now {{Temp}}°C",
//!     "contentFields": [{ "label": "Temp", "apiField": "current.temp_c" }]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::mapping::{apply_multi_mapping, apply_single_mapping, MultiMapping, SingleMapping};
use crate::resolver::PathResolver;
use crate::template::{placeholders, substitute, unresolved_placeholders, ContentField};
use crate::value::{bag_from_json, PropertyBag};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolver settings carried by a widget document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    /// Collapse geolocation objects into `"<name>, <region>, <country>"`.
    pub location_summary: bool,
}

impl EngineOptions {
    pub fn resolver(&self) -> PathResolver {
        if self.location_summary {
            PathResolver::with_location_summary()
        } else {
            PathResolver::new()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentBinding {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub api_id: Option<String>,
    /// Static defaults; bindings are merged over these.
    pub props: Map<String, Value>,
    pub mapping: SingleMapping,
    pub multi_mapping: MultiMapping,
    pub template: Option<String>,
    pub content_fields: Vec<ContentField>,
}

/// Display-ready output for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: String,
    pub props: PropertyBag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Template labels left as literal placeholders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

impl ComponentBinding {
    /// Apply every binding against `document`.
    pub fn render(&self, resolver: &PathResolver, document: &Value) -> RenderedComponent {
        let base = bag_from_json(&self.props);
        let bound = apply_single_mapping(resolver, &base, &self.mapping, document);
        let props = apply_multi_mapping(resolver, &bound, &self.multi_mapping, document);
        let template = self.template.as_deref().unwrap_or_default();
        let content = self
            .template
            .as_ref()
            .map(|_| substitute(resolver, template, &self.content_fields, document));
        let unresolved = unresolved_placeholders(resolver, template, &self.content_fields, document);

        tracing::debug!(
            component = %self.id,
            props = props.len(),
            unresolved = unresolved.len(),
            "rendered component"
        );

        RenderedComponent {
            id: self.id.clone(),
            component_type: self.component_type.clone(),
            props,
            content,
            unresolved,
        }
    }

    /// Static props and the raw template, for components with no data yet.
    pub fn render_unbound(&self) -> RenderedComponent {
        RenderedComponent {
            id: self.id.clone(),
            component_type: self.component_type.clone(),
            props: bag_from_json(&self.props),
            content: self.template.clone(),
            unresolved: placeholders(self.template.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub name: String,
    pub options: EngineOptions,
    pub components: Vec<ComponentBinding>,
}

impl WidgetConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render every component against the document registered for its API.
    ///
    /// Components without an `apiId` are rendered against `null`, so only
    /// their static props survive. Components whose API has no document are
    /// left unbound.
    pub fn render_all(
        &self,
        resolver: &PathResolver,
        documents: &BTreeMap<String, Value>,
    ) -> Vec<RenderedComponent> {
        self.components
            .iter()
            .map(|component| match component.api_id.as_deref() {
                None => component.render(resolver, &Value::Null),
                Some(api_id) => match documents.get(api_id) {
                    Some(document) => component.render(resolver, document),
                    None => {
                        tracing::debug!(component = %component.id, api_id, "no document for api");
                        component.render_unbound()
                    }
                },
            })
            .collect()
    }
}
