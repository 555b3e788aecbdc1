use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Portfolio-wide styling with per-section overrides stored under the
/// section id (`customStyling[sectionId]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomStyling(Map<String, Value>);

impl Default for CustomStyling {
    fn default() -> Self {
        let defaults = json!({
            "colors": {
                "primary": "#2563eb",
                "secondary": "#64748b",
                "accent": "#f59e0b",
                "background": "#ffffff",
                "text": "#1f2937"
            },
            "fonts": { "heading": "Inter", "body": "Inter" },
            "spacing": { "section": "4rem", "container": "1200px" },
            "animations": { "enabled": true, "duration": "300ms" },
            "layout": { "style": "modern", "navigation": "top" }
        });

        match defaults {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }
}

impl From<Map<String, Value>> for CustomStyling {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl CustomStyling {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Object values shallow-merge into the existing sub-object; anything else replaces.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            match (self.0.get_mut(&key), value) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    existing.extend(incoming);
                }
                (_, value) => {
                    self.0.insert(key, value);
                }
            }
        }
    }

    /// Global layer: every key that is not a per-section override.
    pub fn global_layer(&self, section_ids: &[String]) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|(key, _)| !section_ids.iter().any(|id| id == *key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn section_override(&self, section_id: &str) -> Option<&Map<String, Value>> {
        self.0.get(section_id).and_then(Value::as_object)
    }

    /// global <- template section styling <- per-section override, shallow.
    pub fn effective_for(
        &self,
        section_id: &str,
        section_ids: &[String],
        template_styling: &Map<String, Value>,
    ) -> Map<String, Value> {
        let mut merged = self.global_layer(section_ids);
        merged.extend(template_styling.clone());
        if let Some(overrides) = self.section_override(section_id) {
            merged.extend(overrides.clone());
        }
        merged
    }
}
