use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::modules::template::application::domain::entities::ContentShape;

/// Content stored for one section type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl SectionContent {
    pub fn empty(shape: ContentShape) -> Self {
        match shape {
            ContentShape::Object => SectionContent::Object(Map::new()),
            ContentShape::List => SectionContent::List(Vec::new()),
        }
    }

    pub fn shape(&self) -> ContentShape {
        match self {
            SectionContent::Object(_) => ContentShape::Object,
            SectionContent::List(_) => ContentShape::List,
        }
    }

    /// Wraps a raw JSON value if it has the expected shape.
    pub fn from_value(value: Value, shape: ContentShape) -> Option<Self> {
        match (shape, value) {
            (ContentShape::Object, Value::Object(fields)) => Some(SectionContent::Object(fields)),
            (ContentShape::List, Value::Array(items)) => Some(SectionContent::List(items)),
            _ => None,
        }
    }

    /// Shape a raw value would take when no section declares one.
    pub fn infer_shape(value: &Value) -> Option<ContentShape> {
        match value {
            Value::Object(_) => Some(ContentShape::Object),
            Value::Array(_) => Some(ContentShape::List),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            SectionContent::Object(fields) => Value::Object(fields),
            SectionContent::List(items) => Value::Array(items),
        }
    }
}

/// Section content keyed by section type (`customData`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomData(BTreeMap<String, SectionContent>);

impl CustomData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&SectionContent> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, content: SectionContent) {
        self.0.insert(key.into(), content);
    }

    pub fn remove(&mut self, key: &str) -> Option<SectionContent> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SectionContent)> {
        self.0.iter()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().into_value()))
                .collect(),
        )
    }
}
