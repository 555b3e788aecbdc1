use serde::Deserialize;
use serde_json::{Map, Value};

use super::content::SectionContent;
use super::customization::CustomizationPatch;
use super::entities::Portfolio;
use crate::modules::template::application::domain::entities::{ContentShape, Template};

/// One editor operation addressed to a section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SectionEdit {
    SetField { field: String, value: Value },
    SetItem { index: usize, value: Value },
    AppendItem { value: Value },
    RemoveItem { index: usize },
}

impl SectionEdit {
    fn name(&self) -> &'static str {
        match self {
            SectionEdit::SetField { .. } => "set_field",
            SectionEdit::SetItem { .. } => "set_item",
            SectionEdit::AppendItem { .. } => "append_item",
            SectionEdit::RemoveItem { .. } => "remove_item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionEditError {
    #[error("Section '{0}' is not part of the template")]
    UnknownSection(String),

    #[error("Operation '{op}' does not apply to {shape:?} content")]
    WrongShape { op: &'static str, shape: ContentShape },

    #[error("Item index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Field name must not be empty")]
    EmptyField,
}

/// Folds `edits` into a single-key `customData` patch for the merge engine.
/// Object sections produce the set of touched fields; list sections produce
/// the whole resulting array.
pub fn edits_to_patch(
    portfolio: &Portfolio,
    template: &Template,
    section_id: &str,
    edits: Vec<SectionEdit>,
) -> Result<CustomizationPatch, SectionEditError> {
    let binding = template
        .binding(section_id)
        .ok_or_else(|| SectionEditError::UnknownSection(section_id.to_string()))?;
    let shape = binding.kind.shape();

    let value = match shape {
        ContentShape::Object => {
            let mut fields = Map::new();
            for edit in edits {
                match edit {
                    SectionEdit::SetField { field, value } => {
                        if field.trim().is_empty() {
                            return Err(SectionEditError::EmptyField);
                        }
                        fields.insert(field, value);
                    }
                    other => {
                        return Err(SectionEditError::WrongShape {
                            op: other.name(),
                            shape,
                        })
                    }
                }
            }
            Value::Object(fields)
        }
        ContentShape::List => {
            let mut items = match portfolio.custom_data.get(&binding.data_key) {
                Some(SectionContent::List(items)) => items.clone(),
                _ => Vec::new(),
            };
            for edit in edits {
                apply_list_edit(&mut items, edit, shape)?;
            }
            Value::Array(items)
        }
    };

    let mut custom_data = Map::new();
    custom_data.insert(binding.data_key, value);

    Ok(CustomizationPatch {
        custom_data: Some(custom_data),
        ..CustomizationPatch::default()
    })
}

fn apply_list_edit(
    items: &mut Vec<Value>,
    edit: SectionEdit,
    shape: ContentShape,
) -> Result<(), SectionEditError> {
    let len = items.len();
    match edit {
        SectionEdit::AppendItem { value } => items.push(value),
        SectionEdit::SetItem { index, value } => match items.get_mut(index) {
            Some(slot) => *slot = value,
            None => return Err(SectionEditError::IndexOutOfRange { index, len }),
        },
        SectionEdit::RemoveItem { index } => {
            if index >= len {
                return Err(SectionEditError::IndexOutOfRange { index, len });
            }
            items.remove(index);
        }
        other @ SectionEdit::SetField { .. } => {
            return Err(SectionEditError::WrongShape {
                op: other.name(),
                shape,
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::portfolio::application::domain::customization::apply_customization;
    use crate::modules::portfolio::application::domain::entities::test_fixtures::portfolio_for;
    use crate::modules::template::application::domain::entities::test_fixtures::{
        section, template_with,
    };
    use serde_json::json;
    use uuid::Uuid;

    fn setup() -> (Template, Portfolio) {
        let template = template_with(vec![section("intro", "hero"), section("work", "projects")]);
        let mut portfolio = portfolio_for(UserId::from(Uuid::new_v4()), &template);
        portfolio.custom_data.insert(
            "projects",
            SectionContent::List(vec![json!({ "title": "A" }), json!({ "title": "B" })]),
        );
        (template, portfolio)
    }

    #[test]
    fn edits_deserialize_from_tagged_json() {
        let edits: Vec<SectionEdit> = serde_json::from_value(json!([
            { "op": "set_field", "field": "name", "value": "Ada" },
            { "op": "remove_item", "index": 0 }
        ]))
        .unwrap();

        assert_eq!(edits[1], SectionEdit::RemoveItem { index: 0 });
    }

    #[test]
    fn set_field_becomes_one_field_object_patch() {
        let (template, portfolio) = setup();

        let patch = edits_to_patch(
            &portfolio,
            &template,
            "intro",
            vec![SectionEdit::SetField {
                field: "name".to_string(),
                value: json!("Ada"),
            }],
        )
        .unwrap();

        assert_eq!(
            Value::Object(patch.custom_data.unwrap()),
            json!({ "hero": { "name": "Ada" } })
        );
    }

    #[test]
    fn list_edits_apply_in_order() {
        let (template, portfolio) = setup();

        let patch = edits_to_patch(
            &portfolio,
            &template,
            "work",
            vec![
                SectionEdit::AppendItem {
                    value: json!({ "title": "C" }),
                },
                SectionEdit::RemoveItem { index: 0 },
                SectionEdit::SetItem {
                    index: 0,
                    value: json!({ "title": "B2" }),
                },
            ],
        )
        .unwrap();

        assert_eq!(
            Value::Object(patch.custom_data.clone().unwrap()),
            json!({ "projects": [{ "title": "B2" }, { "title": "C" }] })
        );

        let applied = apply_customization(&portfolio, patch, &template).unwrap();
        assert_eq!(
            applied.portfolio.custom_data.get("projects"),
            Some(&SectionContent::List(vec![
                json!({ "title": "B2" }),
                json!({ "title": "C" })
            ]))
        );
    }

    #[test]
    fn out_of_range_index_fails() {
        let (template, portfolio) = setup();

        let result = edits_to_patch(
            &portfolio,
            &template,
            "work",
            vec![SectionEdit::RemoveItem { index: 5 }],
        );

        assert_eq!(
            result.unwrap_err(),
            SectionEditError::IndexOutOfRange { index: 5, len: 2 }
        );
    }

    #[test]
    fn list_ops_on_object_section_fail() {
        let (template, portfolio) = setup();

        let result = edits_to_patch(
            &portfolio,
            &template,
            "intro",
            vec![SectionEdit::AppendItem { value: json!(1) }],
        );

        assert_eq!(
            result.unwrap_err(),
            SectionEditError::WrongShape {
                op: "append_item",
                shape: ContentShape::Object
            }
        );
    }

    #[test]
    fn unknown_section_fails() {
        let (template, portfolio) = setup();

        let result = edits_to_patch(&portfolio, &template, "nope", vec![]);

        assert_eq!(
            result.unwrap_err(),
            SectionEditError::UnknownSection("nope".to_string())
        );
    }
}
