use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::content::SectionContent;
use super::entities::Portfolio;
use crate::modules::template::application::domain::entities::{
    SectionBinding, SectionKind, Template,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Edit,
    #[default]
    View,
}

/// One entry of the rendering plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderedSection {
    Ready {
        section_id: String,
        kind: SectionKind,
        data_key: String,
        content: SectionContent,
        styling: Map<String, Value>,
        /// Empty in view mode.
        editable_fields: Vec<String>,
    },
    /// Edit-mode stand-in for kinds without a component.
    ComingSoon {
        section_id: String,
        kind: SectionKind,
        message: String,
    },
}

impl RenderedSection {
    pub fn section_id(&self) -> &str {
        match self {
            RenderedSection::Ready { section_id, .. } => section_id,
            RenderedSection::ComingSoon { section_id, .. } => section_id,
        }
    }
}

pub fn render(
    portfolio: &Portfolio,
    template: Option<&Template>,
    mode: RenderMode,
) -> Vec<RenderedSection> {
    let ids: Vec<String> = if !portfolio.active_sections.is_empty() {
        portfolio.active_sections.ids().to_vec()
    } else {
        template.map(Template::section_ids).unwrap_or_default()
    };

    let mut override_keys = template.map(Template::section_ids).unwrap_or_default();
    override_keys.extend(ids.iter().cloned());

    ids.iter()
        .filter_map(|id| render_section(portfolio, template, mode, id, &override_keys))
        .collect()
}

fn render_section(
    portfolio: &Portfolio,
    template: Option<&Template>,
    mode: RenderMode,
    section_id: &str,
    override_keys: &[String],
) -> Option<RenderedSection> {
    let binding = template
        .and_then(|t| t.binding(section_id))
        .unwrap_or_else(|| SectionBinding {
            section_id: section_id.to_string(),
            data_key: SectionKind::from(section_id).as_str().to_string(),
            kind: SectionKind::from(section_id),
        });
    let section = template.and_then(|t| t.section(section_id));

    if !binding.kind.has_component() {
        return match mode {
            RenderMode::View => None,
            RenderMode::Edit => {
                let name = section.map(|s| s.display_name()).unwrap_or(section_id);
                Some(RenderedSection::ComingSoon {
                    section_id: binding.section_id,
                    kind: binding.kind,
                    message: format!("{name} section coming soon"),
                })
            }
        };
    }

    let content = portfolio
        .custom_data
        .get(&binding.data_key)
        .cloned()
        .unwrap_or_else(|| SectionContent::empty(binding.kind.shape()));

    let empty = Map::new();
    let template_styling = section.map(|s| &s.styling).unwrap_or(&empty);
    let styling =
        portfolio
            .custom_styling
            .effective_for(section_id, override_keys, template_styling);

    let editable_fields = match mode {
        RenderMode::View => Vec::new(),
        RenderMode::Edit => editable_fields(section.map(|s| s.fields.as_slice()), &content),
    };

    Some(RenderedSection::Ready {
        section_id: binding.section_id,
        kind: binding.kind,
        data_key: binding.data_key,
        content,
        styling,
        editable_fields,
    })
}

/// Declared fields win; otherwise the keys already present in object content.
fn editable_fields(declared: Option<&[String]>, content: &SectionContent) -> Vec<String> {
    match declared {
        Some(fields) if !fields.is_empty() => fields.to_vec(),
        _ => match content {
            SectionContent::Object(map) => map.keys().cloned().collect(),
            SectionContent::List(_) => Vec::new(),
        },
    }
}
