use serde::Deserialize;
use serde_json::{Map, Value};

use super::content::SectionContent;
use super::entities::{ActiveSections, InvalidSectionsError, Portfolio};
use super::slug::base_slug;
use crate::modules::template::application::domain::entities::{ContentShape, Template};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeoSettingsPatch {
    #[serde(default)]
    pub meta_title: PatchField<String>,
    #[serde(default)]
    pub meta_description: PatchField<String>,
    #[serde(default)]
    pub keywords: PatchField<Vec<String>>,
    #[serde(default)]
    pub og_image: PatchField<String>,
}

/// `password` arrives as plain text and is swapped for its hash by the
/// service before the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub custom_domain: PatchField<String>,
    #[serde(default)]
    pub password: PatchField<String>,
    #[serde(default)]
    pub analytics_enabled: PatchField<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomizationPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub seo_settings: Option<SeoSettingsPatch>,
    pub settings: Option<SettingsPatch>,
    pub active_sections: Option<Vec<String>>,
    pub custom_data: Option<Map<String, Value>>,
    pub custom_styling: Option<Map<String, Value>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomizationError {
    #[error(transparent)]
    InvalidSections(#[from] InvalidSectionsError),

    #[error("Content for '{key}' must be {}", shape_label(.expected))]
    ShapeMismatch { key: String, expected: ContentShape },

    #[error("Content for '{0}' must be an object or an array")]
    InvalidContent(String),

    #[error("Title must not be empty")]
    EmptyTitle,
}

fn shape_label(shape: &ContentShape) -> &'static str {
    match shape {
        ContentShape::Object => "an object",
        ContentShape::List => "an array",
    }
}

/// The patched portfolio plus whether its slug needs a uniqueness pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Customized {
    pub portfolio: Portfolio,
    pub slug_changed: bool,
}

//
// ──────────────────────────────────────────────────────────
// Merge
// ──────────────────────────────────────────────────────────
//

/// Applies an editor patch to a copy of `portfolio`. Either every field of the
/// patch lands or the error is returned and nothing changes.
pub fn apply_customization(
    portfolio: &Portfolio,
    patch: CustomizationPatch,
    template: &Template,
) -> Result<Customized, CustomizationError> {
    let mut next = portfolio.clone();
    let mut slug_changed = false;

    if let Some(ids) = patch.active_sections {
        next.active_sections = ActiveSections::validated(ids, template)?;
    }

    if let Some(title) = patch.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(CustomizationError::EmptyTitle);
        }
        next.title = title.to_string();
    }

    if let Some(slug) = patch.slug {
        let slug = base_slug(&slug);
        slug_changed = slug != portfolio.slug;
        next.slug = slug;
    }

    if let Some(seo) = patch.seo_settings {
        seo.meta_title.apply_to(&mut next.seo_settings.meta_title);
        seo.meta_description
            .apply_to(&mut next.seo_settings.meta_description);
        seo.keywords.apply_or_default(&mut next.seo_settings.keywords);
        seo.og_image.apply_to(&mut next.seo_settings.og_image);
    }

    if let Some(settings) = patch.settings {
        settings
            .custom_domain
            .apply_to(&mut next.settings.custom_domain);
        settings.password.apply_to(&mut next.settings.password_hash);
        match settings.analytics_enabled {
            PatchField::Unset => {}
            PatchField::Null => next.settings.analytics_enabled = false,
            PatchField::Value(enabled) => next.settings.analytics_enabled = enabled,
        }
    }

    if let Some(custom_data) = patch.custom_data {
        for (key, value) in custom_data {
            merge_content(&mut next, template, key, value)?;
        }
    }

    if let Some(styling) = patch.custom_styling {
        next.custom_styling.merge(styling);
    }

    next.is_draft = true;

    Ok(Customized {
        portfolio: next,
        slug_changed,
    })
}

fn merge_content(
    portfolio: &mut Portfolio,
    template: &Template,
    key: String,
    value: Value,
) -> Result<(), CustomizationError> {
    let declared = template.shape_for(&key);

    if value.is_null() {
        match declared {
            Some(shape) => portfolio.custom_data.insert(key, SectionContent::empty(shape)),
            None => {
                portfolio.custom_data.remove(&key);
            }
        }
        return Ok(());
    }

    let Some(shape) = declared.or_else(|| SectionContent::infer_shape(&value)) else {
        return Err(CustomizationError::InvalidContent(key));
    };

    match (shape, value) {
        (ContentShape::List, Value::Array(items)) => {
            portfolio.custom_data.insert(key, SectionContent::List(items));
        }
        (ContentShape::Object, Value::Object(fields)) => {
            let merged = match portfolio.custom_data.remove(&key) {
                Some(SectionContent::Object(mut existing)) => {
                    existing.extend(fields);
                    existing
                }
                _ => fields,
            };
            portfolio
                .custom_data
                .insert(key, SectionContent::Object(merged));
        }
        (expected, _) => return Err(CustomizationError::ShapeMismatch { key, expected }),
    }

    Ok(())
}
