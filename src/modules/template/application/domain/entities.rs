use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Section kinds
// ──────────────────────────────────────────────────────────
//

/// How a section's content is stored inside a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentShape {
    /// A single record (hero, about, contact, ...).
    Object,
    /// An ordered collection of records (projects, skills, ...).
    List,
}

/// The closed registry of section types a template may declare.
///
/// Anything outside the registry is kept as `Custom` so admin-authored
/// templates never fail to load, but it has no renderer component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    About,
    Projects,
    Contact,
    Skills,
    Experience,
    Education,
    Testimonials,
    Services,
    Blog,
    Awards,
    Process,
    Clients,
    Certifications,
    Custom(String),
}

impl SectionKind {
    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Contact => "contact",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Services => "services",
            SectionKind::Blog => "blog",
            SectionKind::Awards => "awards",
            SectionKind::Process => "process",
            SectionKind::Clients => "clients",
            SectionKind::Certifications => "certifications",
            SectionKind::Custom(name) => name,
        }
    }

    pub fn shape(&self) -> ContentShape {
        match self {
            SectionKind::Hero
            | SectionKind::About
            | SectionKind::Contact
            | SectionKind::Custom(_) => ContentShape::Object,
            _ => ContentShape::List,
        }
    }

    /// Whether the renderer has a component for this kind.
    pub fn has_component(&self) -> bool {
        !matches!(
            self,
            SectionKind::Certifications | SectionKind::Custom(_)
        )
    }
}

impl From<String> for SectionKind {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "hero" => SectionKind::Hero,
            "about" => SectionKind::About,
            "projects" => SectionKind::Projects,
            "contact" => SectionKind::Contact,
            "skills" => SectionKind::Skills,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "testimonials" => SectionKind::Testimonials,
            "services" => SectionKind::Services,
            "blog" => SectionKind::Blog,
            "awards" => SectionKind::Awards,
            "process" => SectionKind::Process,
            "clients" => SectionKind::Clients,
            "certifications" => SectionKind::Certifications,
            _ => SectionKind::Custom(value),
        }
    }
}

impl From<&str> for SectionKind {
    fn from(value: &str) -> Self {
        SectionKind::from(value.to_string())
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Template
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Developer,
    Designer,
    Photographer,
    Writer,
    Business,
    Creative,
    Minimal,
    #[default]
    Other,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Developer => "developer",
            TemplateCategory::Designer => "designer",
            TemplateCategory::Photographer => "photographer",
            TemplateCategory::Writer => "writer",
            TemplateCategory::Business => "business",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Other => "other",
        }
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(TemplateCategory::Developer),
            "designer" => Ok(TemplateCategory::Designer),
            "photographer" => Ok(TemplateCategory::Photographer),
            "writer" => Ok(TemplateCategory::Writer),
            "business" => Ok(TemplateCategory::Business),
            "creative" => Ok(TemplateCategory::Creative),
            "minimal" => Ok(TemplateCategory::Minimal),
            "other" => Ok(TemplateCategory::Other),
            other => Err(format!("unknown template category: {other}")),
        }
    }
}

fn default_true() -> bool {
    true
}

/// One typed block of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: SectionKind,

    #[serde(default)]
    pub name: String,

    /// Field names the editor exposes for this section.
    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default)]
    pub layout: Option<String>,

    #[serde(default)]
    pub styling: Map<String, Value>,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default = "default_true")]
    pub is_removable: bool,

    #[serde(default)]
    pub is_repeatable: bool,

    #[serde(default)]
    pub default_content: Option<Value>,
}

impl TemplateSection {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Suggested palette/fonts/layouts shown in the editor. Never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOptions {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub layouts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: TemplateCategory,
    pub is_premium: bool,
    /// Price in cents.
    pub price: i64,
    pub is_active: bool,
    pub preview_image: Option<String>,
    pub sections: Vec<TemplateSection>,
    pub customization_options: CustomizationOptions,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where a section's content lives and which component draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBinding {
    pub section_id: String,
    pub data_key: String,
    pub kind: SectionKind,
}

impl Template {
    pub fn section(&self, section_id: &str) -> Option<&TemplateSection> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Resolution table entry for one section id. The data key is always the
    /// section's type, so every content lookup goes through the same rule.
    pub fn binding(&self, section_id: &str) -> Option<SectionBinding> {
        self.section(section_id).map(|section| SectionBinding {
            section_id: section.id.clone(),
            data_key: section.kind.as_str().to_string(),
            kind: section.kind.clone(),
        })
    }

    /// Content shape declared for a `customData` key, if any section uses it.
    pub fn shape_for(&self, data_key: &str) -> Option<ContentShape> {
        self.sections
            .iter()
            .find(|s| s.kind.as_str() == data_key)
            .map(|s| s.kind.shape())
    }

    /// Ids in `requested` that this template does not declare, in request order.
    pub fn unknown_section_ids(&self, requested: &[String]) -> Vec<String> {
        requested
            .iter()
            .filter(|id| self.section(id).is_none())
            .cloned()
            .collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateValidationError {
    #[error("Template name must not be empty")]
    EmptyName,

    #[error("Template slug must contain at least one letter or digit")]
    EmptySlug,

    #[error("Template price must not be negative")]
    NegativePrice,

    #[error("Template must declare at least one section")]
    NoSections,

    #[error("Section at position {0} has an empty id")]
    EmptySectionId(usize),

    #[error("Section id '{0}' is declared more than once")]
    DuplicateSectionId(String),

    #[error("Section id '{0}' is reserved for a styling group")]
    ReservedSectionId(String),

    #[error("Field '{0}' cannot be null")]
    NullField(&'static str),
}

/// Top-level styling groups. Per-section style overrides share the same map,
/// so no section may use one of these as its id.
pub const STYLE_GROUPS: [&str; 5] = ["colors", "fonts", "spacing", "animations", "layout"];

pub fn validate_sections(sections: &[TemplateSection]) -> Result<(), TemplateValidationError> {
    if sections.is_empty() {
        return Err(TemplateValidationError::NoSections);
    }

    let mut seen = HashSet::new();
    for (index, section) in sections.iter().enumerate() {
        let id = section.id.trim();
        if id.is_empty() {
            return Err(TemplateValidationError::EmptySectionId(index));
        }
        if STYLE_GROUPS.contains(&id) {
            return Err(TemplateValidationError::ReservedSectionId(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(TemplateValidationError::DuplicateSectionId(id.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub fn section(id: &str, kind: &str) -> TemplateSection {
        TemplateSection {
            id: id.to_string(),
            kind: SectionKind::from(kind),
            name: String::new(),
            fields: vec![],
            layout: None,
            styling: Map::new(),
            is_required: false,
            is_removable: true,
            is_repeatable: false,
            default_content: None,
        }
    }

    pub fn template_with(sections: Vec<TemplateSection>) -> Template {
        Template {
            id: Uuid::new_v4(),
            name: "Starter".to_string(),
            slug: "starter".to_string(),
            description: "A starter template".to_string(),
            category: TemplateCategory::Developer,
            is_premium: false,
            price: 0,
            is_active: true,
            preview_image: None,
            sections,
            customization_options: CustomizationOptions::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn registry_kinds_parse_case_insensitively() {
        assert_eq!(SectionKind::from("Hero"), SectionKind::Hero);
        assert_eq!(SectionKind::from(" skills "), SectionKind::Skills);
        assert_eq!(
            SectionKind::from("gallery"),
            SectionKind::Custom("gallery".to_string())
        );
    }

    #[test]
    fn singular_kinds_are_objects_and_repeatables_are_lists() {
        assert_eq!(SectionKind::Hero.shape(), ContentShape::Object);
        assert_eq!(SectionKind::Contact.shape(), ContentShape::Object);
        assert_eq!(SectionKind::Projects.shape(), ContentShape::List);
        assert_eq!(SectionKind::Certifications.shape(), ContentShape::List);
        assert_eq!(
            SectionKind::Custom("x".into()).shape(),
            ContentShape::Object
        );
    }

    #[test]
    fn certifications_and_custom_have_no_component() {
        assert!(SectionKind::Clients.has_component());
        assert!(!SectionKind::Certifications.has_component());
        assert!(!SectionKind::Custom("gallery".into()).has_component());
    }

    #[test]
    fn section_deserializes_with_defaults() {
        let section: TemplateSection = serde_json::from_value(json!({
            "id": "hero",
            "type": "hero"
        }))
        .unwrap();

        assert_eq!(section.kind, SectionKind::Hero);
        assert!(section.is_removable);
        assert!(!section.is_required);
        assert!(section.styling.is_empty());
    }

    #[test]
    fn section_rejects_non_object_styling() {
        let result: Result<TemplateSection, _> = serde_json::from_value(json!({
            "id": "hero",
            "type": "hero",
            "styling": "red"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn binding_maps_section_id_to_its_type() {
        let template = template_with(vec![section("portfolio", "projects")]);

        let binding = template.binding("portfolio").unwrap();

        assert_eq!(binding.data_key, "projects");
        assert_eq!(binding.kind, SectionKind::Projects);
        assert!(template.binding("missing").is_none());
    }

    #[test]
    fn unknown_section_ids_keeps_request_order() {
        let template = template_with(vec![section("hero", "hero"), section("contact", "contact")]);

        let unknown = template.unknown_section_ids(&[
            "zeta".to_string(),
            "hero".to_string(),
            "bogus".to_string(),
        ]);

        assert_eq!(unknown, vec!["zeta".to_string(), "bogus".to_string()]);
    }

    #[test]
    fn shape_for_uses_declared_section_type() {
        let template = template_with(vec![section("intro", "hero"), section("work", "projects")]);

        assert_eq!(template.shape_for("hero"), Some(ContentShape::Object));
        assert_eq!(template.shape_for("projects"), Some(ContentShape::List));
        assert_eq!(template.shape_for("skills"), None);
    }

    #[test]
    fn validate_sections_rejects_duplicates_and_blanks() {
        assert_eq!(
            validate_sections(&[]),
            Err(TemplateValidationError::NoSections)
        );
        assert_eq!(
            validate_sections(&[section("hero", "hero"), section(" ", "about")]),
            Err(TemplateValidationError::EmptySectionId(1))
        );
        assert_eq!(
            validate_sections(&[section("hero", "hero"), section("hero", "about")]),
            Err(TemplateValidationError::DuplicateSectionId("hero".into()))
        );
        assert!(validate_sections(&[section("hero", "hero"), section("about", "about")]).is_ok());
    }

    #[test]
    fn validate_sections_rejects_styling_group_ids() {
        for group in STYLE_GROUPS {
            assert_eq!(
                validate_sections(&[section("hero", "hero"), section(group, "custom")]),
                Err(TemplateValidationError::ReservedSectionId(group.to_string()))
            );
        }
        assert!(validate_sections(&[section("colorful", "custom")]).is_ok());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            TemplateCategory::Developer,
            TemplateCategory::Minimal,
            TemplateCategory::Other,
        ] {
            assert_eq!(category.as_str().parse::<TemplateCategory>(), Ok(category));
        }
        assert!("unknown".parse::<TemplateCategory>().is_err());
    }
}
