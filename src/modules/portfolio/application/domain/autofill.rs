//! Builds initial `customData` for a new portfolio.

use serde_json::{json, Map, Value};

use super::content::{CustomData, SectionContent};
use super::profile::UserProfile;
use crate::modules::template::application::domain::entities::{
    SectionKind, Template, TemplateSection,
};

const DEFAULT_NAME: &str = "Your Name";
const DEFAULT_TITLE: &str = "Your Professional Title";
const DEFAULT_DESCRIPTION: &str = "Welcome to my portfolio";
const DEFAULT_PROFICIENCY: &str = "intermediate";

/// Content for every template section derived from the owner's profile.
pub fn generate(profile: &UserProfile, template: &Template) -> CustomData {
    let mut data = CustomData::new();
    for section in &template.sections {
        data.insert(section.kind.as_str(), content_for(profile, &section.kind));
    }
    data
}

/// Content seeded from each section's `defaultContent`, or the empty value
/// of its shape when the default does not fit.
pub fn blank(template: &Template) -> CustomData {
    let mut data = CustomData::new();
    for section in &template.sections {
        data.insert(section.kind.as_str(), default_content(section));
    }
    data
}

fn default_content(section: &TemplateSection) -> SectionContent {
    let shape = section.kind.shape();
    section
        .default_content
        .clone()
        .and_then(|value| SectionContent::from_value(value, shape))
        .unwrap_or_else(|| SectionContent::empty(shape))
}

fn content_for(profile: &UserProfile, kind: &SectionKind) -> SectionContent {
    match kind {
        SectionKind::Hero => object(json!({
            "name": non_empty(Some(&profile.full_name), DEFAULT_NAME),
            "title": non_empty(profile.professional_title.as_ref(), DEFAULT_TITLE),
            "description": non_empty(profile.bio.as_ref(), DEFAULT_DESCRIPTION),
            "profileImage": profile.profile_picture.clone().unwrap_or_default(),
            "email": profile.email,
            "location": profile.location.clone().unwrap_or_default(),
            "socialLinks": profile.social_links,
        })),
        SectionKind::About => object(json!({
            "description": profile.bio.clone().unwrap_or_default(),
            "skills": profile.skills,
            "experience": profile.experience,
            "education": profile.education,
            "phone": profile.phone.clone().unwrap_or_default(),
            "location": profile.location.clone().unwrap_or_default(),
            "website": profile.website.clone().unwrap_or_default(),
        })),
        SectionKind::Contact => object(json!({
            "email": profile.email,
            "phone": profile.phone.clone().unwrap_or_default(),
            "location": profile.location.clone().unwrap_or_default(),
            "socialLinks": profile.social_links,
            "website": profile.website.clone().unwrap_or_default(),
        })),
        SectionKind::Projects => SectionContent::List(Vec::new()),
        SectionKind::Skills => SectionContent::List(
            profile
                .skills
                .iter()
                .map(|skill| json!({ "skillName": skill, "proficiency": DEFAULT_PROFICIENCY }))
                .collect(),
        ),
        SectionKind::Experience => SectionContent::List(profile.experience.clone()),
        SectionKind::Education => SectionContent::List(profile.education.clone()),
        SectionKind::Certifications => SectionContent::List(profile.certifications.clone()),
        other => SectionContent::empty(other.shape()),
    }
}

fn non_empty(value: Option<&String>, fallback: &str) -> String {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn object(value: Value) -> SectionContent {
    match value {
        Value::Object(fields) => SectionContent::Object(fields),
        _ => SectionContent::Object(Map::new()),
    }
}
