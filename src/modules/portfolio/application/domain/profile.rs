use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
        }
    }
}

impl FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PlanTier::Free),
            "pro" => Ok(PlanTier::Pro),
            other => Err(format!("unknown plan tier: {other}")),
        }
    }
}

/// Read-only view of an owner's profile, the input of auto-fill.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub professional_title: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<Value>,
    pub education: Vec<Value>,
    pub certifications: Vec<Value>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub social_links: Map<String, Value>,
    pub profile_picture: Option<String>,
    pub plan: PlanTier,
}

impl UserProfile {
    pub fn is_pro(&self) -> bool {
        self.plan == PlanTier::Pro
    }
}
