//! Lead entity, the closed status/contact-method enumerations, and the
//! lead input DTO.
//!
//! Both enumerations are closed tagged variants: unknown strings fail
//! deserialization rather than being stored as-is.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::EntityId;

/// Pipeline position of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
    Won,
}

impl LeadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Lost => "lost",
            Self::Won => "won",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "lost" => Ok(Self::Lost),
            "won" => Ok(Self::Won),
            other => Err(CoreError::Validation(format!(
                "unknown lead status: {other}"
            ))),
        }
    }
}

/// Channel through which a lead was contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    Email,
    X,
    Phone,
    Linkedin,
    Reddit,
    Twitch,
    Kick,
    Instagram,
    Discord,
    Other,
}

/// One logged touchpoint with a lead. Every field is required once the
/// entry exists; the containing list may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Interaction {
    pub method: ContactMethod,
    #[validate(length(min = 1, message = "interaction handle must not be empty"))]
    pub handle: String,
    #[validate(length(min = 1, message = "interaction description must not be empty"))]
    pub description: String,
}

/// A tracked prospect belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl Lead {
    /// Assemble a full entity from a storage-assigned id and accepted input.
    pub fn from_data(id: EntityId, data: LeadData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            status: data.status,
            interactions: data.interactions,
        }
    }
}

/// Input shape for creating or fully overwriting a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LeadData {
    #[validate(length(min = 1, message = "lead name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "lead description must not be empty"))]
    pub description: String,
    pub status: LeadStatus,
    #[serde(default)]
    #[validate(nested)]
    pub interactions: Vec<Interaction>,
}
