//! Row for the `leads` table.

use sqlx::FromRow;
use uuid::Uuid;

use crate::store::StoreError;
use leadlink_core::lead::{Interaction, Lead, LeadStatus};

/// A lead row. Status is stored as its canonical string; interactions are
/// stored as a JSONB array.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: String,
    pub interactions: serde_json::Value,
}

impl TryFrom<LeadRow> for Lead {
    type Error = StoreError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        let status: LeadStatus = row
            .status
            .parse()
            .map_err(|_| StoreError(format!("lead {} has corrupt status {:?}", row.id, row.status)))?;
        let interactions: Vec<Interaction> = serde_json::from_value(row.interactions)
            .map_err(|e| StoreError(format!("lead {} has corrupt interactions: {e}", row.id)))?;
        Ok(Lead {
            id: row.id,
            name: row.name,
            description: row.description,
            status,
            interactions,
        })
    }
}
