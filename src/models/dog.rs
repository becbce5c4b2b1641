//! # Dog Model
//!
//! A registered dog with its two condition-status channels and the
//! per-channel infer-override flags.
//!
//! The engine only ever reads sex, statuses and override flags, and writes
//! statuses. Creation and editing of dogs belongs to the surrounding CRUD
//! layer and is not represented here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{PedigreeError, Result};
use crate::state_machine::{ConditionChannel, ConditionStatus};

/// Sex of a dog, as far as the register knows it.
///
/// The register stores single-letter codes: `D` (dog, sire-capable) and
/// `B` (bitch, dam-capable). Anything else is treated as unknown rather
/// than rejected; dogs of unknown sex are simply skipped by the
/// propagators, which cannot tell which parent role to query for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Unknown,
}

impl Sex {
    /// Decode the register's single-letter sex code (lenient)
    pub fn from_code(code: &str) -> Self {
        match code {
            "D" => Self::Male,
            "B" => Self::Female,
            _ => Self::Unknown,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Male => "D",
            Self::Female => "B",
            Self::Unknown => "U",
        }
    }
}

/// Raw database row for a dog, statuses still in string form
#[derive(Debug, Clone, FromRow)]
pub struct DogRow {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub slem_status: String,
    pub cecs_status: String,
    pub slem_infer_override: bool,
    pub cecs_infer_override: bool,
}

/// A registered dog with typed statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub sex: Sex,
    pub slem_status: ConditionStatus,
    pub cecs_status: ConditionStatus,
    #[serde(skip)]
    pub slem_infer_override: bool,
    #[serde(skip)]
    pub cecs_infer_override: bool,
}

impl TryFrom<DogRow> for Dog {
    type Error = PedigreeError;

    fn try_from(row: DogRow) -> Result<Dog> {
        let slem_status = row.slem_status.parse().map_err(|_| {
            PedigreeError::data_integrity(format!(
                "dog {} has unrecognized slem status '{}'",
                row.id, row.slem_status
            ))
        })?;
        let cecs_status = row.cecs_status.parse().map_err(|_| {
            PedigreeError::data_integrity(format!(
                "dog {} has unrecognized cecs status '{}'",
                row.id, row.cecs_status
            ))
        })?;

        Ok(Dog {
            id: row.id,
            name: row.name,
            sex: Sex::from_code(&row.gender),
            slem_status,
            cecs_status,
            slem_infer_override: row.slem_infer_override,
            cecs_infer_override: row.cecs_infer_override,
        })
    }
}

impl Dog {
    /// Status on the given channel
    pub fn status(&self, channel: ConditionChannel) -> ConditionStatus {
        match channel {
            ConditionChannel::Slem => self.slem_status,
            ConditionChannel::Cecs => self.cecs_status,
        }
    }

    /// Overwrite the in-memory status on the given channel.
    ///
    /// Callers persist through the store first; this keeps the local copy
    /// in step with what the transaction already holds.
    pub fn set_status(&mut self, channel: ConditionChannel, status: ConditionStatus) {
        match channel {
            ConditionChannel::Slem => self.slem_status = status,
            ConditionChannel::Cecs => self.cecs_status = status,
        }
    }

    /// Whether automated inference is disabled for the given channel
    pub fn infer_override(&self, channel: ConditionChannel) -> bool {
        match channel {
            ConditionChannel::Slem => self.slem_infer_override,
            ConditionChannel::Cecs => self.cecs_infer_override,
        }
    }
}
