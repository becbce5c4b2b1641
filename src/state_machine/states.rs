use serde::{Deserialize, Serialize};
use std::fmt;

/// Hereditary-condition status of a dog on one channel.
///
/// The string forms are the rows of the register's `ailment_status` lookup
/// table and are used verbatim in the database and over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionStatus {
    /// No information recorded yet
    Unknown,
    /// Lab-confirmed affected
    Affected,
    /// Lab-confirmed carrier
    Carrier,
    /// Lab-confirmed clear
    Clear,
    /// Inferred carrier, from offspring outcomes
    CarrierByProgeny,
    /// Inferred clear, from both parents being clear
    ClearByParentage,
}

impl ConditionStatus {
    /// Check if this status was established by direct testing.
    ///
    /// Lab-confirmed statuses are authoritative: no inference pass may
    /// overwrite them.
    pub fn is_lab_confirmed(&self) -> bool {
        matches!(self, Self::Affected | Self::Carrier | Self::Clear)
    }

    /// Check if this status was produced by the inference engine
    pub fn is_inferred(&self) -> bool {
        matches!(self, Self::CarrierByProgeny | Self::ClearByParentage)
    }

    /// Check if this status counts as clear for propagation purposes
    pub fn counts_as_clear(&self) -> bool {
        matches!(self, Self::Clear | Self::ClearByParentage)
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Affected => write!(f, "Affected"),
            Self::Carrier => write!(f, "Carrier"),
            Self::Clear => write!(f, "Clear"),
            Self::CarrierByProgeny => write!(f, "CarrierByProgeny"),
            Self::ClearByParentage => write!(f, "ClearByParentage"),
        }
    }
}

impl std::str::FromStr for ConditionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unknown" => Ok(Self::Unknown),
            "Affected" => Ok(Self::Affected),
            "Carrier" => Ok(Self::Carrier),
            "Clear" => Ok(Self::Clear),
            "CarrierByProgeny" => Ok(Self::CarrierByProgeny),
            "ClearByParentage" => Ok(Self::ClearByParentage),
            _ => Err(format!("Invalid condition status: {s}")),
        }
    }
}

/// Default status for dogs with no recorded information
impl Default for ConditionStatus {
    fn default() -> Self {
        Self::Unknown
    }
}
