use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independently tracked hereditary conditions.
///
/// Both channels run the same status machine; a batch infers over exactly
/// one of them. The register historically only ran inference on SLEM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionChannel {
    /// SLEM ("shaking dog" syndrome)
    Slem,
    /// CECS
    Cecs,
}

impl fmt::Display for ConditionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slem => write!(f, "slem"),
            Self::Cecs => write!(f, "cecs"),
        }
    }
}

impl std::str::FromStr for ConditionChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slem" => Ok(Self::Slem),
            "cecs" => Ok(Self::Cecs),
            _ => Err(format!("Invalid condition channel: {s}")),
        }
    }
}

impl Default for ConditionChannel {
    fn default() -> Self {
        Self::Slem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_string_conversion() {
        assert_eq!(ConditionChannel::Slem.to_string(), "slem");
        assert_eq!(
            "cecs".parse::<ConditionChannel>().unwrap(),
            ConditionChannel::Cecs
        );
        assert!("slem2".parse::<ConditionChannel>().is_err());
    }

    #[test]
    fn test_channel_serde() {
        let json = serde_json::to_string(&ConditionChannel::Cecs).unwrap();
        assert_eq!(json, "\"cecs\"");
    }
}
