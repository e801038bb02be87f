//! Organization rule definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How downloaded files are grouped under the base download folder.
///
/// Values that are not recognized are kept as [`OrganizationRule::Unknown`]
/// instead of failing the config load, so the run still downloads files and
/// simply leaves them in the base folder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrganizationRule {
    /// `base/<YYYY-MM-DD>/` (default).
    #[default]
    Date,
    /// `base/<Ext>/`.
    Type,
    /// `base/<Ext>/<YYYY-MM-DD>/`.
    TypeThenDate,
    /// Anything else found in the configuration.
    Unknown(String),
}

impl OrganizationRule {
    pub fn is_known(&self) -> bool {
        !matches!(self, OrganizationRule::Unknown(_))
    }
}

impl fmt::Display for OrganizationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizationRule::Date => write!(f, "date"),
            OrganizationRule::Type => write!(f, "type"),
            OrganizationRule::TypeThenDate => write!(f, "type_then_date"),
            OrganizationRule::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

impl FromStr for OrganizationRule {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "date" => OrganizationRule::Date,
            "type" => OrganizationRule::Type,
            "type_then_date" => OrganizationRule::TypeThenDate,
            other => OrganizationRule::Unknown(other.to_string()),
        })
    }
}

impl From<String> for OrganizationRule {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(rule) => rule,
            Err(never) => match never {},
        }
    }
}

impl From<OrganizationRule> for String {
    fn from(rule: OrganizationRule) -> Self {
        rule.to_string()
    }
}
