//! HTTP redirect policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_variant, ParseVariantError};

/// How a client should react to 3xx responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Redirects {
    /// Follow redirects if the underlying transport can
    #[default]
    FollowWhenPossible,
    /// Always follow redirects; transports that cannot must refuse the setting
    Follow,
    /// Never follow redirects
    DontFollow,
}

impl Redirects {
    /// Map an optionally resolved policy to the one a client should apply
    pub fn of(redirects: Option<Redirects>) -> Self {
        redirects.unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Redirects::FollowWhenPossible => "follow-when-possible",
            Redirects::Follow => "follow",
            Redirects::DontFollow => "dont-follow",
        }
    }
}

impl fmt::Display for Redirects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Redirects {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "follow-when-possible" => Ok(Redirects::FollowWhenPossible),
            "follow" => Ok(Redirects::Follow),
            "dont-follow" | "do-not-follow" => Ok(Redirects::DontFollow),
            _ => Err(ParseVariantError::new("redirect policy", s)),
        }
    }
}

impl TryFrom<String> for Redirects {
    type Error = ParseVariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
