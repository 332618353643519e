//! Allowed CORS origins, validated once when configuration loads.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("no CORS origins configured")]
    Empty,

    #[error("`*` cannot be combined with explicit origins")]
    WildcardMixed,

    #[error("invalid CORS origin {0:?}: expected scheme://host[:port]")]
    Invalid(String),
}

/// Either any origin, or an explicit list of `scheme://host[:port]` origins.
///
/// Deserializes from the same comma-separated string [`AllowedOrigins::parse`]
/// accepts, so a bad value fails configuration loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated list; `*` alone allows any origin.
    pub fn parse(raw: &str) -> Result<Self, OriginError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(OriginError::Empty);
        }

        if entries.contains(&"*") {
            return if entries.len() == 1 {
                Ok(AllowedOrigins::Any)
            } else {
                Err(OriginError::WildcardMixed)
            };
        }

        entries
            .into_iter()
            .map(|origin| {
                if is_valid_origin(origin) {
                    Ok(origin.to_string())
                } else {
                    Err(OriginError::Invalid(origin.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(AllowedOrigins::List)
    }
}

impl FromStr for AllowedOrigins {
    type Err = OriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AllowedOrigins {
    type Error = OriginError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigins::Any => f.write_str("*"),
            AllowedOrigins::List(origins) => f.write_str(&origins.join(",")),
        }
    }
}

/// `http(s)://host[:port]` with no path, query, userinfo or whitespace.
fn is_valid_origin(origin: &str) -> bool {
    let Some(authority) = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    else {
        return false;
    };

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    let port_ok = port.map_or(true, |p| !p.is_empty() && p.parse::<u16>().is_ok());

    host_ok && port_ok
}
