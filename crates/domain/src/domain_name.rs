//! Fully-qualified domain names.
//!
//! Every name handed to the resolver ends with the root label (`.`).
//! Names given without it are completed, so `example.com` and
//! `example.com.` are the same target.

use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        if trimmed == "." {
            return Ok(Self(Arc::from(".")));
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if relative.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{} is longer than {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "{} contains an empty label",
                    trimmed
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is longer than {} characters",
                    label, MAX_LABEL_LEN
                )));
            }
        }

        Ok(Self(Arc::from(format!("{}.", relative))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
