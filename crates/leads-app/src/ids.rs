// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const LEAD_ID_PREFIX: &str = "FT-";
const LEAD_ID_DIGITS: usize = 6;
const LEAD_ID_LIMIT: u32 = 1_000_000;

/// Lead identifier of the form `FT-######`. Also the detail route key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadId(String);

impl LeadId {
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix(LEAD_ID_PREFIX)?;
        if digits.len() != LEAD_ID_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(value.to_owned()))
    }

    pub fn from_number(number: u32) -> Option<Self> {
        if number >= LEAD_ID_LIMIT {
            return None;
        }
        Some(Self(format!("{LEAD_ID_PREFIX}{number:06}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LeadId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LeadId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid lead id {raw:?}; expected FT-######"))
        })
    }
}
