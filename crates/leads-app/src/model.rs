// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::LeadId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    Active,
    InProgress,
    Completed,
}

impl LeadStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::InProgress, Self::Completed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-facing name. `active` leads are still awaiting confirmation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Unconfirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

impl LeadPriority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub customer_name: String,
    pub address: String,
    /// Display text only; never parsed.
    pub date: String,
    pub status: LeadStatus,
    pub priority: LeadPriority,
}

#[cfg(test)]
mod tests {
    use super::{LeadPriority, LeadStatus};

    #[test]
    fn status_wire_values_round_trip() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::parse("in_progress"), None);
        assert_eq!(LeadStatus::parse("Active"), None);
    }

    #[test]
    fn status_labels_match_chip_names() {
        assert_eq!(LeadStatus::Active.label(), "Unconfirmed");
        assert_eq!(LeadStatus::InProgress.label(), "In Progress");
        assert_eq!(LeadStatus::Completed.label(), "Completed");
    }

    #[test]
    fn priority_wire_values_round_trip() {
        for priority in LeadPriority::ALL {
            assert_eq!(LeadPriority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(LeadPriority::parse("urgent"), None);
    }

    #[test]
    fn serde_spelling_matches_query_values() -> serde_json::Result<()> {
        for status in LeadStatus::ALL {
            let encoded = serde_json::to_string(&status)?;
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
        }
        let decoded: LeadPriority = serde_json::from_str("\"medium\"")?;
        assert_eq!(decoded, LeadPriority::Medium);
        Ok(())
    }
}
