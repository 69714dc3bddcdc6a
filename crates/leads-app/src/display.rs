// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Duration;

use crate::model::{LeadPriority, LeadStatus};

pub const SEARCH_PLACEHOLDER: &str = "Search leads...";
pub const EMPTY_STATE_MESSAGE: &str = "No leads found matching your criteria.";

/// Visual token shared by status badges and priority markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Danger,
    Warning,
    Info,
    Success,
    Muted,
}

/// Badge tone for a status wire value. Unknown values get `Tone::Muted`.
pub fn status_badge_tone(status: &str) -> Tone {
    match LeadStatus::parse(status) {
        Some(LeadStatus::Active) => Tone::Danger,
        Some(LeadStatus::InProgress) => Tone::Info,
        Some(LeadStatus::Completed) => Tone::Success,
        None => Tone::Muted,
    }
}

/// Marker tone for a priority wire value. Unknown values get `Tone::Muted`.
pub fn priority_tone(priority: &str) -> Tone {
    match LeadPriority::parse(priority) {
        Some(LeadPriority::High) => Tone::Danger,
        Some(LeadPriority::Medium) => Tone::Warning,
        Some(LeadPriority::Low) => Tone::Success,
        None => Tone::Muted,
    }
}

pub fn status_label(status: LeadStatus) -> &'static str {
    status.label()
}

impl LeadStatus {
    pub fn badge_tone(self) -> Tone {
        status_badge_tone(self.as_str())
    }
}

impl LeadPriority {
    pub fn tone(self) -> Tone {
        priority_tone(self.as_str())
    }
}

/// One entry of the status chip row. `value == None` is the "All" chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChip {
    pub label: &'static str,
    pub value: Option<LeadStatus>,
}

impl StatusChip {
    pub const ALL: [Self; 4] = [
        Self {
            label: "All",
            value: None,
        },
        Self {
            label: LeadStatus::Active.label(),
            value: Some(LeadStatus::Active),
        },
        Self {
            label: LeadStatus::InProgress.label(),
            value: Some(LeadStatus::InProgress),
        },
        Self {
            label: LeadStatus::Completed.label(),
            value: Some(LeadStatus::Completed),
        },
    ];

    pub fn is_selected(self, current: Option<LeadStatus>) -> bool {
        self.value == current
    }

    pub fn position(current: Option<LeadStatus>) -> usize {
        Self::ALL
            .iter()
            .position(|chip| chip.is_selected(current))
            .unwrap_or(0)
    }
}

pub fn list_title(visible: usize) -> String {
    format!("Leads ({visible})")
}

/// Render an elapsed duration as `"1 day, 11 hours, 12 minutes ago"`.
pub fn format_since(elapsed: Duration) -> String {
    let days = elapsed.whole_days();
    let hours = elapsed.whole_hours() - days * 24;
    let minutes = elapsed.whole_minutes() - elapsed.whole_hours() * 60;

    let parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| {
            if count == 1 {
                format!("{count} {unit}")
            } else {
                format!("{count} {unit}s")
            }
        })
        .collect();

    if parts.is_empty() {
        "just now".to_owned()
    } else {
        format!("{} ago", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        StatusChip, Tone, format_since, list_title, priority_tone, status_badge_tone,
        status_label,
    };
    use crate::{LeadPriority, LeadStatus};
    use std::collections::BTreeSet;
    use time::Duration;

    #[test]
    fn status_tones_are_distinct_with_muted_fallback() {
        let tones: Vec<Tone> = LeadStatus::ALL.iter().map(|s| s.badge_tone()).collect();
        assert_eq!(tones, vec![Tone::Danger, Tone::Info, Tone::Success]);
        assert_eq!(status_badge_tone("archived"), Tone::Muted);
        assert_eq!(status_badge_tone(""), Tone::Muted);
    }

    #[test]
    fn priority_tones_are_distinct_with_muted_fallback() {
        let tones: Vec<Tone> = LeadPriority::ALL.iter().map(|p| p.tone()).collect();
        assert_eq!(tones, vec![Tone::Danger, Tone::Warning, Tone::Success]);
        assert_eq!(priority_tone("urgent"), Tone::Muted);
    }

    #[test]
    fn mappings_are_stable_across_calls() {
        for status in LeadStatus::ALL {
            assert_eq!(status_label(status), status_label(status));
            assert_eq!(status.badge_tone(), status_badge_tone(status.as_str()));
        }
    }

    #[test]
    fn chips_cover_all_plus_each_status() {
        let labels: Vec<&str> = StatusChip::ALL.iter().map(|chip| chip.label).collect();
        assert_eq!(labels, vec!["All", "Unconfirmed", "In Progress", "Completed"]);

        let values: BTreeSet<Option<&str>> = StatusChip::ALL
            .iter()
            .map(|chip| chip.value.map(LeadStatus::as_str))
            .collect();
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn chip_selection_follows_current_filter() {
        assert_eq!(StatusChip::position(None), 0);
        assert_eq!(StatusChip::position(Some(LeadStatus::Completed)), 3);
        assert!(StatusChip::ALL[1].is_selected(Some(LeadStatus::Active)));
        assert!(!StatusChip::ALL[0].is_selected(Some(LeadStatus::Active)));
    }

    #[test]
    fn format_since_spells_out_units() {
        let elapsed = Duration::days(1) + Duration::hours(11) + Duration::minutes(12);
        assert_eq!(format_since(elapsed), "1 day, 11 hours, 12 minutes ago");
        assert_eq!(format_since(Duration::hours(2)), "2 hours ago");
        assert_eq!(
            format_since(Duration::days(3) + Duration::minutes(1)),
            "3 days, 1 minute ago"
        );
    }

    #[test]
    fn format_since_under_a_minute_is_just_now() {
        assert_eq!(format_since(Duration::seconds(59)), "just now");
        assert_eq!(format_since(Duration::seconds(-30)), "just now");
    }

    #[test]
    fn list_title_counts_visible_leads() {
        assert_eq!(list_title(5), "Leads (5)");
        assert_eq!(list_title(0), "Leads (0)");
    }
}
