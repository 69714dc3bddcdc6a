// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Status and free-text filtering over a lead sequence.
//!
//! Both predicates must hold for a lead to be kept. Output preserves input
//! order; nothing is sorted, deduplicated or mutated.

use crate::model::{Lead, LeadStatus};

/// Filter `leads` by an optional status and a raw search term.
///
/// The search term is used as given (no trimming). An empty term matches
/// everything; otherwise its lowercase form must be a substring of the
/// lowercase customer name, id, or address. Date and priority never match.
pub fn filter_leads<'a, I>(leads: I, status: Option<LeadStatus>, search: &str) -> Vec<&'a Lead>
where
    I: IntoIterator<Item = &'a Lead>,
{
    let needle = SearchNeedle::new(search);
    leads
        .into_iter()
        .filter(|lead| matches_status(lead, status) && needle.matches(lead))
        .collect()
}

pub fn matches_status(lead: &Lead, status: Option<LeadStatus>) -> bool {
    status.is_none_or(|wanted| lead.status == wanted)
}

pub fn matches_search(lead: &Lead, search: &str) -> bool {
    SearchNeedle::new(search).matches(lead)
}

/// Lowercased search term, folded once per filter pass.
struct SearchNeedle(Option<String>);

impl SearchNeedle {
    fn new(search: &str) -> Self {
        if search.is_empty() {
            Self(None)
        } else {
            Self(Some(search.to_lowercase()))
        }
    }

    fn matches(&self, lead: &Lead) -> bool {
        let Some(needle) = &self.0 else {
            return true;
        };
        [
            lead.customer_name.as_str(),
            lead.id.as_str(),
            lead.address.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}
