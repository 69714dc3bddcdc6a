// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::filter::filter_leads;
use crate::ids::LeadId;
use crate::model::{Lead, LeadStatus};
use crate::route::{Location, NavIntent};

/// View-local list state. The search term lives only here and is lost with
/// the view; the status filter is read from the [`Location`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadListState {
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    InsertChar(char),
    Backspace,
    SetSearch(String),
    ClearSearch,
    ChooseStatus(Option<LeadStatus>),
    OpenLead(LeadId),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    SearchChanged(String),
    Navigate(NavIntent),
}

impl LeadListState {
    pub fn dispatch(&mut self, command: ListCommand) -> Vec<ListEvent> {
        match command {
            ListCommand::InsertChar(ch) => {
                self.search.push(ch);
                vec![self.search_changed()]
            }
            ListCommand::Backspace => {
                if self.search.pop().is_none() {
                    return Vec::new();
                }
                vec![self.search_changed()]
            }
            ListCommand::SetSearch(search) => {
                if search == self.search {
                    return Vec::new();
                }
                self.search = search;
                vec![self.search_changed()]
            }
            ListCommand::ClearSearch => {
                if self.search.is_empty() {
                    return Vec::new();
                }
                self.search.clear();
                vec![self.search_changed()]
            }
            ListCommand::ChooseStatus(status) => {
                vec![ListEvent::Navigate(NavIntent::status_filter(status))]
            }
            ListCommand::OpenLead(id) => vec![ListEvent::Navigate(NavIntent::open_lead(&id))],
            ListCommand::Back => vec![ListEvent::Navigate(NavIntent::dashboard())],
        }
    }

    /// Leads that pass the location's status filter and the local search.
    pub fn visible<'a>(&self, leads: &'a [Lead], location: &Location) -> Vec<&'a Lead> {
        filter_leads(leads, location.status_filter(), &self.search)
    }

    fn search_changed(&self) -> ListEvent {
        ListEvent::SearchChanged(self.search.clone())
    }
}
