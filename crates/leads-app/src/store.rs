// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::collections::BTreeSet;

use crate::ids::LeadId;
use crate::model::{Lead, LeadPriority, LeadStatus};

/// Read-only, ordered set of leads with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new(leads: Vec<Lead>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for lead in &leads {
            if !seen.insert(lead.id.clone()) {
                bail!("duplicate lead id {}; ids must be unique", lead.id);
            }
            if lead.customer_name.trim().is_empty() {
                bail!("lead {} has an empty customer name", lead.id);
            }
            if lead.address.trim().is_empty() {
                bail!("lead {} has an empty address", lead.id);
            }
        }
        tracing::debug!(count = leads.len(), "lead store loaded");
        Ok(Self { leads })
    }

    /// The compiled-in lead set, checked like any other input.
    pub fn fixture() -> Result<Self> {
        let leads = FIXTURE
            .iter()
            .map(FixtureRow::to_lead)
            .collect::<Result<Vec<_>>>()?;
        Self::new(leads)
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn into_leads(self) -> Vec<Lead> {
        self.leads
    }
}

struct FixtureRow {
    id: &'static str,
    customer_name: &'static str,
    address: &'static str,
    date: &'static str,
    status: LeadStatus,
    priority: LeadPriority,
}

impl FixtureRow {
    fn to_lead(&self) -> Result<Lead> {
        let Some(id) = LeadId::parse(self.id) else {
            bail!("fixture row {:?} has a malformed lead id", self.id);
        };
        Ok(Lead {
            id,
            customer_name: self.customer_name.to_owned(),
            address: self.address.to_owned(),
            date: self.date.to_owned(),
            status: self.status,
            priority: self.priority,
        })
    }
}

const FIXTURE: [FixtureRow; 5] = [
    FixtureRow {
        id: "FT-000932",
        customer_name: "Rajesh Reddy",
        address: "Plot 45, Banjara Hills, Hyderabad - 500034",
        date: "13 Oct 2024, 14:11",
        status: LeadStatus::Active,
        priority: LeadPriority::High,
    },
    FixtureRow {
        id: "FT-002263",
        customer_name: "Priya Sharma",
        address: "205, Jubilee Hills, Road No. 36, Hyderabad - 500033",
        date: "14 Oct 2024, 09:12",
        status: LeadStatus::InProgress,
        priority: LeadPriority::Medium,
    },
    FixtureRow {
        id: "FT-003317",
        customer_name: "Venkat Rao",
        address: "12-3-456, Begumpet, Hyderabad - 500016",
        date: "13 Oct 2024, 23:06",
        status: LeadStatus::InProgress,
        priority: LeadPriority::Low,
    },
    FixtureRow {
        id: "FT-003318",
        customer_name: "Sanjay Gupta",
        address: "78, Kukatpally Housing Board, Hyderabad - 500072",
        date: "15 Oct 2024, 10:30",
        status: LeadStatus::Completed,
        priority: LeadPriority::High,
    },
    FixtureRow {
        id: "FT-003319",
        customer_name: "Lakshmi Devi",
        address: "34-67-89, Madhapur, Cyberabad, Hyderabad - 500081",
        date: "15 Oct 2024, 15:45",
        status: LeadStatus::Active,
        priority: LeadPriority::Medium,
    },
];
