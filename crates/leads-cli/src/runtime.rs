// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use leads_app::{Lead, LeadStore};
use time::OffsetDateTime;

/// Serves leads from an in-memory store. The sync time is fixed when the
/// runtime is built and reported on every refresh.
pub struct FixtureRuntime {
    store: LeadStore,
    synced_at: OffsetDateTime,
}

impl FixtureRuntime {
    pub fn new(store: LeadStore) -> Self {
        Self::with_synced_at(store, OffsetDateTime::now_utc())
    }

    pub fn with_synced_at(store: LeadStore, synced_at: OffsetDateTime) -> Self {
        Self { store, synced_at }
    }
}

impl leads_tui::LeadRuntime for FixtureRuntime {
    fn load_leads(&mut self) -> Result<Vec<Lead>> {
        tracing::debug!(count = self.store.len(), "loading leads");
        Ok(self.store.leads().to_vec())
    }

    fn last_synced_at(&mut self) -> Result<Option<OffsetDateTime>> {
        Ok(Some(self.synced_at))
    }
}
