// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use leads_app::{Lead, LeadId, LeadPriority, LeadStatus, LeadStore};
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, Time};

const FIRST_NAMES: [&str; 16] = [
    "Rajesh", "Priya", "Venkat", "Sanjay", "Lakshmi", "Anil", "Kavya", "Suresh", "Divya", "Arjun",
    "Meena", "Ravi", "Sneha", "Kiran", "Pooja", "Naveen",
];
const LAST_NAMES: [&str; 14] = [
    "Reddy", "Sharma", "Rao", "Gupta", "Devi", "Kumar", "Naidu", "Iyer", "Patel", "Varma",
    "Menon", "Singh", "Prasad", "Chowdary",
];

const LOCALITIES: [&str; 14] = [
    "Banjara Hills",
    "Jubilee Hills",
    "Begumpet",
    "Kukatpally",
    "Madhapur",
    "Gachibowli",
    "Kondapur",
    "Ameerpet",
    "Secunderabad",
    "Miyapur",
    "Tolichowki",
    "Manikonda",
    "Uppal",
    "Dilsukhnagar",
];
const CITIES: [&str; 4] = ["Hyderabad", "Cyberabad", "Bengaluru", "Chennai"];
const STREET_KINDS: [&str; 5] = ["Road No.", "Plot", "Lane", "Street", "Colony"];

const STATUSES: [LeadStatus; 3] = LeadStatus::ALL;
const PRIORITIES: [LeadPriority; 3] = LeadPriority::ALL;

const REFERENCE_YEAR: i32 = 2024;
const FIRST_LEAD_NUMBER: u32 = 900;
const MAX_LEAD_NUMBER: u32 = 999_999;
const MAX_ID_STEP: usize = 400;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of plausible leads. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct LeadFaker {
    rng: DeterministicRng,
    next_number: u32,
}

impl LeadFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_number: FIRST_LEAD_NUMBER,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    /// Next lead. Ids strictly increase until the six-digit space runs out,
    /// then restart from the bottom.
    pub fn lead(&mut self) -> Lead {
        Lead {
            id: self.next_id(),
            customer_name: format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES)),
            address: self.address(),
            date: self.display_date(),
            status: STATUSES[self.rng.int_n(STATUSES.len())],
            priority: PRIORITIES[self.rng.int_n(PRIORITIES.len())],
        }
    }

    pub fn leads(&mut self, count: usize) -> Vec<Lead> {
        (0..count).map(|_| self.lead()).collect()
    }

    pub fn store(&mut self, count: usize) -> Result<LeadStore> {
        LeadStore::new(self.leads(count)).context("build generated lead store")
    }

    pub fn status(&mut self) -> LeadStatus {
        STATUSES[self.rng.int_n(STATUSES.len())]
    }

    /// A search term drawn from one of the searchable fields of `lead`, with
    /// randomized casing, or a term unlikely to match anything.
    pub fn search_term_for(&mut self, lead: &Lead) -> String {
        let source = match self.rng.int_n(4) {
            0 => lead.customer_name.clone(),
            1 => lead.id.to_string(),
            2 => lead.address.clone(),
            _ => return format!("zq{}x", self.rng.int_n(10_000)),
        };
        let chars: Vec<char> = source.chars().collect();
        let start = self.rng.int_n(chars.len());
        let len = 1 + self.rng.int_n((chars.len() - start).min(6));
        chars[start..start + len]
            .iter()
            .map(|ch| {
                if self.rng.bool() {
                    ch.to_ascii_uppercase()
                } else {
                    ch.to_ascii_lowercase()
                }
            })
            .collect()
    }

    pub fn display_date(&mut self) -> String {
        let start = midnight_utc(REFERENCE_YEAR, Month::January, 1);
        let offset = Duration::minutes(self.rng.int_n(366 * 24 * 60) as i64);
        format_display_date(start + offset)
    }

    fn next_id(&mut self) -> LeadId {
        if self.next_number >= MAX_LEAD_NUMBER {
            self.next_number = 0;
        }
        let headroom = (MAX_LEAD_NUMBER - self.next_number) as usize;
        self.next_number += 1 + self.rng.int_n(headroom.min(MAX_ID_STEP)) as u32;
        LeadId::from_number(self.next_number).expect("lead number capped at six digits")
    }

    fn address(&mut self) -> String {
        let number = 1 + self.rng.int_n(300);
        let kind = self.pick(&STREET_KINDS);
        let locality = self.pick(&LOCALITIES);
        let city = self.pick(&CITIES);
        let pin = 500_001 + self.rng.int_n(99);
        format!("{number}, {kind} {}, {locality}, {city} - {pin}", 1 + self.rng.int_n(40))
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

/// Formats like the fixture dates, e.g. `13 Oct 2024, 14:11`.
pub fn format_display_date(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[day] [month repr:short] [year], [hour]:[minute]"
    ))
    .unwrap_or_default()
}

fn midnight_utc(year: i32, month: Month, day: u8) -> OffsetDateTime {
    let date = Date::from_calendar_date(year, month, day).expect("valid calendar date");
    date.with_time(Time::MIDNIGHT).assume_utc()
}
