// src/models/review.rs
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A client testimonial as stored in the `client_reviews` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: String,                // Assigned by the store on insert
    pub client_name: String,
    pub review_text: String,
    pub rating: u8,                // 1-5 by convention, the table does not enforce it
    pub created_at: DateTime<Utc>, // Assigned by the store, never patched
}

impl Review {
    /// One flag per star slot, `true` for the filled ones.
    pub fn stars(&self) -> [bool; Rating::MAX as usize] {
        star_slots(self.rating)
    }

    /// Short date shown next to a review, e.g. `5/1/2024`, in the viewer's
    /// local time zone.
    pub fn display_date(&self) -> String {
        self.display_date_in(&Local)
    }

    pub fn display_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.created_at.with_timezone(tz).format("%-m/%-d/%Y").to_string()
    }

    /// The editable fields of this review.
    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            client_name: self.client_name.clone(),
            review_text: self.review_text.clone(),
            rating: self.rating,
        }
    }
}

pub fn star_slots(rating: u8) -> [bool; Rating::MAX as usize] {
    let filled = rating.min(Rating::MAX) as usize;
    let mut slots = [false; Rating::MAX as usize];
    for slot in slots.iter_mut().take(filled) {
        *slot = true;
    }
    slots
}

/// Insert payload and update patch. `id` and `created_at` are never part of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub client_name: String,
    pub review_text: String,
    pub rating: u8,
}

/// Rating picked in the admin form, limited to the selectable set 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Option label in the rating select, "1 Star" / "4 Stars".
    pub fn label(self) -> String {
        if self.0 > 1 {
            format!("{} Stars", self.0)
        } else {
            format!("{} Star", self.0)
        }
    }

    /// Parses the value of the rating `<select>`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(Self::MAX)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
