use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::time::local_day;

/// Maximum number of retained activity entries; older entries are evicted.
pub const ACTIVITY_CAPACITY: usize = 50;

//
// ─── ACTIVITY ENTRIES ──────────────────────────────────────────────────────────
//

/// What a recorded activity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    LessonCompleted,
    ModuleCompleted,
    AchievementEarned,
}

/// Immutable record of a single user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

impl ActivityEntry {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ActivityKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            timestamp,
            kind,
        }
    }
}

//
// ─── ACTIVITY LOG ──────────────────────────────────────────────────────────────
//

/// Bounded, newest-first log of user activity.
///
/// This is the shape of the `activity` blob in the state store. Pushing past
/// [`ACTIVITY_CAPACITY`] silently drops the oldest entries at the tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog(Vec<ActivityEntry>);

impl ActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry and truncates the log to capacity.
    pub fn push(&mut self, entry: ActivityEntry) {
        self.0.insert(0, entry);
        self.0.truncate(ACTIVITY_CAPACITY);
    }

    /// All retained entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts consecutive local calendar days with activity, walking
    /// backward from `today` and stopping at the first gap.
    #[must_use]
    pub fn study_streak(&self, today: NaiveDate) -> u32 {
        let days: HashSet<NaiveDate> = self.0.iter().map(|e| local_day(e.timestamp)).collect();

        let mut streak = 0;
        let mut day = today;
        while days.contains(&day) {
            streak += 1;
            match day.pred_opt() {
                Some(previous) => day = previous,
                None => break,
            }
        }
        streak
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
