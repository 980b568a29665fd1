use storage::Blobs;
use tutor_core::model::{ActivityEntry, ActivityKind, ActivityLog};

use crate::Clock;

/// Store key for the activity blob.
pub(crate) const ACTIVITY_KEY: &str = "activity";

/// Append-only bounded log of user actions.
///
/// Every mutation is a whole-blob read-modify-write so eviction and ordering
/// hold even when several actions land in the same tick.
#[derive(Clone)]
pub struct ActivityService {
    clock: Clock,
    blobs: Blobs,
}

impl ActivityService {
    #[must_use]
    pub fn new(clock: Clock, blobs: Blobs) -> Self {
        Self { clock, blobs }
    }

    /// Records an action, stamped with the service clock.
    pub fn record(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ActivityKind,
    ) {
        let mut log: ActivityLog = self.blobs.read(ACTIVITY_KEY);
        log.push(ActivityEntry::new(title, description, kind, self.clock.now()));
        self.blobs.write(ACTIVITY_KEY, &log);
    }

    /// Retained entries, newest first, capped at the stored 50.
    #[must_use]
    pub fn recent(&self) -> Vec<ActivityEntry> {
        let log: ActivityLog = self.blobs.read(ACTIVITY_KEY);
        log.entries().to_vec()
    }

    /// Consecutive local calendar days with activity, ending today.
    #[must_use]
    pub fn study_streak(&self) -> u32 {
        let log: ActivityLog = self.blobs.read(ACTIVITY_KEY);
        log.study_streak(self.clock.today())
    }

    /// Drops the whole log.
    pub fn clear(&self) {
        self.blobs.remove(ACTIVITY_KEY);
    }
}
