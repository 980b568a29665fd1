use storage::Blobs;
use tutor_core::model::{LearningStats, learning_stats, time_spent_learning};

use crate::Clock;
use crate::activity_service::ACTIVITY_KEY;
use crate::bookmark_service::BOOKMARKS_KEY;
use crate::progress_service::PROGRESS_KEY;

/// Read-only statistics views, recomputed from stored state on every call.
#[derive(Clone)]
pub struct StatsService {
    clock: Clock,
    blobs: Blobs,
}

impl StatsService {
    #[must_use]
    pub fn new(clock: Clock, blobs: Blobs) -> Self {
        Self { clock, blobs }
    }

    /// The full statistics view across progress, activity, and bookmarks.
    #[must_use]
    pub fn learning_stats(&self) -> LearningStats {
        learning_stats(
            &self.blobs.read(PROGRESS_KEY),
            &self.blobs.read(ACTIVITY_KEY),
            &self.blobs.read(BOOKMARKS_KEY),
            self.clock.today(),
        )
    }

    /// Estimated minutes spent learning: completed lessons × 15.
    #[must_use]
    pub fn time_spent_learning(&self) -> u32 {
        time_spent_learning(&self.blobs.read(PROGRESS_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_service::ActivityService;
    use crate::bookmark_service::BookmarkService;
    use crate::progress_service::ProgressService;
    use std::sync::Arc;
    use storage::MemoryStore;
    use tutor_core::model::MINUTES_PER_LESSON;
    use tutor_core::time::fixed_clock;

    #[test]
    fn stats_reflect_the_other_services() {
        let blobs = Blobs::new(Arc::new(MemoryStore::new()));
        let clock = fixed_clock();
        let activity = ActivityService::new(clock, blobs.clone());
        let progress = ProgressService::new(clock, blobs.clone(), activity);
        let bookmarks = BookmarkService::new(clock, blobs.clone());
        let stats = StatsService::new(clock, blobs);

        progress.update_lesson_progress("m1", "l1", true, 2);
        progress.update_lesson_progress("m1", "l2", true, 2);
        progress.update_lesson_progress("m2", "l1", true, 3);
        bookmarks.add("m1", None, None);

        let view = stats.learning_stats();
        assert_eq!(view.total_modules_started, 2);
        assert_eq!(view.total_modules_completed, 1);
        assert_eq!(view.total_lessons_completed, 3);
        assert_eq!(view.current_streak, 1);
        assert_eq!(view.time_spent, 3 * MINUTES_PER_LESSON);
        // Three lesson entries plus one module-completed entry.
        assert_eq!(view.total_activities, 4);
        assert_eq!(view.bookmarks_count, 1);

        assert_eq!(stats.time_spent_learning(), 3 * MINUTES_PER_LESSON);
    }

    #[test]
    fn fresh_store_yields_zeroed_stats() {
        let stats = StatsService::new(fixed_clock(), Blobs::new(Arc::new(MemoryStore::new())));
        let view = stats.learning_stats();
        assert_eq!(view.total_modules_started, 0);
        assert_eq!(view.current_streak, 0);
        assert_eq!(stats.time_spent_learning(), 0);
    }
}
