use chrono::NaiveDate;
use serde::Serialize;

use crate::model::activity::ActivityLog;
use crate::model::bookmark::BookmarkList;
use crate::model::progress::ProgressMap;

/// Heuristic minutes of study credited per completed lesson.
///
/// Time spent is an estimate derived from completion counts, not a
/// wall-clock measurement.
pub const MINUTES_PER_LESSON: u32 = 15;

/// Derived learning statistics, recomputed from stored state on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub total_modules_started: usize,
    pub total_modules_completed: usize,
    pub total_lessons_completed: usize,
    pub current_streak: u32,
    /// Estimated minutes spent learning.
    pub time_spent: u32,
    pub total_activities: usize,
    pub bookmarks_count: usize,
}

/// Estimated total minutes spent learning across all modules.
#[must_use]
pub fn time_spent_learning(progress: &ProgressMap) -> u32 {
    let completed: usize = progress.values().map(|p| p.lessons_completed()).sum();
    minutes_for(completed)
}

/// Saturates rather than overflowing on absurd completion counts.
fn minutes_for(completed: usize) -> u32 {
    u32::try_from(completed)
        .unwrap_or(u32::MAX)
        .saturating_mul(MINUTES_PER_LESSON)
}

/// Assembles the statistics view from state snapshots.
#[must_use]
pub fn learning_stats(
    progress: &ProgressMap,
    activity: &ActivityLog,
    bookmarks: &BookmarkList,
    today: NaiveDate,
) -> LearningStats {
    LearningStats {
        total_modules_started: progress.len(),
        total_modules_completed: progress.values().filter(|p| p.completed).count(),
        total_lessons_completed: progress.values().map(|p| p.lessons_completed()).sum(),
        current_streak: activity.study_streak(today),
        time_spent: time_spent_learning(progress),
        total_activities: activity.len(),
        bookmarks_count: bookmarks.len(),
    }
}
