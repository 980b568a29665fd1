#[cfg(test)]
pub(crate) use catalog::test_support;

mod activity;
mod bookmark;
mod catalog;
mod export;
mod progress;
mod stats;

pub use activity::{ACTIVITY_CAPACITY, ActivityEntry, ActivityKind, ActivityLog};
pub use bookmark::{Bookmark, BookmarkList};
pub use catalog::{
    CatalogStats, Difficulty, LessonKind, ModuleCategory, SearchHitKind, SearchResult,
    SectionKind, TutorialLesson, TutorialModule, TutorialSection, estimated_read_time,
    filter_by_category, filter_by_tags, module_stats, next_module, prerequisite_modules,
    previous_module, sort_by_difficulty,
};
pub use export::{ExportDocument, ImportDocument};
pub use progress::{ModuleProgress, OverallProgress, ProgressMap, overall_progress};
pub use stats::{LearningStats, MINUTES_PER_LESSON, learning_stats, time_spent_learning};
