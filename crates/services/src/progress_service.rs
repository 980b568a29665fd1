use storage::Blobs;
use tutor_core::model::{
    ActivityKind, ModuleProgress, OverallProgress, ProgressMap, TutorialModule, overall_progress,
};

use crate::Clock;
use crate::activity_service::ActivityService;

/// Store key for the progress blob.
pub(crate) const PROGRESS_KEY: &str = "progress";

/// The progress engine: rolls lesson-completion events into per-module
/// records and derives catalog-wide aggregates.
///
/// Mutations load the full progress map, mutate it in memory, and write the
/// whole map back in a single store call. Lesson and module completion
/// transitions are mirrored into the activity log.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    blobs: Blobs,
    activity: ActivityService,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, blobs: Blobs, activity: ActivityService) -> Self {
        Self {
            clock,
            blobs,
            activity,
        }
    }

    /// Stored progress for one module, if the user has touched it.
    #[must_use]
    pub fn module_progress(&self, module_id: &str) -> Option<ModuleProgress> {
        let mut all = self.all_progress();
        all.remove(module_id)
    }

    /// All stored progress records keyed by module id.
    #[must_use]
    pub fn all_progress(&self) -> ProgressMap {
        self.blobs.read(PROGRESS_KEY)
    }

    /// Applies a lesson-completion event and returns the updated record.
    ///
    /// The module record is created lazily on first touch. Completion is
    /// one-way: `completed == false` never removes a recorded lesson, it
    /// only refreshes the derived fields and `last_accessed`. A
    /// `lesson_completed` activity entry is emitted when the lesson is
    /// first recorded, and a `module_completed` entry when this event flips
    /// the module to complete; repeat calls emit nothing.
    pub fn update_lesson_progress(
        &self,
        module_id: &str,
        lesson_id: &str,
        completed: bool,
        total_lessons: usize,
    ) -> ModuleProgress {
        let now = self.clock.now();
        let mut all = self.all_progress();
        let record = all
            .entry(module_id.to_owned())
            .or_insert_with(|| ModuleProgress::new(module_id, now));

        let was_completed = record.completed;
        let newly_recorded = completed && record.record_completion(lesson_id);
        record.recompute(total_lessons);
        record.touch(now);
        let flipped_complete = !was_completed && record.completed;
        let snapshot = record.clone();

        self.blobs.write(PROGRESS_KEY, &all);

        if newly_recorded {
            self.activity.record(
                "Lesson Completed",
                format!("Completed lesson in module {module_id}"),
                ActivityKind::LessonCompleted,
            );
        }
        if flipped_complete {
            self.activity.record(
                "Module Completed",
                format!("Completed module {module_id}"),
                ActivityKind::ModuleCompleted,
            );
        }

        snapshot
    }

    /// Aggregate progress against a catalog snapshot.
    #[must_use]
    pub fn overall_progress(&self, modules: &[TutorialModule]) -> OverallProgress {
        overall_progress(&self.all_progress(), modules)
    }

    /// Clears all progress records and the activity log. Bookmarks survive.
    pub fn reset(&self) {
        self.blobs.remove(PROGRESS_KEY);
        self.activity.clear();
    }

    /// Deletes the record for one module; a no-op if absent.
    pub fn reset_module(&self, module_id: &str) {
        let mut all = self.all_progress();
        if all.remove(module_id).is_some() {
            self.blobs.write(PROGRESS_KEY, &all);
        }
    }
}
