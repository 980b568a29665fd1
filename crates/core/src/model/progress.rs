use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::catalog::TutorialModule;

/// Stored progress records keyed by module id.
///
/// This is the shape of the `progress` blob in the state store and of the
/// `progress` section of an export document.
pub type ProgressMap = HashMap<String, ModuleProgress>;

//
// ─── MODULE PROGRESS ───────────────────────────────────────────────────────────
//

/// Completion state for a single module the user has touched.
///
/// `completed_lessons` keeps completion order, not catalog order, and a
/// lesson is never removed once recorded. `percentage`, `completed`, and
/// `current_lesson_index` are derived and must only change through
/// [`ModuleProgress::recompute`] so the three always agree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub module_id: String,
    pub completed_lessons: Vec<String>,
    pub current_lesson_index: usize,
    pub completed: bool,
    pub percentage: f64,
    pub last_accessed: DateTime<Utc>,
}

impl ModuleProgress {
    /// Creates an empty record for a module touched for the first time.
    #[must_use]
    pub fn new(module_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            module_id: module_id.into(),
            completed_lessons: Vec::new(),
            current_lesson_index: 0,
            completed: false,
            percentage: 0.0,
            last_accessed: now,
        }
    }

    /// Records a lesson completion, returning whether the lesson was new.
    ///
    /// Completion is monotonic: recording an already-completed lesson is a
    /// no-op.
    pub fn record_completion(&mut self, lesson_id: &str) -> bool {
        if self.completed_lessons.iter().any(|id| id == lesson_id) {
            return false;
        }
        self.completed_lessons.push(lesson_id.to_owned());
        true
    }

    /// Marks the record as accessed. Every mutation touches this, even ones
    /// that change nothing else.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
    }

    /// Recomputes the derived fields against the supplied lesson count.
    ///
    /// A zero `total_lessons` is floored to 1 so the percentage never
    /// divides by a caller-supplied zero.
    pub fn recompute(&mut self, total_lessons: usize) {
        let total = total_lessons.max(1);
        let done = self.completed_lessons.len();
        self.percentage = done as f64 / total as f64 * 100.0;
        self.completed = done == total;
        self.current_lesson_index = done;
    }

    /// Number of lessons recorded as completed.
    #[must_use]
    pub fn lessons_completed(&self) -> usize {
        self.completed_lessons.len()
    }
}

//
// ─── OVERALL PROGRESS ──────────────────────────────────────────────────────────
//

/// Aggregate progress across the whole catalog. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    /// Count of completed modules.
    pub current_module: usize,
    pub total_modules: usize,
    pub percentage: f64,
    /// Sum of catalog `estimatedTime` over all modules, in minutes.
    pub total_time: u32,
    /// Sum of catalog `estimatedTime` over completed modules, in minutes.
    pub completed_time: u32,
}

/// Cross-references stored progress against a catalog snapshot.
///
/// Only catalog-listed modules count; stored records for modules that have
/// since left the catalog are ignored. An empty catalog (e.g. after a failed
/// fetch) falls back to counting raw stored records, with zero time totals.
#[must_use]
pub fn overall_progress(progress: &ProgressMap, modules: &[TutorialModule]) -> OverallProgress {
    if modules.is_empty() {
        let total = progress.len();
        let completed = progress.values().filter(|p| p.completed).count();
        return OverallProgress {
            current_module: completed,
            total_modules: total,
            percentage: percent_of(completed, total),
            total_time: 0,
            completed_time: 0,
        };
    }

    let mut completed = 0;
    let mut total_time = 0;
    let mut completed_time = 0;
    for module in modules {
        total_time += module.estimated_time;
        if progress.get(&module.id).is_some_and(|p| p.completed) {
            completed += 1;
            completed_time += module.estimated_time;
        }
    }

    OverallProgress {
        current_module: completed,
        total_modules: modules.len(),
        percentage: percent_of(completed, modules.len()),
        total_time,
        completed_time,
    }
}

fn percent_of(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
