use serde::{Deserialize, Serialize};

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

/// Coarse placement of a module within the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Intro,
    Intermediate,
    Advanced,
    Tools,
}

/// Difficulty label shown to learners, derived from the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ModuleCategory {
    /// Maps the category to its learner-facing difficulty label.
    ///
    /// Tool walkthroughs are rated intermediate.
    #[must_use]
    pub fn difficulty(self) -> Difficulty {
        match self {
            ModuleCategory::Intro => Difficulty::Beginner,
            ModuleCategory::Intermediate | ModuleCategory::Tools => Difficulty::Intermediate,
            ModuleCategory::Advanced => Difficulty::Advanced,
        }
    }

    fn curriculum_rank(self) -> u8 {
        match self {
            ModuleCategory::Intro => 1,
            ModuleCategory::Intermediate => 2,
            ModuleCategory::Advanced => 3,
            ModuleCategory::Tools => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonKind {
    Theory,
    HandsOn,
    Lab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Text,
    Code,
    Command,
    Image,
    Warning,
    Info,
    Checklist,
}

/// A module as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ModuleCategory,
    /// Estimated completion time in minutes.
    pub estimated_time: u32,
    pub lessons: Vec<TutorialLesson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialLesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: Vec<TutorialSection>,
    pub estimated_time: u32,
    #[serde(rename = "type")]
    pub kind: LessonKind,
}

/// A typed content block within a lesson body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialSection {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyable: Option<bool>,
}

//
// ─── SEARCH RESULTS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchHitKind {
    Module,
    Lesson,
    Section,
}

/// One hit from a catalog search, at module, lesson, or section granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub module_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: SearchHitKind,
}

//
// ─── CATALOG HELPERS ───────────────────────────────────────────────────────────
//

/// The module following `current_id` in catalog order, if any.
#[must_use]
pub fn next_module<'a>(
    modules: &'a [TutorialModule],
    current_id: &str,
) -> Option<&'a TutorialModule> {
    let index = modules.iter().position(|m| m.id == current_id)?;
    modules.get(index + 1)
}

/// The module preceding `current_id` in catalog order, if any.
#[must_use]
pub fn previous_module<'a>(
    modules: &'a [TutorialModule],
    current_id: &str,
) -> Option<&'a TutorialModule> {
    let index = modules.iter().position(|m| m.id == current_id)?;
    index.checked_sub(1).and_then(|i| modules.get(i))
}

/// Resolves a module's prerequisite ids against the catalog.
///
/// Ids that do not resolve are skipped rather than reported.
#[must_use]
pub fn prerequisite_modules<'a>(
    modules: &'a [TutorialModule],
    module_id: &str,
) -> Vec<&'a TutorialModule> {
    let Some(prerequisites) = modules
        .iter()
        .find(|m| m.id == module_id)
        .and_then(|m| m.prerequisites.as_ref())
    else {
        return Vec::new();
    };

    modules
        .iter()
        .filter(|m| prerequisites.iter().any(|id| *id == m.id))
        .collect()
}

/// Modules in the given category, or all modules when `category` is `None`.
#[must_use]
pub fn filter_by_category(
    modules: &[TutorialModule],
    category: Option<ModuleCategory>,
) -> Vec<&TutorialModule> {
    modules
        .iter()
        .filter(|m| category.is_none_or(|c| m.category == c))
        .collect()
}

/// Modules whose tags match any of the requested tags.
///
/// Matching is a case-insensitive substring test against each module tag.
/// An empty tag list matches everything.
#[must_use]
pub fn filter_by_tags<'a>(modules: &'a [TutorialModule], tags: &[&str]) -> Vec<&'a TutorialModule> {
    if tags.is_empty() {
        return modules.iter().collect();
    }
    let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    modules
        .iter()
        .filter(|m| {
            m.tags
                .iter()
                .any(|tag| wanted.iter().any(|w| tag.to_lowercase().contains(w)))
        })
        .collect()
}

/// Catalog ordered by curriculum rank: intro, intermediate, advanced, tools.
///
/// The sort is stable, so catalog order is preserved within a category.
#[must_use]
pub fn sort_by_difficulty(modules: &[TutorialModule]) -> Vec<&TutorialModule> {
    let mut sorted: Vec<&TutorialModule> = modules.iter().collect();
    sorted.sort_by_key(|m| m.category.curriculum_rank());
    sorted
}

/// Totals over a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    /// Summed module `estimatedTime`, in minutes.
    pub total_time: u32,
    pub total_lessons: usize,
    pub intro: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub tools: usize,
}

#[must_use]
pub fn module_stats(modules: &[TutorialModule]) -> CatalogStats {
    let count_of = |category| modules.iter().filter(|m| m.category == category).count();
    CatalogStats {
        total: modules.len(),
        total_time: modules.iter().map(|m| m.estimated_time).sum(),
        total_lessons: modules.iter().map(|m| m.lessons.len()).sum(),
        intro: count_of(ModuleCategory::Intro),
        intermediate: count_of(ModuleCategory::Intermediate),
        advanced: count_of(ModuleCategory::Advanced),
        tools: count_of(ModuleCategory::Tools),
    }
}

/// Estimated reading time in minutes at 200 words per minute, rounded up.
#[must_use]
pub fn estimated_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    u32::try_from(words.div_ceil(200)).unwrap_or(u32::MAX)
}

//
// ─── TEST SUPPORT ──────────────────────────────────────────────────────────────
//

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a minimal theory-only module for tests.
    pub(crate) fn module_with_lessons(
        id: &str,
        lesson_ids: &[&str],
        estimated_time: u32,
    ) -> TutorialModule {
        TutorialModule {
            id: id.to_owned(),
            title: format!("Module {id}"),
            description: format!("About {id}"),
            category: ModuleCategory::Intro,
            estimated_time,
            lessons: lesson_ids
                .iter()
                .map(|lesson_id| TutorialLesson {
                    id: (*lesson_id).to_owned(),
                    title: format!("Lesson {lesson_id}"),
                    description: format!("About lesson {lesson_id}"),
                    content: Vec::new(),
                    estimated_time: 10,
                    kind: LessonKind::Theory,
                })
                .collect(),
            prerequisites: None,
            tags: Vec::new(),
            icon: "shield".to_owned(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
