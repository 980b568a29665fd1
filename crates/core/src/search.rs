//! Full-catalog substring search.
//!
//! Mirrors the catalog server's `/search` semantics so offline snapshots can
//! be searched without a round trip: case-insensitive substring match over
//! module titles and descriptions, lesson titles and descriptions, and raw
//! section content, capped at [`MAX_RESULTS`] hits.

use crate::model::{SearchHitKind, SearchResult, TutorialModule};

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_LEN: usize = 2;

/// Hard cap on returned hits.
pub const MAX_RESULTS: usize = 20;

/// Length of the content excerpt carried by section hits.
const EXCERPT_LEN: usize = 100;

/// Searches a catalog snapshot, returning hits in catalog order.
///
/// Module hits come before that module's lesson hits, which come before
/// section hits within each lesson.
#[must_use]
pub fn search_catalog(modules: &[TutorialModule], query: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut results = Vec::new();
    for module in modules {
        if matches(&module.title, &needle) || matches(&module.description, &needle) {
            results.push(SearchResult {
                module_id: module.id.clone(),
                lesson_id: None,
                section_id: None,
                title: module.title.clone(),
                description: module.description.clone(),
                content: None,
                kind: SearchHitKind::Module,
            });
        }

        for lesson in &module.lessons {
            if matches(&lesson.title, &needle) || matches(&lesson.description, &needle) {
                results.push(SearchResult {
                    module_id: module.id.clone(),
                    lesson_id: Some(lesson.id.clone()),
                    section_id: None,
                    title: lesson.title.clone(),
                    description: lesson.description.clone(),
                    content: None,
                    kind: SearchHitKind::Lesson,
                });
            }

            for section in &lesson.content {
                if matches(&section.content, &needle) {
                    results.push(SearchResult {
                        module_id: module.id.clone(),
                        lesson_id: Some(lesson.id.clone()),
                        section_id: Some(section.id.clone()),
                        title: section.title.clone().unwrap_or_else(|| lesson.title.clone()),
                        description: excerpt(&section.content),
                        content: Some(section.content.clone()),
                        kind: SearchHitKind::Section,
                    });
                }
            }
        }
    }

    results.truncate(MAX_RESULTS);
    results
}

fn matches(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        LessonKind, ModuleCategory, SectionKind, TutorialLesson, TutorialModule, TutorialSection,
    };

    fn catalog() -> Vec<TutorialModule> {
        vec![TutorialModule {
            id: "net-basics".to_owned(),
            title: "Networking Basics".to_owned(),
            description: "How packets move".to_owned(),
            category: ModuleCategory::Intro,
            estimated_time: 45,
            lessons: vec![TutorialLesson {
                id: "l1".to_owned(),
                title: "The OSI Model".to_owned(),
                description: "Seven layers of networking".to_owned(),
                content: vec![
                    TutorialSection {
                        id: "s1".to_owned(),
                        kind: SectionKind::Text,
                        title: Some("Layers".to_owned()),
                        content: "Every packet crosses the physical layer first.".to_owned(),
                        language: None,
                        copyable: None,
                    },
                    TutorialSection {
                        id: "s2".to_owned(),
                        kind: SectionKind::Command,
                        title: None,
                        content: "tcpdump -i eth0".to_owned(),
                        language: None,
                        copyable: Some(true),
                    },
                ],
                estimated_time: 15,
                kind: LessonKind::Theory,
            }],
            prerequisites: None,
            tags: vec!["networking".to_owned()],
            icon: "globe".to_owned(),
        }]
    }

    #[test]
    fn short_queries_return_nothing() {
        let catalog = catalog();
        assert!(search_catalog(&catalog, "n").is_empty());
        assert!(search_catalog(&catalog, "  x  ").is_empty());
        assert!(search_catalog(&catalog, "").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = catalog();
        let hits = search_catalog(&catalog, "NETWORKING");
        // Module title and lesson description both mention networking.
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, SearchHitKind::Module);
        assert_eq!(hits[1].kind, SearchHitKind::Lesson);
    }

    #[test]
    fn section_hits_carry_an_excerpt_and_full_content() {
        let catalog = catalog();
        let hits = search_catalog(&catalog, "tcpdump");
        assert_eq!(hits.len(), 1);

        let hit = &hits[0];
        assert_eq!(hit.kind, SearchHitKind::Section);
        assert_eq!(hit.section_id.as_deref(), Some("s2"));
        // Untitled sections fall back to the lesson title.
        assert_eq!(hit.title, "The OSI Model");
        assert_eq!(hit.description, "tcpdump -i eth0...");
        assert_eq!(hit.content.as_deref(), Some("tcpdump -i eth0"));
    }

    #[test]
    fn titled_sections_keep_their_own_title() {
        let catalog = catalog();
        let hits = search_catalog(&catalog, "physical layer");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Layers");
    }

    #[test]
    fn results_are_capped() {
        let mut modules = Vec::new();
        for i in 0..30 {
            let mut module =
                crate::model::test_support::module_with_lessons(&format!("m{i}"), &[], 10);
            module.title = format!("Phishing module {i}");
            modules.push(module);
        }

        let hits = search_catalog(&modules, "phishing");
        assert_eq!(hits.len(), MAX_RESULTS);
    }

    #[test]
    fn no_match_yields_empty_results() {
        assert!(search_catalog(&catalog(), "cryptography").is_empty());
    }
}
