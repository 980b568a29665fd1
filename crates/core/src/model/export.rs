use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::activity::ActivityLog;
use crate::model::bookmark::BookmarkList;
use crate::model::progress::ProgressMap;

/// A full snapshot of user state, suitable for transfer between devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub progress: ProgressMap,
    pub activity: ActivityLog,
    pub bookmarks: BookmarkList,
    pub export_date: DateTime<Utc>,
}

/// Import-side view of an export document.
///
/// Any of the three state sections may be absent; an absent section leaves
/// the corresponding stored blob untouched on import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    #[serde(default)]
    pub progress: Option<ProgressMap>,
    #[serde(default)]
    pub activity: Option<ActivityLog>,
    #[serde(default)]
    pub bookmarks: Option<BookmarkList>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn full_document_round_trips() {
        let document = ExportDocument {
            progress: ProgressMap::new(),
            activity: ActivityLog::new(),
            bookmarks: BookmarkList::new(),
            export_date: fixed_now(),
        };

        let json = serde_json::to_string_pretty(&document).unwrap();
        assert!(json.contains("\"exportDate\""));

        let parsed: ImportDocument = serde_json::from_str(&json).unwrap();
        assert!(parsed.progress.is_some());
        assert!(parsed.activity.is_some());
        assert!(parsed.bookmarks.is_some());
        assert_eq!(parsed.export_date, Some(fixed_now()));
    }

    #[test]
    fn partial_document_parses_with_missing_sections() {
        let parsed: ImportDocument = serde_json::from_str(r#"{"activity": []}"#).unwrap();
        assert!(parsed.progress.is_none());
        assert!(parsed.activity.is_some());
        assert!(parsed.bookmarks.is_none());
    }
}
