use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub rating: u8,
    pub energy: u8,
    pub stress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MoodJournal {
    pub days: BTreeMap<String, MoodEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AddMoodRequest {
    pub rating: u8,
    pub energy: u8,
    pub stress: u8,
    #[serde(default)]
    pub note: Option<String>,
}

impl AddMoodRequest {
    pub fn into_entry(self, date: String) -> MoodEntry {
        let note = self
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        MoodEntry {
            date,
            rating: self.rating,
            energy: self.energy,
            stress: self.stress,
            note,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<MoodEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecentEntry {
    pub date: String,
    pub display_date: String,
    pub emoji: &'static str,
    pub label: &'static str,
    pub energy: u8,
    pub stress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub entries: Vec<RecentEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builds_entry_with_trimmed_note() {
        let request = AddMoodRequest {
            rating: 4,
            energy: 2,
            stress: 5,
            note: Some(" hello ".to_string()),
        };

        let entry = request.into_entry("2024-03-01".to_string());
        assert_eq!(entry.date, "2024-03-01");
        assert_eq!(entry.rating, 4);
        assert_eq!(entry.energy, 2);
        assert_eq!(entry.stress, 5);
        assert_eq!(entry.note.as_deref(), Some("hello"));
    }

    #[test]
    fn blank_note_is_dropped() {
        let request = AddMoodRequest {
            rating: 3,
            energy: 3,
            stress: 3,
            note: Some("   ".to_string()),
        };

        let entry = request.into_entry("2024-03-01".to_string());
        assert_eq!(entry.note, None);
    }

    #[test]
    fn missing_note_stays_absent() {
        let request = AddMoodRequest {
            rating: 3,
            energy: 3,
            stress: 3,
            note: None,
        };

        let entry = request.into_entry("2024-03-01".to_string());
        assert_eq!(entry.note, None);
    }

    #[test]
    fn absent_note_is_not_serialized() {
        let entry = MoodEntry {
            date: "2024-03-01".to_string(),
            rating: 3,
            energy: 3,
            stress: 3,
            note: None,
        };

        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert!(!json.contains("note"));
    }
}
