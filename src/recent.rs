use crate::gradient::{mood_emoji, mood_label};
use crate::models::{MoodJournal, RecentEntry};
use chrono::NaiveDate;

pub const RECENT_LIMIT: usize = 7;

pub fn recent_entries(journal: &MoodJournal) -> Vec<RecentEntry> {
    // keys are zero-padded ISO dates, so map order is chronological
    journal
        .days
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|(date, entry)| RecentEntry {
            date: date.clone(),
            display_date: display_date(date),
            emoji: mood_emoji(entry.rating),
            label: mood_label(entry.rating),
            energy: entry.energy,
            stress: entry.stress,
            note: entry.note.clone(),
        })
        .collect()
}

fn display_date(key: &str) -> String {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}
