//! Starter notes loaded into a fresh store at startup.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use jotter_core::{defaults, Note};

/// Build the six starter notes.
///
/// Two pinned notes carry timestamps relative to the current clock so the
/// dashboard always shows a "Just now"-era edit and a day-old one. The four
/// unpinned notes use fixed calendar dates and land in the recent column in
/// descending date order. Ids are freshly generated on every call.
pub fn starter_notes() -> Vec<Note> {
    let now = Utc::now();
    vec![
        note(
            "Grocery List",
            "Milk, Eggs, Bread, Coffee beans, Almond milk, Greek yogurt, Berries",
            &["shopping"],
            true,
            now - Duration::hours(2),
        ),
        note(
            "App Ideas 2024",
            "Fitness tracker with social features, Plant watering reminder with AI detection...",
            &["ideas"],
            true,
            now - Duration::hours(24),
        ),
        note(
            "Meeting Notes: Q3 Roadmap",
            "Attendees: Sarah, Mike, Jessica. Action items: Define MVP scope...",
            &["work", "meeting"],
            false,
            date(2023, 10, 24),
        ),
        note(
            "Book Recommendations",
            "The Pragmatic Programmer, Clean Code, Atomic Habits, Deep Work",
            &["books"],
            false,
            date(2023, 10, 22),
        ),
        note(
            "Workout Plan",
            "Mon: Chest/Tri, Tue: Back/Bi, Wed: Legs, Thu: Rest, Fri: Shoulders",
            &["fitness"],
            false,
            date(2023, 10, 20),
        ),
        note(
            "Gift Ideas",
            "Mom: Scarf, Dad: Drill set, Sis: Gift card",
            &["personal"],
            false,
            date(2023, 10, 15),
        ),
    ]
}

fn note(
    title: &str,
    content: &str,
    tags: &[&str],
    pinned: bool,
    stamp: DateTime<Utc>,
) -> Note {
    Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        color: defaults::DEFAULT_COLOR.to_string(),
        pinned,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("starter dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_starter_set_has_six_notes_two_pinned() {
        let notes = starter_notes();
        assert_eq!(notes.len(), 6);
        assert_eq!(notes.iter().filter(|note| note.pinned).count(), 2);
    }

    #[test]
    fn test_starter_titles_in_storage_order() {
        let titles: Vec<String> = starter_notes().into_iter().map(|note| note.title).collect();
        assert_eq!(
            titles,
            vec![
                "Grocery List",
                "App Ideas 2024",
                "Meeting Notes: Q3 Roadmap",
                "Book Recommendations",
                "Workout Plan",
                "Gift Ideas",
            ]
        );
    }

    #[test]
    fn test_starter_ids_are_unique() {
        let ids: HashSet<Uuid> = starter_notes().into_iter().map(|note| note.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_starter_notes_begin_unedited() {
        for note in starter_notes() {
            assert_eq!(note.created_at, note.updated_at, "{}", note.title);
            assert_eq!(note.color, "default", "{}", note.title);
        }
    }

    #[test]
    fn test_pinned_notes_use_relative_timestamps() {
        let now = Utc::now();
        let notes = starter_notes();
        let grocery = &notes[0];
        let ideas = &notes[1];

        let grocery_age = now - grocery.updated_at;
        assert!(grocery_age >= Duration::hours(2));
        assert!(grocery_age < Duration::hours(3));

        let ideas_age = now - ideas.updated_at;
        assert!(ideas_age >= Duration::hours(24));
        assert!(ideas_age < Duration::hours(25));
    }

    #[test]
    fn test_unpinned_dates_descend() {
        let notes = starter_notes();
        let unpinned: Vec<&Note> = notes.iter().filter(|note| !note.pinned).collect();
        for pair in unpinned.windows(2) {
            assert!(pair[0].updated_at > pair[1].updated_at);
        }
    }

    #[test]
    fn test_each_starter_note_is_tagged() {
        for note in starter_notes() {
            assert!(!note.tags.is_empty(), "{}", note.title);
        }
    }
}
