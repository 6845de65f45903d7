//! The canonical lesson dataset shared by the offline service and the demo
//! backend. Matches the data the real backend was seeded with.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Lesson, LessonType};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid seed timestamp")
}

fn lesson(
    id: &str,
    date: DateTime<Utc>,
    kind: LessonType,
    subject: &str,
    students: &[&str],
    tutor: Option<&str>,
    status: &str,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        date,
        kind,
        subject: subject.to_string(),
        students: students.iter().map(|s| s.to_string()).collect(),
        tutor: tutor.map(|t| t.to_string()),
        status: status.to_string(),
    }
}

pub fn seed_lessons() -> Vec<Lesson> {
    use LessonType::*;

    vec![
        lesson(
            "L001",
            at(2025, 10, 28, 14, 0),
            Historic,
            "Minecraft Game Design - Level 1",
            &["Ethan", "Ava"],
            Some("Sarah Tan"),
            "Completed",
        ),
        lesson(
            "L002",
            at(2025, 11, 2, 9, 0),
            Historic,
            "Roblox Coding Basics",
            &["Lucas"],
            Some("Sarah Tan"),
            "Completed",
        ),
        lesson(
            "L003",
            at(2025, 11, 5, 16, 0),
            Historic,
            "Python for Kids - Introduction",
            &["Chloe", "Aaron"],
            Some("Sarah Tan"),
            "Completed",
        ),
        lesson(
            "L004",
            at(2025, 11, 8, 10, 0),
            Upcoming,
            "Minecraft Redstone Logic",
            &["Emma", "Noah"],
            Some("Sarah Tan"),
            "Confirmed",
        ),
        lesson(
            "L005",
            at(2025, 11, 9, 15, 0),
            Upcoming,
            "Roblox Game Design - Level 2",
            &["Ryan", "Mia"],
            Some("Sarah Tan"),
            "Confirmed",
        ),
        lesson(
            "L006",
            at(2025, 11, 10, 12, 0),
            Upcoming,
            "Website Design for Beginners",
            &["Olivia"],
            Some("Sarah Tan"),
            "Confirmed",
        ),
        lesson(
            "L007",
            at(2025, 11, 12, 11, 0),
            Available,
            "Python for Kids - Game Projects",
            &[],
            None,
            "Available",
        ),
        lesson(
            "L008",
            at(2025, 11, 13, 17, 0),
            Available,
            "Roblox Game Design - Level 1",
            &[],
            None,
            "Available",
        ),
        lesson(
            "L009",
            at(2025, 11, 14, 10, 0),
            Available,
            "Minecraft AI Coding Adventure",
            &[],
            None,
            "Available",
        ),
        lesson(
            "L010",
            at(2025, 11, 15, 9, 0),
            Upcoming,
            "Python Automation for Kids",
            &["Elijah"],
            Some("Sarah Tan"),
            "Confirmed",
        ),
    ]
}
