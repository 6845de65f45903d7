//! Pure dashboard derivations: everything here is a function of the lesson
//! sequence, the date filter, and a reference day. Recomputed on read, no
//! hidden state.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::{Lesson, LessonType};

/// Optional inclusive date range. Both bounds unset means "no filter";
/// filtering only applies when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateFilter {
    pub fn range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}

/// Lessons whose date falls within the filter bounds, inclusive on both
/// ends. With an inactive filter this is the full set. Idempotent.
pub fn filter_by_date(lessons: &[Lesson], filter: &DateFilter) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|l| filter.contains(l.date))
        .cloned()
        .collect()
}

/// Order-preserving subset of one lifecycle category.
pub fn of_type(lessons: &[Lesson], kind: LessonType) -> Vec<Lesson> {
    lessons.iter().filter(|l| l.kind == kind).cloned().collect()
}

/// Lessons scheduled on the given day, compared at day granularity.
pub fn on_day(lessons: &[Lesson], day: NaiveDate) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|l| l.date.date_naive() == day)
        .cloned()
        .collect()
}

/// One calendar month of historic lessons, labelled with the full month
/// name and four-digit year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub lessons: Vec<Lesson>,
}

/// Groups historic lessons by calendar month and year, newest month first.
/// Months with no historic lessons are omitted; input order is preserved
/// within each group.
pub fn historic_by_month(lessons: &[Lesson]) -> Vec<MonthGroup> {
    let mut groups: BTreeMap<(i32, u32), Vec<Lesson>> = BTreeMap::new();

    for lesson in lessons {
        if lesson.kind == LessonType::Historic {
            groups
                .entry((lesson.date.year(), lesson.date.month()))
                .or_default()
                .push(lesson.clone());
        }
    }

    groups
        .into_iter()
        .rev()
        .map(|(_, lessons)| MonthGroup {
            label: lessons[0].date.format("%B %Y").to_string(),
            lessons,
        })
        .collect()
}

/// How the historic section is presented: grouped by month when no date
/// filter is active, a flat filtered list otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoricView {
    Grouped(Vec<MonthGroup>),
    Flat(Vec<Lesson>),
}

pub fn historic_view(lessons: &[Lesson], filter: &DateFilter) -> HistoricView {
    let filtered = filter_by_date(lessons, filter);

    if filter.is_active() {
        HistoricView::Flat(of_type(&filtered, LessonType::Historic))
    } else {
        HistoricView::Grouped(historic_by_month(&filtered))
    }
}
