use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the department/course/section/professor/meeting join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sea_orm::FromQueryResult))]
pub struct JoinedSection {
    pub code: Option<String>,
    pub name: Option<String>,
    pub course: Option<String>,
    pub number: Option<i32>,
    pub title: Option<String>,
    pub full_name: Option<String>,
    pub days: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

/// Display fields of a listed section, in table column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDisplay {
    pub course: String,
    pub code: String,
    pub number: String,
    pub name: String,
    pub full_name: String,
    pub days: String,
    pub start: String,
    pub end: String,
}

impl SectionDisplay {
    pub const HEADERS: [&'static str; 8] = [
        "Course",
        "Department",
        "Section",
        "Department Name",
        "Professor",
        "Days",
        "Start",
        "End",
    ];

    pub fn fields(&self) -> [&str; 8] {
        [
            &self.course,
            &self.code,
            &self.number,
            &self.name,
            &self.full_name,
            &self.days,
            &self.start,
            &self.end,
        ]
    }
}

impl From<JoinedSection> for SectionDisplay {
    fn from(row: JoinedSection) -> Self {
        // Absent values render as empty cells
        let time = |t: Option<NaiveTime>| t.map(|t| t.format("%H:%M:%S").to_string());

        Self {
            course: row.course.unwrap_or_default(),
            code: row.code.unwrap_or_default(),
            number: row.number.map(|n| n.to_string()).unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            full_name: row.full_name.unwrap_or_default(),
            days: row.days.unwrap_or_default(),
            start: time(row.start).unwrap_or_default(),
            end: time(row.end).unwrap_or_default(),
        }
    }
}

/// Course listing keyed by course title
///
/// A title maps to a single entry; when several sections share a title the
/// last one folded in is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseListing(BTreeMap<String, SectionDisplay>);

impl CourseListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: JoinedSection) {
        let title = row.title.clone().unwrap_or_default();
        self.0.insert(title, row.into());
    }

    pub fn get(&self, title: &str) -> Option<&SectionDisplay> {
        self.0.get(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SectionDisplay)> {
        self.0.iter()
    }
}

impl FromIterator<JoinedSection> for CourseListing {
    fn from_iter<I: IntoIterator<Item = JoinedSection>>(rows: I) -> Self {
        let mut listing = Self::new();
        for row in rows {
            listing.insert(row);
        }
        listing
    }
}
