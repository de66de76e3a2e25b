use crate::validation::{FormErrors, max_length, required};
use serde::{Deserialize, Serialize};

/// A course submitted through the add-course form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    /// Course code, e.g. "CSC 101"
    pub course: String,
    pub title: String,
}

impl NewCourse {
    pub const COURSE_FIELD: &'static str = "course";
    pub const TITLE_FIELD: &'static str = "title";
    /// Width of the `courses.course` and `courses.title` columns
    pub const MAX_LENGTH: usize = 64;

    pub fn new(course: Option<&str>, title: Option<&str>) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let course = required(course)
            .and_then(|v| max_length(v, Self::MAX_LENGTH))
            .map_err(|e| errors.add(Self::COURSE_FIELD, e))
            .ok();
        let title = required(title)
            .and_then(|v| max_length(v, Self::MAX_LENGTH))
            .map_err(|e| errors.add(Self::TITLE_FIELD, e))
            .ok();

        match (course, title) {
            (Some(course), Some(title)) => Ok(Self {
                course: course.to_owned(),
                title: title.to_owned(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_course_keeps_submitted_values() {
        let course = NewCourse::new(Some("CSC 101"), Some("Intro to Computing")).unwrap();
        assert_eq!(course.course, "CSC 101");
        assert_eq!(course.title, "Intro to Computing");
    }

    #[test]
    fn test_new_course_requires_both_fields() {
        let errors = NewCourse::new(Some("  "), None).unwrap_err();
        assert_eq!(errors.field("course"), ["This field is required."]);
        assert_eq!(errors.field("title"), ["This field is required."]);

        let errors = NewCourse::new(Some("CSC 101"), Some("")).unwrap_err();
        assert!(errors.field("course").is_empty());
        assert_eq!(errors.field("title"), ["This field is required."]);
    }

    #[test]
    fn test_new_course_rejects_values_wider_than_column() {
        let long_title = "x".repeat(NewCourse::MAX_LENGTH + 1);
        let errors = NewCourse::new(Some("CSC 101"), Some(&long_title)).unwrap_err();
        assert!(errors.field("course").is_empty());
        assert_eq!(
            errors.field("title"),
            ["Field cannot be longer than 64 characters."]
        );

        let exact = "y".repeat(NewCourse::MAX_LENGTH);
        assert!(NewCourse::new(Some(&exact), Some(&exact)).is_ok());
    }
}
