use models::{course_form::NewCourse, department::DepartmentPair, validation::FormErrors};
use serde::{Deserialize, Serialize};

/// Submission of the department comparison form
#[derive(Debug, Default, Deserialize)]
pub struct DeptForm {
    pub department1: Option<String>,
    pub department2: Option<String>,
    pub csrf_token: Option<String>,
}

impl DeptForm {
    pub fn validate(&self) -> Result<DepartmentPair, FormErrors> {
        DepartmentPair::new(self.department1.as_deref(), self.department2.as_deref())
    }
}

/// Submission of the add-course form
#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    pub course: Option<String>,
    pub title: Option<String>,
    pub csrf_token: Option<String>,
}

impl AddForm {
    pub fn validate(&self) -> Result<NewCourse, FormErrors> {
        NewCourse::new(self.course.as_deref(), self.title.as_deref())
    }
}

/// Combine field validation with the CSRF check; both sets of errors are reported
pub fn with_csrf<T>(
    result: Result<T, FormErrors>,
    csrf_errors: FormErrors,
) -> Result<T, FormErrors> {
    match result {
        Ok(value) => csrf_errors.into_result(|| value),
        Err(mut errors) => {
            errors.merge(csrf_errors);
            Err(errors)
        }
    }
}

/// What a template needs to redraw a form: submitted values, errors and the token
#[derive(Debug, Default, Serialize)]
pub struct FormView {
    pub values: serde_json::Map<String, serde_json::Value>,
    pub errors: FormErrors,
    pub csrf_token: String,
}

impl FormView {
    pub fn new(csrf_token: String) -> Self {
        Self {
            csrf_token,
            ..Default::default()
        }
    }

    pub fn value(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.values.insert(field.to_owned(), value.into());
        }
        self
    }

    pub fn errors(mut self, errors: FormErrors) -> Self {
        self.errors = errors;
        self
    }
}
