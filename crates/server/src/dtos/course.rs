use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// A listed section, fields in table column order
#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub title: String,
    pub course: String,
    pub code: String,
    pub number: String,
    pub name: String,
    pub full_name: String,
    pub days: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompareResponse {
    pub department1: String,
    pub department2: String,
    pub courses: Vec<SectionResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CompareQueryParams {
    /// First department code, e.g. "CSC"
    pub department1: Option<String>,
    /// Second department code, different from the first
    pub department2: Option<String>,
}
