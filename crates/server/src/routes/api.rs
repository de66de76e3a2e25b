use crate::{
    dtos::course::{CompareQueryParams, CompareResponse, DepartmentResponse, SectionResponse},
    error::AppError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::services::{course::CourseService, department::DepartmentService};
use models::department::DepartmentPair;

/// List all departments
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Departments retrieved successfully", body = Vec<DepartmentResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Departments"
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, AppError> {
    let departments = DepartmentService::list(&state.db)
        .await?
        .into_iter()
        .map(|d| DepartmentResponse {
            code: d.code,
            name: d.name,
        })
        .collect();

    Ok(Json(departments))
}

/// List the courses of two departments with their sections, professors and meeting times
#[utoipa::path(
    get,
    path = "/api/courses",
    params(CompareQueryParams),
    responses(
        (status = 200, description = "Courses retrieved successfully", body = CompareResponse),
        (status = 400, description = "Missing, unknown or identical departments"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn compare_courses(
    State(state): State<AppState>,
    Query(params): Query<CompareQueryParams>,
) -> Result<Response, AppError> {
    let pair = match DepartmentPair::new(
        params.department1.as_deref(),
        params.department2.as_deref(),
    ) {
        Ok(pair) => pair,
        Err(errors) => return Ok((StatusCode::BAD_REQUEST, Json(errors)).into_response()),
    };

    let listing = CourseService::compare_departments(&state.db, &pair).await?;
    let courses = listing
        .iter()
        .map(|(title, section)| SectionResponse {
            title: title.clone(),
            course: section.course.clone(),
            code: section.code.clone(),
            number: section.number.clone(),
            name: section.name.clone(),
            full_name: section.full_name.clone(),
            days: section.days.clone(),
            start: section.start.clone(),
            end: section.end.clone(),
        })
        .collect();

    Ok(Json(CompareResponse {
        department1: pair.first.to_string(),
        department2: pair.second.to_string(),
        courses,
    })
    .into_response())
}
