use crate::routes::{api, health};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(health::health, api::list_departments, api::compare_courses),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Departments", description = "Department related endpoints"),
        (name = "Courses", description = "Course related endpoints"),
    ),
    info(
        title = "Course Compare API",
        version = "1.0.0",
        description = "Compare the courses of two departments",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
