use crate::{
    error::AppError,
    forms::{DeptForm, FormView, with_csrf},
    session::{self, COURSE_INFO, DEPARTMENT1, DEPARTMENT2},
    state::AppState,
};
use axum::{Form, extract::State, response::Html};
use database::services::course::CourseService;
use log::debug;
use minijinja::context;
use models::{
    department::{DepartmentCode, DepartmentPair},
    listing::{CourseListing, SectionDisplay},
};
use tower_sessions::Session;

/// Department selection form
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let department1: Option<DepartmentCode> = session.get(DEPARTMENT1).await?;
    let department2: Option<DepartmentCode> = session.get(DEPARTMENT2).await?;

    let form = FormView::new(session::csrf_token(&session).await?)
        .value(DepartmentPair::FIRST_FIELD, department1.as_ref().map(DepartmentCode::as_str))
        .value(DepartmentPair::SECOND_FIELD, department2.as_ref().map(DepartmentCode::as_str));

    let messages = session::take_flashes(&session).await?;
    let page = state.templates.render(
        "index.html",
        context! {
            messages => messages,
            form => form,
            choices => DepartmentCode::choices(),
            department1 => department1,
            department2 => department2,
        },
    )?;

    Ok(page)
}

/// Validate the department pair and list both departments' courses
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeptForm>,
) -> Result<Html<String>, AppError> {
    session.insert(COURSE_INFO, CourseListing::new()).await?;

    let csrf_errors = session::verify_csrf(
        &session,
        form.csrf_token.as_deref(),
        state.config.csrf_enabled,
    )
    .await?;

    let errors = match with_csrf(form.validate(), csrf_errors) {
        Ok(pair) => {
            session.insert(DEPARTMENT1, pair.first).await?;
            session.insert(DEPARTMENT2, pair.second).await?;

            let listing = CourseService::compare_departments(&state.db, &pair).await?;
            session.insert(COURSE_INFO, &listing).await?;
            Default::default()
        }
        Err(errors) => {
            debug!("Rejected department form: {errors:?}");
            errors
        }
    };

    let department1: Option<DepartmentCode> = session.get(DEPARTMENT1).await?;
    let department2: Option<DepartmentCode> = session.get(DEPARTMENT2).await?;
    let course_info: CourseListing = session.get(COURSE_INFO).await?.unwrap_or_default();
    let rows: Vec<_> = course_info
        .iter()
        .map(|(title, section)| (title, section.fields()))
        .collect();

    let form_view = FormView::new(session::csrf_token(&session).await?)
        .value(DepartmentPair::FIRST_FIELD, form.department1.as_deref())
        .value(DepartmentPair::SECOND_FIELD, form.department2.as_deref())
        .errors(errors);

    let messages = session::take_flashes(&session).await?;
    let page = state.templates.render(
        "response.html",
        context! {
            messages => messages,
            form => form_view,
            choices => DepartmentCode::choices(),
            department1 => department1,
            department2 => department2,
            headers => SectionDisplay::HEADERS,
            course_info => rows,
        },
    )?;

    Ok(page)
}
