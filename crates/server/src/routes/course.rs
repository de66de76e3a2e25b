use crate::{
    error::AppError,
    forms::{AddForm, FormView, with_csrf},
    session::{self, COURSE, TITLE},
    state::AppState,
};
use axum::{Form, extract::State, response::Html};
use database::services::course::{AddCourseOutcome, CourseService};
use log::debug;
use minijinja::context;
use models::{course_form::NewCourse, validation::FormErrors};
use tower_sessions::Session;

const ADDED: &str = "Course Added Successfully";
const DUPLICATE: &str = "Course already exists, please add a different course";

/// Empty add-course form
pub async fn add_course_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    // Nothing was submitted, so the remembered entry is cleared
    session.insert(COURSE, None::<String>).await?;
    session.insert(TITLE, None::<String>).await?;

    render(&state, &session, AddForm::default(), FormErrors::new()).await
}

/// Insert the submitted course unless its title is already taken
pub async fn add_course_submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Result<Html<String>, AppError> {
    session.insert(COURSE, &form.course).await?;
    session.insert(TITLE, &form.title).await?;

    let csrf_errors = session::verify_csrf(
        &session,
        form.csrf_token.as_deref(),
        state.config.csrf_enabled,
    )
    .await?;

    let errors = match with_csrf(form.validate(), csrf_errors) {
        Ok(new_course) => {
            match CourseService::add_course(&state.db, new_course).await? {
                AddCourseOutcome::Created(_) => session::flash(&session, ADDED).await?,
                AddCourseOutcome::AlreadyExists(_) => session::flash(&session, DUPLICATE).await?,
            }
            FormErrors::new()
        }
        Err(errors) => {
            debug!("Rejected add-course form: {errors:?}");
            errors
        }
    };

    render(&state, &session, form, errors).await
}

async fn render(
    state: &AppState,
    session: &Session,
    form: AddForm,
    errors: FormErrors,
) -> Result<Html<String>, AppError> {
    let courseadd = session.get::<Option<String>>(COURSE).await?.flatten();
    let titleadd = session.get::<Option<String>>(TITLE).await?.flatten();

    let form_view = FormView::new(session::csrf_token(session).await?)
        .value(NewCourse::COURSE_FIELD, form.course.as_deref())
        .value(NewCourse::TITLE_FIELD, form.title.as_deref())
        .errors(errors);

    let messages = session::take_flashes(session).await?;
    let page = state.templates.render(
        "add_course.html",
        context! {
            messages => messages,
            form => form_view,
            courseadd => courseadd,
            titleadd => titleadd,
        },
    )?;

    Ok(page)
}
