use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use database::entities::{course, department};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Value, prelude::Time,
};
use server::{config::Config, router::build_router, state::AppState};
use std::collections::BTreeMap;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

fn app(db: DatabaseConnection, csrf_enabled: bool) -> Router {
    let config = Config {
        database_url: "postgresql://localhost/course_project".to_string(),
        bind_address: "127.0.0.1:3000".parse().unwrap(),
        csrf_enabled,
        session_secure: false,
        session_ttl_minutes: 60,
    };
    build_router(AppState::new(db, config).unwrap(), MemoryStore::default())
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
        .expect("session cookie")
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

/// Result of the advisory lock taken before the duplicate-title check
fn title_lock() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn department(id: i32, code: &str, name: &str) -> department::Model {
    department::Model {
        id,
        code: Some(code.to_string()),
        name: Some(name.to_string()),
    }
}

fn joined_row(
    code: &str,
    course: &str,
    title: &str,
    professor: &str,
) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("code", Value::from(code)),
        ("name", Value::from(format!("{code} Department"))),
        ("course", Value::from(course)),
        ("number", Value::from(1)),
        ("title", Value::from(title)),
        ("full_name", Value::from(professor)),
        ("days", Value::from("MWF")),
        ("start", Value::from(Time::from_hms_opt(10, 0, 0))),
        ("end", Value::from(Time::from_hms_opt(10, 50, 0))),
    ])
}

#[tokio::test]
async fn test_health() {
    let response = app(empty_db(), false).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_index_lists_department_choices() {
    let response = app(empty_db(), false).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"<select class="form-select" id="department1" name="department1">"#));
    assert!(body.contains(r#"<option value="ACP">ACP</option>"#));
    assert!(body.contains(r#"<option value="WGS">WGS</option>"#));
}

#[tokio::test]
async fn test_submit_lists_courses_of_both_departments() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            department(1, "CSC", "Computer Science"),
            department(2, "MTH", "Mathematics"),
        ]])
        .append_query_results([vec![
            joined_row("CSC", "CSC 101", "Intro to Computing", "Ada Lovelace"),
            joined_row("MTH", "MTH 210", "Calculus I", "Emmy Noether"),
        ]])
        .into_connection();

    let response = app(db, false)
        .oneshot(post_form("/", "department1=CSC&department2=MTH", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Courses in CSC and MTH"));
    assert!(body.contains("<td>Intro to Computing</td>"));
    assert!(body.contains("<td>Ada Lovelace</td>"));
    assert!(body.contains("<td>Calculus I</td>"));
    assert!(body.contains("<td>10:00:00</td>"));
    assert!(body.contains(r#"<option value="MTH" selected>MTH</option>"#));
}

#[tokio::test]
async fn test_submit_rejects_same_department_without_querying() {
    // An empty mock would fail any query with a 500
    let response = app(empty_db(), false)
        .oneshot(post_form("/", "department1=BIO&department2=BIO", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Departments can not be the same, please choose a different department"));
    assert!(!body.contains("<table"));
}

#[tokio::test]
async fn test_session_keeps_last_valid_departments() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            department(1, "CSC", "Computer Science"),
            department(2, "MTH", "Mathematics"),
        ]])
        .append_query_results([vec![joined_row(
            "CSC",
            "CSC 101",
            "Intro to Computing",
            "Ada Lovelace",
        )]])
        .into_connection();
    let app = app(db, false);

    let response = app
        .clone()
        .oneshot(post_form("/", "department1=CSC&department2=MTH", None))
        .await
        .unwrap();
    let cookie = session_cookie(&response);
    assert!(body_text(response).await.contains("<td>Intro to Computing</td>"));

    // An invalid post in the same session clears the listing
    let response = app
        .clone()
        .oneshot(post_form(
            "/",
            "department1=BIO&department2=BIO",
            Some(&cookie),
        ))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Departments can not be the same"));
    assert!(!body.contains("<table"));
    assert!(!body.contains("Intro to Computing"));

    // but the form still pre-selects the last valid pair
    let response = app.oneshot(get_with_cookie("/", &cookie)).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains(r#"<option value="CSC" selected>CSC</option>"#));
    assert!(body.contains(r#"<option value="MTH" selected>MTH</option>"#));
    assert!(!body.contains(r#"<option value="BIO" selected>"#));
}

#[tokio::test]
async fn test_add_course_rejects_overlong_title() {
    let title = "x".repeat(65);
    let response = app(empty_db(), false)
        .oneshot(post_form(
            "/add",
            &format!("course=CSC+330&title={title}"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Field cannot be longer than 64 characters."));
    assert!(!body.contains("Course Added Successfully"));
}

#[tokio::test]
async fn test_submit_rejects_unknown_department() {
    let response = app(empty_db(), false)
        .oneshot(post_form("/", "department1=XYZ&department2=CSC", None))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("Not a valid choice."));
}

#[tokio::test]
async fn test_add_course_creates_course() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([title_lock()])
        .append_query_results([Vec::<course::Model>::new()])
        .append_query_results([vec![course::Model {
            id: 12,
            course: Some("CSC 330".to_string()),
            title: Some("Operating Systems".to_string()),
            department_id: None,
        }]])
        .into_connection();

    let response = app(db, false)
        .oneshot(post_form("/add", "course=CSC+330&title=Operating+Systems", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Course Added Successfully"));
    assert!(body.contains("Submitted: CSC 330 Operating Systems"));
}

#[tokio::test]
async fn test_add_course_reports_duplicate_title() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([title_lock()])
        .append_query_results([vec![course::Model {
            id: 3,
            course: Some("CSC 101".to_string()),
            title: Some("Intro to Computing".to_string()),
            department_id: Some(1),
        }]])
        .into_connection();

    let response = app(db, false)
        .oneshot(post_form("/add", "course=CSC+102&title=Intro+to+Computing", None))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("Course already exists, please add a different course"));
    assert!(!body.contains("Course Added Successfully"));
}

#[tokio::test]
async fn test_add_course_requires_title() {
    let response = app(empty_db(), false)
        .oneshot(post_form("/add", "course=CSC+330&title=", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("This field is required."));
    assert!(body.contains(r#"name="course" value="CSC 330""#));
}

#[tokio::test]
async fn test_csrf_token_required_when_enabled() {
    let response = app(empty_db(), true)
        .oneshot(post_form("/add", "course=CSC+330&title=Operating+Systems", None))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert!(body.contains("The CSRF token is missing."));
    assert!(!body.contains("Course Added Successfully"));
}

#[tokio::test]
async fn test_csrf_token_round_trip() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([title_lock()])
        .append_query_results([Vec::<course::Model>::new()])
        .append_query_results([vec![course::Model {
            id: 5,
            course: Some("ART 120".to_string()),
            title: Some("Drawing".to_string()),
            department_id: None,
        }]])
        .into_connection();
    let app = app(db, true);

    let response = app.clone().oneshot(get("/add")).await.unwrap();
    let cookie = session_cookie(&response);
    let body = body_text(response).await;

    let marker = r#"name="csrf_token" value=""#;
    let start = body.find(marker).expect("csrf field") + marker.len();
    let token = &body[start..start + body[start..].find('"').unwrap()];

    // A token from another session is rejected
    let response = app
        .clone()
        .oneshot(post_form(
            "/add",
            "course=ART+120&title=Drawing&csrf_token=forged",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert!(body_text(response).await.contains("The CSRF token is invalid."));

    let response = app
        .oneshot(post_form(
            "/add",
            &format!("course=ART+120&title=Drawing&csrf_token={token}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert!(body_text(response).await.contains("Course Added Successfully"));
}

#[tokio::test]
async fn test_api_compare_rejects_invalid_pair() {
    let response = app(empty_db(), false)
        .oneshot(get("/api/courses?department1=CSC&department2=CSC"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        errors["department2"][0],
        "Departments can not be the same, please choose a different department"
    );
}

#[tokio::test]
async fn test_api_compare_returns_courses() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![department(4, "PHY", "Physics")]])
        .append_query_results([vec![joined_row(
            "PHY",
            "PHY 151",
            "General Physics",
            "Lise Meitner",
        )]])
        .into_connection();

    let response = app(db, false)
        .oneshot(get("/api/courses?department1=PHY&department2=CHM"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["department1"], "PHY");
    assert_eq!(json["department2"], "CHM");
    assert_eq!(json["courses"][0]["title"], "General Physics");
    assert_eq!(json["courses"][0]["full_name"], "Lise Meitner");
    assert_eq!(json["courses"][0]["start"], "10:00:00");
}

#[tokio::test]
async fn test_api_lists_departments() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            department(1, "ART", "Art"),
            department(2, "BIO", "Biology"),
        ]])
        .into_connection();

    let response = app(db, false)
        .oneshot(get("/api/departments"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json[1]["code"], "BIO");
    assert_eq!(json[1]["name"], "Biology");
    assert_eq!(
        json[0].as_object().unwrap().keys().collect::<Vec<_>>(),
        ["code", "name"]
    );
}
