//! Request → route → action → view, wired the way an application does it

use axum::http::{HeaderMap, HeaderValue, Method as HttpMethod, Uri};
use pretty_assertions::assert_eq;
use rstest::rstest;
use proton::{
    Controller, Database, DatabaseConfig, Fields, HttpsMode, Registry, RequestContext,
    RouteError, RouteOptions, StatusCode,
};
use serde_json::json;
use std::fs;

type Action = fn(&mut App) -> Result<String, StatusCode>;

struct App {
    db: Database,
    views: Controller,
    _dir: tempfile::TempDir,
}

impl App {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("users")).unwrap();
        fs::write(
            dir.path().join("users/list.html"),
            "<p>{count} users, newest {newest.name}</p>",
        )
        .unwrap();

        let mut db = Database::connect(&DatabaseConfig::sqlite_memory()).unwrap();
        db.run_sql("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .unwrap();

        Self {
            db,
            views: Controller::new(dir.path(), "html"),
            _dir: dir,
        }
    }
}

fn list_users(app: &mut App) -> Result<String, StatusCode> {
    let rows = app
        .db
        .select(&["id", "name"], "users", &Fields::new())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let newest = rows.iter().max_by_key(|row| row.get("id").and_then(|id| id.as_i64()));

    app.views
        .view("users/list", &json!({ "count": rows.len(), "newest": newest }))
        .map(|page| page.html)
        .map_err(|err| err.status_code())
}

fn create_user(app: &mut App) -> Result<String, StatusCode> {
    app.db
        .insert("users", &Fields::new().with("name", "Ann"))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok("created".to_string())
}

fn missing_view(app: &mut App) -> Result<String, StatusCode> {
    app.views
        .view("users/detail", &json!({}))
        .map(|page| page.html)
        .map_err(|err| err.status_code())
}

fn routes() -> Registry<Action> {
    let mut routes: Registry<Action> = Registry::new();
    routes.get("users", list_users, RouteOptions::new().with("name", "users"));
    routes.post("users", create_user, RouteOptions::new());
    routes.get(
        "users/detail",
        missing_view,
        RouteOptions::new()
            .with("name", "user_detail")
            .with("host", ["admin.example.com", "backup.example.com"]),
    );
    routes
}

fn dispatch(
    routes: &Registry<Action>,
    app: &mut App,
    ctx: &RequestContext,
) -> Result<String, StatusCode> {
    let route = routes.fetch(&ctx.criteria()).ok_or(StatusCode::NOT_FOUND)?;
    (route.action())(app)
}

fn request(method: HttpMethod, uri: &str) -> RequestContext {
    let mut headers = HeaderMap::new();
    headers.insert("host", HeaderValue::from_static("example.com"));
    RequestContext::new(method, &uri.parse::<Uri>().unwrap(), headers)
}

#[test]
fn test_dispatch_runs_matching_action() {
    let routes = routes();
    let mut app = App::new();

    assert_eq!(
        dispatch(&routes, &mut app, &request(HttpMethod::POST, "/users")),
        Ok("created".to_string())
    );
    dispatch(&routes, &mut app, &request(HttpMethod::POST, "/users")).unwrap();

    let page = dispatch(&routes, &mut app, &request(HttpMethod::GET, "/users")).unwrap();
    assert_eq!(page, "<p>2 users, newest Ann</p>");
}

#[test]
fn test_unknown_route_and_missing_view() {
    let routes = routes();
    let mut app = App::new();

    assert_eq!(
        dispatch(&routes, &mut app, &request(HttpMethod::GET, "/nope")),
        Err(StatusCode::NOT_FOUND)
    );
    assert_eq!(
        dispatch(&routes, &mut app, &request(HttpMethod::GET, "/users/detail")),
        Err(StatusCode::NOT_FOUND)
    );
}

#[test]
fn test_unsupported_methods_dispatch_as_get() {
    let routes = routes();
    let mut app = App::new();

    let page = dispatch(&routes, &mut app, &request(HttpMethod::PUT, "/users")).unwrap();
    assert_eq!(page, "<p>0 users, newest {newest.name}</p>");
}

#[rstest]
#[case("users", HttpsMode::Auto, "http://example.com/users")]
#[case("users", HttpsMode::On, "https://example.com/users")]
#[case("users", HttpsMode::Off, "http://example.com/users")]
#[case("user_detail", HttpsMode::Auto, "http://admin.example.com/users/detail")]
fn test_reverse_urls_follow_request_origin(
    #[case] name: &str,
    #[case] mode: HttpsMode,
    #[case] expected: &str,
) {
    let ctx = request(HttpMethod::GET, "/users");
    assert_eq!(routes().url_for_name(name, mode, &ctx.origin()), Ok(expected.to_string()));
}

#[test]
fn test_reverse_url_for_unknown_name() {
    let ctx = request(HttpMethod::GET, "/users");
    assert!(matches!(
        routes().url_for_name("gone", HttpsMode::Auto, &ctx.origin()),
        Err(RouteError::NotFound(_))
    ));
}
