use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use blogly_infra::{Database, DatabaseConfig};
use migration::{Migrator, MigratorTrait};

use crate::state::AppState;
use crate::views::Views;

async fn state() -> AppState {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        sql_logging: false,
    };
    let db = Database::init(&config).await.unwrap();
    Migrator::up(db.conn(), None).await.unwrap();

    let views = Views::load(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap();
    AppState::new(db, views)
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state().await))
                .configure(super::configure_routes),
        )
        .await
    };
}

fn form(uri: &str, pairs: &[(&str, &str)]) -> actix_web::test::TestRequest {
    test::TestRequest::post().uri(uri).set_form(pairs.to_vec())
}

fn location(res: &actix_web::dev::ServiceResponse) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// The `name=value` part of the flash Set-Cookie header, as a browser returns it.
fn flash_cookie(res: &actix_web::dev::ServiceResponse) -> String {
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .expect("flash cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

const JOHN: &[(&str, &str)] = &[("first-name", "John"), ("last-name", "Doe"), ("image", "")];

#[actix_rt::test]
async fn test_root_redirects_to_users() {
    let app = app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users");
}

#[actix_rt::test]
async fn test_health_reports_database_up() {
    let app = app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[actix_rt::test]
async fn test_user_pages_render() {
    let app = app!();

    for uri in ["/users", "/users/new", "/tags", "/tags/new"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    }
}

#[actix_rt::test]
async fn test_add_user_then_show() {
    let app = app!();

    let res = test::call_service(&app, form("/users/new", JOHN).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users");

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("John Doe"));
    assert!(body.contains("/users/1/posts/new"));
}

#[actix_rt::test]
async fn test_add_user_without_last_name_returns_to_form() {
    let app = app!();

    let res = test::call_service(
        &app,
        form("/users/new", &[("first-name", "John"), ("last-name", "")]).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users/new");
    let cookie = flash_cookie(&res);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users/new")
            .insert_header((header::COOKIE, cookie))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let cleared = res
        .headers()
        .get_all(header::SET_COOKIE)
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("_flash="))
        .expect("flash removal cookie")
        .to_string();
    assert!(cleared.starts_with("_flash=;"), "{cleared}");
    assert!(cleared.contains("Max-Age=0"), "{cleared}");
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("Please provide both first and last names."));

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("No users yet."));
}

#[actix_rt::test]
async fn test_missing_user_is_404() {
    let app = app!();

    for uri in ["/users/99", "/users/99/edit", "/users/99/posts/new", "/posts/99", "/tags/99"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[actix_rt::test]
async fn test_non_integer_id_is_404() {
    let app = app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/abc").to_request()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_edit_and_delete_user() {
    let app = app!();
    test::call_service(&app, form("/users/new", JOHN).to_request()).await;

    let res = test::call_service(
        &app,
        form(
            "/users/1/edit",
            &[("first-name", "Jane"), ("last-name", "Roe"), ("image", "")],
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users");

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/1").to_request()).await;
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("Jane Roe"));

    let res = test::call_service(&app, form("/users/1/delete", &[]).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users");

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(&app, form("/users/1/delete", &[]).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_add_post_keeps_only_existing_tags() {
    let app = app!();
    test::call_service(&app, form("/users/new", JOHN).to_request()).await;
    test::call_service(&app, form("/tags/new", &[("name", "rust")]).to_request()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/1/posts/new").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("name=\"tag_1\""));

    let res = test::call_service(
        &app,
        form(
            "/users/1/posts/new",
            &[("title", "T"), ("content", "C"), ("tag_1", "on"), ("tag_99", "on")],
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users/1");

    let res = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("<h1>T</h1>"));
    assert!(body.contains("href=\"/tags/1\""));
    assert!(!body.contains("/tags/99"));
}

#[actix_rt::test]
async fn test_add_post_for_missing_user_is_404() {
    let app = app!();

    let res = test::call_service(
        &app,
        form("/users/5/posts/new", &[("title", "T"), ("content", "C")]).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_add_post_without_title_returns_to_form() {
    let app = app!();
    test::call_service(&app, form("/users/new", JOHN).to_request()).await;

    let res = test::call_service(
        &app,
        form("/users/1/posts/new", &[("title", ""), ("content", "C")]).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users/1/posts/new");
    assert!(flash_cookie(&res).starts_with("_flash="));
}

#[actix_rt::test]
async fn test_edit_and_delete_post() {
    let app = app!();
    test::call_service(&app, form("/users/new", JOHN).to_request()).await;
    test::call_service(&app, form("/tags/new", &[("name", "rust")]).to_request()).await;
    test::call_service(
        &app,
        form("/users/1/posts/new", &[("title", "T"), ("content", "C"), ("tag_1", "on")]).to_request(),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/posts/1/edit").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("checked"));

    let res = test::call_service(
        &app,
        form("/posts/1/edit", &[("title", "Renamed"), ("content", "C2")]).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/posts/1");

    let res = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("<h1>Renamed</h1>"));
    assert!(!body.contains("href=\"/tags/1\""));

    let res = test::call_service(&app, form("/posts/1/delete", &[]).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/users/1");

    let res = test::call_service(&app, test::TestRequest::get().uri("/posts/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_edit_post_redirects_by_owner_id() {
    let app = app!();
    test::call_service(&app, form("/users/new", JOHN).to_request()).await;
    test::call_service(
        &app,
        form("/users/new", &[("first-name", "Jane"), ("last-name", "Roe")]).to_request(),
    )
    .await;
    test::call_service(
        &app,
        form("/users/2/posts/new", &[("title", "T"), ("content", "C")]).to_request(),
    )
    .await;

    let res = test::call_service(
        &app,
        form("/posts/1/edit", &[("title", "T2"), ("content", "C2")]).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/posts/2");
}

#[actix_rt::test]
async fn test_tag_lifecycle() {
    let app = app!();

    let res = test::call_service(&app, form("/tags/new", &[("name", "rust")]).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/tags");

    let res = test::call_service(&app, form("/tags/new", &[("name", "rust")]).to_request()).await;
    assert_eq!(location(&res), "/tags/new");

    let res = test::call_service(&app, form("/tags/1/edit", &[("name", "web")]).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/tags/1");

    let res = test::call_service(&app, test::TestRequest::get().uri("/tags/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("<h1>web</h1>"));

    let res = test::call_service(&app, form("/tags/1/delete", &[]).to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/tags");

    let res = test::call_service(&app, test::TestRequest::get().uri("/tags/1").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
