// tests/openapi_integration.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use photo_admin::presentation::http::openapi::{docs_router, write_openapi_snapshot};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

async fn fetch_document() -> Value {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = docs_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn openapi_json_lists_admin_routes() {
    let doc = fetch_document().await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/api/categories",
        "/api/categories/{id}",
        "/api/gallery/{slug}",
        "/api/photos/slug/{slug}",
        "/api/frames",
        "/api/orders/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert_eq!(
        doc["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn public_reads_opt_out_of_bearer_auth() {
    let doc = fetch_document().await;
    let list = &doc["paths"]["/api/photos"]["get"];
    assert_eq!(list["security"], serde_json::json!([{}]));

    let create = &doc["paths"]["/api/photos"]["post"];
    assert!(create.get("security").is_none());
}

#[tokio::test]
async fn root_redirects_to_swagger() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = docs_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/docs");
}

#[test]
fn snapshot_is_written_as_json() {
    let dir = std::env::temp_dir().join(format!("photo-admin-openapi-{}", std::process::id()));
    let path = dir.join("nested").join("openapi.json");
    write_openapi_snapshot(&path).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["info"]["title"], "Photo Admin API");
    std::fs::remove_dir_all(dir).unwrap();
}
