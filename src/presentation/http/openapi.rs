// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const DEFAULT_SERVER: &str = "http://localhost:4010";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::categories::gallery,
        crate::presentation::http::controllers::photos::list_photos,
        crate::presentation::http::controllers::photos::create_photo,
        crate::presentation::http::controllers::photos::get_photo,
        crate::presentation::http::controllers::photos::update_photo,
        crate::presentation::http::controllers::photos::delete_photo,
        crate::presentation::http::controllers::photos::get_photo_by_slug,
        crate::presentation::http::controllers::sizes::list_sizes,
        crate::presentation::http::controllers::sizes::create_size,
        crate::presentation::http::controllers::sizes::update_size,
        crate::presentation::http::controllers::sizes::delete_size,
        crate::presentation::http::controllers::frames::list_frames,
        crate::presentation::http::controllers::frames::create_frame,
        crate::presentation::http::controllers::frames::update_frame,
        crate::presentation::http::controllers::frames::delete_frame,
        crate::presentation::http::controllers::formats::list_formats,
        crate::presentation::http::controllers::formats::get_format,
        crate::presentation::http::controllers::formats::create_format,
        crate::presentation::http::controllers::formats::update_format,
        crate::presentation::http::controllers::formats::delete_format,
        crate::presentation::http::controllers::prices::list_prices,
        crate::presentation::http::controllers::prices::create_price,
        crate::presentation::http::controllers::prices::update_price,
        crate::presentation::http::controllers::prices::delete_price,
        crate::presentation::http::controllers::orders::list_orders,
        crate::presentation::http::controllers::orders::create_order,
        crate::presentation::http::controllers::orders::get_order,
        crate::presentation::http::controllers::orders::update_order
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::fields::KeywordsInput,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::photos::CreatePhotoRequest,
            crate::presentation::http::controllers::photos::UpdatePhotoRequest,
            crate::presentation::http::controllers::sizes::CreateSizeRequest,
            crate::presentation::http::controllers::sizes::UpdateSizeRequest,
            crate::presentation::http::controllers::frames::CreateFrameRequest,
            crate::presentation::http::controllers::frames::UpdateFrameRequest,
            crate::presentation::http::controllers::formats::CreateFormatRequest,
            crate::presentation::http::controllers::formats::UpdateFormatRequest,
            crate::presentation::http::controllers::prices::CreatePriceRequest,
            crate::presentation::http::controllers::prices::UpdatePriceRequest,
            crate::presentation::http::controllers::orders::CreateOrderRequest,
            crate::presentation::http::controllers::orders::UpdateOrderRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategoryListItemDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::GalleryDto,
            crate::application::dto::PhotoDto,
            crate::application::dto::PhotoDetailDto,
            crate::application::dto::SizeDto,
            crate::application::dto::FrameDto,
            crate::application::dto::FormatDto,
            crate::application::dto::PriceDto,
            crate::application::dto::OrderDto,
            crate::application::dto::OrderItemDto
        )
    ),
    tags(
        (name = "Categories", description = "Photo categories and galleries"),
        (name = "Photos", description = "Photo catalog"),
        (name = "Sizes", description = "Print sizes"),
        (name = "Frames", description = "Frame styles"),
        (name = "Formats", description = "Print formats"),
        (name = "Prices", description = "Size price points"),
        (name = "Orders", description = "Orders recorded from checkout"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Photo Admin API",
        description = "Administration backend for a photography print store",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.description = Some("The configured admin API key.".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut seen = HashSet::new();
        for url in server_urls(
            env::var("PUBLIC_API_URLS").ok().as_deref(),
            env::var("PUBLIC_API_URL").ok().as_deref(),
        ) {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Server URLs for the document: the comma-separated list wins over the
/// single URL, and the local listener is always present.
fn server_urls(list: Option<&str>, single: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = list
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();

    if urls.is_empty() {
        urls.extend(
            single
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        );
    }

    if !urls.iter().any(|url| url == DEFAULT_SERVER) {
        urls.push(DEFAULT_SERVER.to_string());
    }
    urls
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_list_takes_precedence_and_is_trimmed() {
        let urls = server_urls(
            Some(" https://api.example/ , ,https://admin.example"),
            Some("https://ignored.example"),
        );
        assert_eq!(
            urls,
            vec![
                "https://api.example",
                "https://admin.example",
                DEFAULT_SERVER
            ]
        );
    }

    #[test]
    fn single_url_is_used_when_list_is_absent() {
        let urls = server_urls(None, Some("https://api.example/"));
        assert_eq!(urls, vec!["https://api.example", DEFAULT_SERVER]);
    }

    #[test]
    fn every_mutating_route_requires_bearer_auth() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["components"]["securitySchemes"]["bearerAuth"].is_object());

        let create = &json["paths"]["/api/photos"]["post"];
        assert!(create.get("security").is_none(), "inherits global bearer auth");

        let list = &json["paths"]["/api/photos"]["get"];
        assert_eq!(list["security"], serde_json::json!([{}]));
    }
}
