use axum::routing::get;
use axum::{Json, Router};
use ihub::kernel::prelude::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "ItemHub API", description = "In-memory item registry"),
    tags(
        (name = "System", description = "Service health"),
        (name = "Items", description = "Item CRUD operations"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(ihub::server::router::system_router())
        .merge(ihub::server::router::items_router())
        .with_state(state)
        .split_for_parts();

    let document = api_doc.clone();
    let document_route = get(move || {
        let document = document.clone();
        async move { Json(document) }
    });

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url("/docs", api_doc))
        .route("/openapi.json", document_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
