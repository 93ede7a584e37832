use super::health;
use axum::extract::FromRef;
use ihub_domain::config::ApiConfig;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Service-level routes (`/health`), generic over any state that can yield an [`ApiConfig`].
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    ApiConfig: FromRef<S>,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
