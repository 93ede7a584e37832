//! Literals shared between slices, the kernel and the server binary.

/// `OpenAPI` tag for service-level endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the item registry endpoints.
pub const ITEMS_TAG: &str = "Items";

/// Service name reported by the health endpoint unless overridden in config.
pub const DEFAULT_SERVICE_NAME: &str = "backend-api";
/// Port used when neither the config file nor the environment provides one.
pub const DEFAULT_PORT: u16 = 3000;

/// Plain environment variable that overrides `server.port`.
pub const PORT_ENV: &str = "PORT";
/// Prefix for structured environment overrides (`IHUB__SERVER__PORT`).
pub const ENV_PREFIX: &str = "IHUB";
/// Separator between nested keys in structured environment overrides.
pub const ENV_SEPARATOR: &str = "__";
