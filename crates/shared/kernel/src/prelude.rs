pub use crate::config::{ConfigError, ConfigLoader, load_config};
pub use ihub_domain::config::ApiConfig;
pub use ihub_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError, MessageResponse, Slice};
