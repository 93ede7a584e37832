//! Facade crate for `ItemHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ihub` with the `server` feature flag.
//! - Call `ihub::init` to build feature slices; extend as new slices appear.

pub use ihub_domain as domain;
use ihub_domain::config::ApiConfig;
use ihub_domain::registry::InitializedSlice;
pub use ihub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use ihub_items::router as items_router;
        pub use ihub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ihub_items as items;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "items",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Item registry
    slices.push(features::items::init(&config.items)?);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_registers_items_slice() {
        let slices = init(&ApiConfig::default()).expect("init should succeed");
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].id, std::any::TypeId::of::<features::items::Items>());
        assert!(slices[0].downcast_ref::<features::items::Items>().is_some());
    }

    #[test]
    fn items_feature_is_always_enabled() {
        assert!(features::is_enabled("items"));
        assert!(!features::is_enabled("billing"));
    }
}
