use super::response::MessageResponse;
use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fxhash::FxHashMap;
use ihub_domain::config::ApiConfig;
use ihub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("State validation error: {message}")]
    Validation { message: Cow<'static, str> },
    #[error("State missing feature slice: {message}")]
    MissingSlice { message: Cow<'static, str> },
}

impl IntoResponse for ApiStateError {
    fn into_response(self) -> Response {
        // Only reachable through a wiring bug, so the detail stays in the log.
        error!(error = %self, "Request rejected by application state");
        MessageResponse::failure("Internal server error").with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Application state handed to every handler. Cloning is a pointer copy.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast_ref::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>().ok_or_else(|| ApiStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
        })
    }

    /// Iterates over registered slice names (for diagnostics).
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
    duplicates: Vec<&'static str>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        debug!(slice = slice.name, "Registering feature slice");
        if self.slices.contains_key(&slice.id) {
            self.duplicates.push(slice.name);
        } else {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        slices.into_iter().fold(self, Self::register_slice)
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`ApiStateError::Validation`] if no configuration was provided or a slice type
    /// was registered more than once.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        if !self.duplicates.is_empty() {
            return Err(ApiStateError::Validation {
                message: format!("Feature slice registered twice: {}", self.duplicates.join(", "))
                    .into(),
            });
        }

        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
        })?;

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, slices: self.slices }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug, Clone)]
    struct Counter(u8);

    impl FeatureSlice for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn build_requires_config() {
        let err = ApiState::builder().build().expect_err("config is mandatory");
        assert!(matches!(err, ApiStateError::Validation { .. }));
    }

    #[test]
    fn registered_slice_is_retrievable() {
        let state = ApiState::builder()
            .config(ApiConfig::default())
            .register_slice(InitializedSlice::new(Counter(7)))
            .build()
            .expect("state should build");

        assert_eq!(state.get_slice::<Counter>().map(|p| p.0), Some(7));
        assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["Counter"]);
    }

    #[test]
    fn duplicate_slice_is_rejected() {
        let err = ApiState::builder()
            .config(ApiConfig::default())
            .register_slices([InitializedSlice::new(Counter(1)), InitializedSlice::new(Counter(2))])
            .build()
            .expect_err("same slice type twice");

        assert!(matches!(&err, ApiStateError::Validation { message } if message.contains("Counter")));
    }

    #[test]
    fn missing_slice_is_an_error() {
        let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
        assert!(matches!(state.try_get_slice::<Counter>(), Err(ApiStateError::MissingSlice { .. })));
    }
}
