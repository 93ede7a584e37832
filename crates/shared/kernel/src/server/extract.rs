use super::state::{ApiState, ApiStateError};
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use ihub_domain::registry::FeatureSlice;
use std::ops::Deref;

/// Extracts a registered feature slice from [`ApiState`].
///
/// Slices are cheap `Arc` handles, so the extractor hands out a clone. A handler asking for a
/// slice that was never registered is rejected with `500`.
///
/// ```rust,ignore
/// async fn list(Slice(items): Slice<Items>) -> impl IntoResponse { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct Slice<T>(pub T);

impl<T, S> FromRequestParts<S> for Slice<T>
where
    T: FeatureSlice + Clone,
    ApiState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiStateError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = ApiState::from_ref(state);
        state.try_get_slice::<T>().cloned().map(Slice)
    }
}

impl<T> Deref for Slice<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
