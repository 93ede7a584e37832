//! Axum plumbing shared by every slice: state, slice extraction, response envelopes and
//! the system endpoints.

mod extract;
mod health;
mod response;
pub mod router;
mod state;

pub use extract::Slice;
pub use health::HealthResponse;
pub use response::MessageResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
