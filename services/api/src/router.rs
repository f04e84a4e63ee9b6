use axum::{Router, routing::get};
use tower::ServiceBuilder;

use pulse_core::error::{method_not_allowed, not_found};
use pulse_core::middleware::{propagate_request_id_layer, set_request_id_layer, trace_layer};

use crate::domain::port::DatabaseProbe;
use crate::handlers::health::{health_check, ping};
use crate::state::AppState;

pub fn build_router<P>(state: AppState<P>) -> Router
where
    P: DatabaseProbe + Clone + 'static,
{
    Router::new()
        // Health
        .route("/health", get(health_check::<P>))
        .route("/health/", get(health_check::<P>))
        .route("/health/ping", get(ping::<P>))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
