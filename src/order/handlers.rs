//! Order hand-off route handlers
//!
//! Checkout endpoints compose the order, return the link the page should
//! open, and empty the cart.

use super::{handoff::checkout, models::*};
use crate::cart::state::SharedState;
use crate::error::Result;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

/// Creates routes for order hand-off operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/order/preview", get(preview_order))
        .route("/checkout/whatsapp", post(checkout_whatsapp))
        .route("/checkout/instagram", post(checkout_instagram))
}

/// Endpoint: GET /order/preview?format=long|short
/// Returns the order message without touching the cart.
async fn preview_order(
    State(state): State<SharedState>,
    Query(query): Query<PreviewQuery>,
) -> String {
    let now = Local::now().naive_local();
    state.cart().to_order_text(query.format, now)
}

/// Endpoint: POST /checkout/whatsapp
async fn checkout_whatsapp(State(state): State<SharedState>) -> Result<Json<Handoff>> {
    handoff(&state, Channel::WhatsApp)
}

/// Endpoint: POST /checkout/instagram
async fn checkout_instagram(State(state): State<SharedState>) -> Result<Json<Handoff>> {
    handoff(&state, Channel::Instagram)
}

fn handoff(state: &SharedState, channel: Channel) -> Result<Json<Handoff>> {
    let now = Local::now().naive_local();
    let mut cart = state.cart();
    let handoff = checkout(&mut cart, channel, &state.channels, now)?;
    Ok(Json(handoff))
}
