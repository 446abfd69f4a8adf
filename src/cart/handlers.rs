//! REST API handlers for cart operations
//!
//! The page's buttons call these endpoints; each mutation answers with the
//! resulting cart so the page can re-render its badge, list and total.

use super::{
    models::*,
    state::SharedState,
    store::CartStore,
    view::{render_cart_count, render_cart_html},
};
use crate::error::Result;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(show_cart))
        .route("/cart/fragment", get(cart_fragment))
        .route("/cart/count", get(cart_count))
        .route("/cart/add", post(add_item))
        .route("/cart/remove", post(remove_item))
        .route("/cart/merge", post(merge_items))
        .route("/cart/clear", post(clear_cart))
}

fn cart_response(cart: &CartStore) -> CartResponse {
    CartResponse {
        items: cart.items().to_vec(),
        total: cart.total(),
        item_count: cart.item_count(),
    }
}

/// Endpoint: GET /cart
async fn show_cart(State(state): State<SharedState>) -> Json<CartResponse> {
    Json(cart_response(&state.cart()))
}

/// Endpoint: GET /cart/fragment
/// Count badge followed by the rendered cart list for the cart modal.
async fn cart_fragment(State(state): State<SharedState>) -> Result<Html<String>> {
    let view = state.cart().view();
    let badge = render_cart_count(&view)?;
    let items = render_cart_html(&view)?;
    Ok(Html(format!("{}\n{}", badge, items)))
}

/// Endpoint: GET /cart/count
/// Item-count badge for the navigation bar.
async fn cart_count(State(state): State<SharedState>) -> Result<Html<String>> {
    let view = state.cart().view();
    Ok(Html(render_cart_count(&view)?))
}

/// Endpoint: POST /cart/add
async fn add_item(
    State(state): State<SharedState>,
    Json(payload): Json<AddItemInput>,
) -> Json<CartResponse> {
    let mut cart = state.cart();
    cart.add(&payload.size, payload.price);
    tracing::debug!(size = %payload.size, price = payload.price, "added to cart");
    Json(cart_response(&cart))
}

/// Endpoint: POST /cart/remove
async fn remove_item(
    State(state): State<SharedState>,
    Json(payload): Json<RemoveItemInput>,
) -> Json<CartResponse> {
    let mut cart = state.cart();
    cart.remove(&payload.size);
    Json(cart_response(&cart))
}

/// Endpoint: POST /cart/merge
async fn merge_items(
    State(state): State<SharedState>,
    Json(payload): Json<MergeItemsInput>,
) -> Json<CartResponse> {
    let mut cart = state.cart();
    cart.merge(payload.items);
    Json(cart_response(&cart))
}

/// Endpoint: POST /cart/clear
async fn clear_cart(State(state): State<SharedState>) -> Json<CartResponse> {
    let mut cart = state.cart();
    cart.clear();
    Json(cart_response(&cart))
}
