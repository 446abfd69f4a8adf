//! Checkout: composes the order, builds the outbound link and empties the cart.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::message::encode_message;
use super::models::*;
use crate::cart::helpers::format_item_summary;
use crate::cart::store::CartStore;
use crate::config::ChannelConfig;

/// Errors a checkout can end with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Nothing to order.
    #[error("{}", EMPTY_CART_MESSAGE)]
    EmptyCart,
}

/// Click-to-chat link with the message prefilled. Without a configured
/// number the link opens WhatsApp's contact picker instead.
pub fn whatsapp_url(number: &str, encoded_message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        format!("{}/?text={}", WHATSAPP_BASE_URL, encoded_message)
    } else {
        format!("{}/{}?text={}", WHATSAPP_BASE_URL, digits, encoded_message)
    }
}

/// Link to the brand's Instagram profile.
pub fn instagram_profile_url(username: &str) -> String {
    format!(
        "{}/{}",
        INSTAGRAM_BASE_URL,
        urlencoding::encode(username.trim_start_matches('@'))
    )
}

/// Builds the hand-off for `channel` from the current cart, then clears it.
///
/// The cart is only cleared once the hand-off has been built; an empty cart
/// is rejected and left untouched.
pub fn checkout(
    store: &mut CartStore,
    channel: Channel,
    channels: &ChannelConfig,
    now: NaiveDateTime,
) -> Result<Handoff, OrderError> {
    if store.is_empty() {
        tracing::debug!(channel = channel.label(), "checkout rejected: cart is empty");
        return Err(OrderError::EmptyCart);
    }

    let message = store.to_order_text(channel.format(), now);
    let handoff = match channel {
        Channel::WhatsApp => Handoff {
            channel,
            url: whatsapp_url(&channels.whatsapp_number, &encode_message(&message)),
            message,
            clipboard: None,
        },
        Channel::Instagram => Handoff {
            channel,
            url: instagram_profile_url(&channels.instagram_username),
            clipboard: Some(message.clone()),
            message,
        },
    };

    tracing::info!(
        channel = channel.label(),
        items = %format_item_summary(store.items()),
        total = store.total(),
        "order handed off"
    );
    store.clear();

    Ok(handoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    fn channels() -> ChannelConfig {
        ChannelConfig {
            whatsapp_number: "+52 228 123 4567".into(),
            instagram_username: "origin_tfto".into(),
        }
    }

    fn filled_store() -> CartStore {
        let mut store = CartStore::new(Arc::new(MemoryStorage::new()));
        store.add("250g", 150);
        store.add("1kg", 500);
        store
    }

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(whatsapp_url("+52 228 123 4567", "hola"), "https://wa.me/522281234567?text=hola");
        assert_eq!(whatsapp_url("", "hola"), "https://wa.me/?text=hola");
    }

    #[test]
    fn test_instagram_profile_url() {
        assert_eq!(instagram_profile_url("@origin_tfto"), "https://www.instagram.com/origin_tfto");
    }

    #[test]
    fn test_checkout_empty_cart_is_rejected() {
        let mut store = CartStore::new(Arc::new(MemoryStorage::new()));
        let result = checkout(&mut store, Channel::WhatsApp, &channels(), now());

        assert_eq!(result, Err(OrderError::EmptyCart));
        assert_eq!(
            OrderError::EmptyCart.to_string(),
            "Tu carrito está vacío. ¡Agrega algunos cafés primero!"
        );
    }

    #[test]
    fn test_checkout_whatsapp_clears_cart() {
        let mut store = filled_store();
        let handoff = checkout(&mut store, Channel::WhatsApp, &channels(), now()).unwrap();

        assert_eq!(handoff.channel, Channel::WhatsApp);
        assert!(handoff.url.starts_with("https://wa.me/522281234567?text="));
        assert!(handoff.url.contains("TOTAL%3A%20%24650"));
        assert!(handoff.message.contains("18 de octubre de 2026, 14:05"));
        assert_eq!(handoff.clipboard, None);
        assert!(store.is_empty());
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_checkout_instagram_fills_clipboard() {
        let mut store = filled_store();
        let handoff = checkout(&mut store, Channel::Instagram, &channels(), now()).unwrap();

        assert_eq!(handoff.url, "https://www.instagram.com/origin_tfto");
        assert_eq!(handoff.clipboard.as_deref(), Some(handoff.message.as_str()));
        assert!(handoff.message.ends_with("#OriginCafe #CafeOrganico #Mexico"));
        assert!(store.is_empty());
    }
}
