//! Order message composition
//!
//! Both messages are pure functions of the line items and a timestamp.

use chrono::{Locale, NaiveDateTime};

use super::models::*;
use crate::cart::{helpers::cart_total, models::LineItem};

/// Mexican-Spanish long date with a 24-hour time
const TIMESTAMP_FORMAT: &str = "%-d de %B de %Y, %H:%M";

/// Formats a timestamp as a Mexican-Spanish long date: `18 de octubre de 2026, 14:05`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.and_utc()
        .format_localized(TIMESTAMP_FORMAT, Locale::es_MX)
        .to_string()
}

/// Composes the order message in the requested format.
pub fn compose_order_text(items: &[LineItem], format: OrderFormat, now: NaiveDateTime) -> String {
    match format {
        OrderFormat::Long => compose_long(items, now),
        OrderFormat::Short => compose_short(items),
    }
}

/// Percent-encodes an order message for use as a URL query value.
pub fn encode_message(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

fn compose_long(items: &[LineItem], now: NaiveDateTime) -> String {
    let mut message = String::from("☕ *PEDIDO ORIGIN CAFÉ* ☕\n\n");
    message.push_str(&format!("📅 *Fecha:* {}\n\n", format_timestamp(now)));
    message.push_str("🛒 *Productos:*\n");

    for (index, item) in items.iter().enumerate() {
        message.push_str(&format!("{}. {}\n", index + 1, item.display_name));
        message.push_str(&format!(
            "   💰 Precio: ${} x {} = ${}\n\n",
            item.unit_price,
            item.quantity,
            item.line_total()
        ));
    }

    message.push_str(&format!("💳 *TOTAL: ${}*\n\n", cart_total(items)));
    message.push_str(&format!("{}\n{}\n{}\n\n", ORIGIN_LINE, ALTITUDE_LINE, CERTIFICATION_LINE));
    message.push_str(&format!("{}\n\n", TAGLINE));
    message.push_str("¿Está correcto tu pedido? 😊");
    message
}

fn compose_short(items: &[LineItem]) -> String {
    let mut message = String::from("☕ Pedido ORIGIN CAFÉ!\n\n");

    for (index, item) in items.iter().enumerate() {
        message.push_str(&format!("{}. {}\n", index + 1, item.display_name));
        message.push_str(&format!(
            "   ${} x {} = ${}\n",
            item.unit_price,
            item.quantity,
            item.line_total()
        ));
    }

    message.push_str(&format!("\n💳 Total: ${}\n", cart_total(items)));
    message.push_str(&format!("{}\n", SHORT_ORIGIN_LINE));
    message.push_str(HASHTAGS);
    message
}
