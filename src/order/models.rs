//! Order Hand-off Models and Constants
//!
//! This module contains the data structures and constants used when an order
//! leaves the cart for one of the outbound channels.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Base of the WhatsApp click-to-chat link
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
/// Base of Instagram profile links
pub const INSTAGRAM_BASE_URL: &str = "https://www.instagram.com";
/// Message shown when checkout is attempted with nothing in the cart
pub const EMPTY_CART_MESSAGE: &str = "Tu carrito está vacío. ¡Agrega algunos cafés primero!";

/// Provenance lines of the long-form message
pub const ORIGIN_LINE: &str = "🌱 *Origen:* Finca Los Robles, Yecuatla, Veracruz";
pub const ALTITUDE_LINE: &str = "🏔️ *Altitud:* 1200m sobre el nivel del mar";
pub const CERTIFICATION_LINE: &str = "✅ *Certificado:* Orgánico";
pub const TAGLINE: &str = "*The f*cking true origin*";

/// Origin line of the short-form message
pub const SHORT_ORIGIN_LINE: &str = "Origen: Finca Los Robles, Veracruz";
/// Hashtags closing the short-form message
pub const HASHTAGS: &str = "#OriginCafe #CafeOrganico #Mexico";

// =============================================================================
// Order Models
// =============================================================================

/// Which of the two order messages to compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFormat {
    /// Itemized, timestamped, with provenance metadata
    #[default]
    Long,
    /// Itemized and hashtag-tagged
    Short,
}

/// Destination an order is handed off to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Instagram,
}

impl Channel {
    /// Message format each channel receives
    pub fn format(self) -> OrderFormat {
        match self {
            Channel::WhatsApp => OrderFormat::Long,
            Channel::Instagram => OrderFormat::Short,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Instagram => "Instagram",
        }
    }
}

/// Everything the page needs to complete a hand-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Handoff {
    /// Channel the order goes to
    pub channel: Channel,

    /// Link the page opens in a new tab
    pub url: String,

    /// Plain-text order message
    pub message: String,

    /// Text the page should place on the clipboard, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<String>,
}

/// Query for the order preview endpoint
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub format: OrderFormat,
}
