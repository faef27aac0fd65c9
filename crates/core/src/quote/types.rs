//! Quote record types.

use hireme_shared::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::QuoteStatus;

/// A quote request and its response, as handed over by the host UI.
///
/// Only `id` and `status` are required. Temporal fields are kept as the raw
/// strings the backend sent; they are parsed when a section renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Quote ID.
    pub id: i64,
    /// Human-facing quote number.
    pub quote_number: Option<String>,
    /// Lifecycle status.
    pub status: QuoteStatus,

    /// When the request was created.
    pub created_at: Option<String>,
    /// When the provider responded with a quote.
    pub responded_at: Option<String>,
    /// When the client accepted or declined.
    pub client_responded_at: Option<String>,
    /// When the quote stops being valid.
    pub expires_at: Option<String>,
    /// Date the client wants the service.
    pub requested_date: Option<String>,
    /// Time of day the client wants the service.
    pub requested_time: Option<String>,

    /// Quoted service price.
    pub quoted_price: Option<Decimal>,
    /// Travel fee on top of the service price.
    pub travel_fee: Option<Decimal>,
    /// Estimated duration in hours.
    pub duration_hours: Option<Decimal>,
    /// Request urgency (`normal`, `urgent`, `emergency`, ...).
    pub urgency: Option<String>,

    /// Client message sent with the request.
    pub message: Option<String>,
    /// Legacy request description, used when `message` is empty.
    pub description: Option<String>,
    /// Client requirements.
    pub client_requirements: Option<String>,
    /// Provider response text.
    pub provider_response: Option<String>,
    /// Legacy quote details, used when `provider_response` is empty.
    pub quote_details: Option<String>,
    /// Terms and conditions attached to the quote.
    pub terms_and_conditions: Option<String>,

    /// Service title.
    pub service_title: Option<String>,
    /// Nested service reference.
    pub service: Option<ServiceRef>,
    /// Service category.
    pub service_category: Option<ServiceCategory>,
    /// Service location.
    pub location: Option<Location>,

    /// Client display name.
    pub client_name: Option<String>,
    /// Whether the client's identity is verified.
    #[serde(default)]
    pub client_verified: bool,
    /// Nested client profile.
    pub client: Option<ClientProfile>,
}

/// Nested service reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRef {
    /// Service title.
    pub title: Option<String>,
}

/// Service category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    /// Category name.
    pub name: Option<String>,
    /// Optional icon (usually an emoji).
    pub icon: Option<String>,
    /// Optional accent color.
    pub color: Option<String>,
}

/// Where the service takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Street address.
    pub address: Option<String>,
    /// City or municipality.
    pub city: Option<String>,
    /// Province, state or region.
    pub region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

impl Location {
    /// One-line summary of the non-empty parts, if any.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.city, &self.region, &self.postal_code]
            .into_iter()
            .filter_map(|part| non_blank(part.as_deref()))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Nested client profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub contact_number: Option<String>,
    /// When the client joined the platform.
    pub created_at: Option<String>,
}

impl QuoteRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(id: i64, status: QuoteStatus) -> Self {
        Self {
            id,
            status,
            ..Self::default()
        }
    }

    /// Quote number for display: the explicit number, or `Q` plus the
    /// zero-padded ID.
    #[must_use]
    pub fn display_number(&self) -> String {
        non_blank(self.quote_number.as_deref())
            .map_or_else(|| format!("Q{:06}", self.id), str::to_string)
    }

    /// Service title from the flat field or the nested service.
    #[must_use]
    pub fn service_title(&self) -> Option<&str> {
        non_blank(self.service_title.as_deref()).or_else(|| {
            self.service
                .as_ref()
                .and_then(|service| non_blank(service.title.as_deref()))
        })
    }

    /// Request description: `message` first, `description` only when the
    /// message is empty.
    #[must_use]
    pub fn request_description(&self) -> Option<&str> {
        non_blank(self.message.as_deref()).or_else(|| non_blank(self.description.as_deref()))
    }

    /// Provider response text: `provider_response` first, `quote_details`
    /// only when the response is empty.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        non_blank(self.provider_response.as_deref())
            .or_else(|| non_blank(self.quote_details.as_deref()))
    }

    /// Quoted price, if any.
    #[must_use]
    pub fn quoted_price(&self) -> Option<Money> {
        self.quoted_price.map(Money::new)
    }

    /// Travel fee, zero when absent.
    #[must_use]
    pub fn travel_fee(&self) -> Money {
        self.travel_fee.map(Money::new).unwrap_or_default()
    }

    /// Quoted price plus travel fee, missing figures counted as zero.
    /// `None` when the sum overflows.
    #[must_use]
    pub fn total_amount(&self) -> Option<Money> {
        self.quoted_price().unwrap_or_default().checked_add(self.travel_fee())
    }

    /// Urgency worth flagging: present, non-blank and not `normal`.
    #[must_use]
    pub fn flagged_urgency(&self) -> Option<&str> {
        non_blank(self.urgency.as_deref()).filter(|u| !u.eq_ignore_ascii_case("normal"))
    }
}

/// Treats empty and whitespace-only strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
