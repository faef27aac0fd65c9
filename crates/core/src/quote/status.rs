//! Quote lifecycle status and acting role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quote lifecycle status.
///
/// Unknown values are preserved verbatim in [`QuoteStatus::Other`] so that a
/// record from a newer backend still renders with a generic label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    /// Request submitted, no quote sent yet.
    #[default]
    Pending,
    /// Provider sent a quote.
    Quoted,
    /// Client accepted the quote.
    Accepted,
    /// Client declined the quote.
    Rejected,
    /// Provider withdrew the quote.
    Withdrawn,
    /// Quote validity lapsed.
    Expired,
    /// Any status outside the known taxonomy.
    Other(String),
}

impl QuoteStatus {
    /// Every member of the known taxonomy, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Quoted,
        Self::Accepted,
        Self::Rejected,
        Self::Withdrawn,
        Self::Expired,
    ];

    /// Wire value of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Quoted => "quoted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::Expired => "expired",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending Response",
            Self::Quoted => "Quote Sent",
            Self::Accepted => "Accepted",
            Self::Rejected => "Declined",
            Self::Withdrawn => "Withdrawn",
            Self::Expired => "Expired",
            Self::Other(_) => "Unknown Status",
        }
    }

    /// CSS modifier class used for the status badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-pending",
            Self::Quoted => "badge-quoted",
            Self::Accepted => "badge-accepted",
            Self::Rejected => "badge-rejected",
            Self::Withdrawn => "badge-withdrawn",
            Self::Expired => "badge-expired",
            Self::Other(_) => "badge-unknown",
        }
    }

    /// Returns true for members of the known taxonomy.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for QuoteStatus {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Self::Pending,
            "quoted" => Self::Quoted,
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            "withdrawn" => Self::Withdrawn,
            "expired" => Self::Expired,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<String> for QuoteStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<QuoteStatus> for String {
    fn from(status: QuoteStatus) -> Self {
        match status {
            QuoteStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The party a report is prepared for. Only changes label phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The customer who requested the quote.
    Client,
    /// The service provider who answers the request.
    #[default]
    Provider,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Wire value of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Provider => "provider",
            Self::Admin => "admin",
        }
    }

    /// Title-cased display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Provider => "Provider",
            Self::Admin => "Admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "provider" => Ok(Self::Provider),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
