//! Quote domain types consumed by the report engine.

pub mod status;
pub mod types;

pub use status::{QuoteStatus, Role};
pub use types::{ClientProfile, Location, QuoteRecord, ServiceCategory, ServiceRef};
pub(crate) use types::non_blank;
