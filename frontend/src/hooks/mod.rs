pub mod use_alerts;
pub mod use_campaign;

pub use use_alerts::*;
pub use use_campaign::*;
