mod assignment;
mod drafts;
mod inflight;
mod metrics;
mod models;
mod ports;
mod ratings;
mod role;
mod roster;
mod services;

pub use assignment::*;
pub use drafts::*;
pub use inflight::*;
pub use metrics::*;
pub use models::*;
pub use ports::*;
pub use ratings::*;
pub use role::*;
pub use roster::*;
pub use services::*;
