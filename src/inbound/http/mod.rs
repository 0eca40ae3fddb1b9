pub mod handlers;
pub mod responses;
mod router;

pub use router::router;
