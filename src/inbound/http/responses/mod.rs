pub mod dashboard;
pub mod health;
pub mod members;
pub mod projects;
pub mod shared;
