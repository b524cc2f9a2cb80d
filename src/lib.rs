//! Deploy and audit boards between instances, matching dashboards and looks
//! by slug.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
