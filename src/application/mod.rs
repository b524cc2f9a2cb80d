// Application layer - Matching, resolving, building and auditing boards
pub mod asset_matcher;
pub mod audit_service;
pub mod board_service;
pub mod deploy_service;
pub mod error;
pub mod looker_api;

#[cfg(test)]
pub mod mock;
