// Infrastructure layer - Configuration and the REST client behind LookerApi
pub mod api_models;
pub mod config;
pub mod looker_client;
