pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use crate::{config::Config, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
}
