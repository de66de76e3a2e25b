pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod forms;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;
pub mod utils;
