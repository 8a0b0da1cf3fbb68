mod error;
mod extractor;
mod init;
mod openapi;

pub mod models;
pub mod routers;

pub use error::ApiError;
pub use init::{setup_config, setup_db, setup_router};
pub use openapi::ApiDoc;
