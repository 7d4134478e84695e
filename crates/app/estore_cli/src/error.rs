use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Auth: {}", .0)]
    Auth(#[from] estore_core::auth::AuthError),

    #[error("Catalog: {}", .0)]
    Catalog(#[from] estore_core::catalog::CatalogError),

    #[error("Json: {}", .0)]
    Json(#[from] serde_json::Error),
}
