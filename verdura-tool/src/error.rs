use thiserror::Error;

#[derive(Debug, Error)]
pub enum VduError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] verdura_catalog::CatalogError),
}
