#[derive(Debug, thiserror::Error)]
pub enum DrawerError {
    #[error("invalid drawer config: {0}")]
    InvalidConfig(#[from] garde::Report),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
