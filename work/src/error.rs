use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("search ended without a published nonce")]
    Cancelled,
}
