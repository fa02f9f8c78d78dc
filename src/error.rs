use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Card value {card} is out of range ({min}-{max})")]
    CardOutOfRange { card: i32, min: i32, max: i32 },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
