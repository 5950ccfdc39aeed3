use thiserror::Error;

/// Store-level failures.
///
/// Every collection operation makes a single attempt; a failure surfaces
/// immediately as one of these variants and never as a partial result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Log decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("BSON serialize error: {0}")]
    Serialize(#[from] bson::ser::Error),

    #[error("BSON deserialize error: {0}")]
    Deserialize(#[from] bson::de::Error),

    #[error("Corrupt log: {0}")]
    Corrupt(String),
}
