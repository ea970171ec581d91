use thiserror::Error;

/// Convenient result alias for the bolide library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a formula argument fails finite/positive validation.
    #[error("invalid physical quantity: {message}")]
    InvalidQuantity { message: String },

    /// Raised when a mean is requested over an empty set of energies.
    #[error("energy set was empty")]
    EmptyEnergySet,
}
