/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation outside the quote calculator returns this.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
