#[cfg(feature = "cancel")]
pub mod cancel;
#[cfg(feature = "error")]
pub mod error;
