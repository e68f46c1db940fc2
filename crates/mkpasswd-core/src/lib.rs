//! # mkpasswd core
//!
//! Core library for mkpasswd - a passphrase generator in the spirit of the
//! babble strings produced by the Bellcore S/Key OTP generator. Six words
//! are selected at random from a dictionary of 2048 short words, yielding
//! 2^66 possible passphrases; the security of the result is reducible to
//! the security of the underlying OS random device.
//!
//! This crate provides the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **words**: the fixed 2048-word dictionary, compiled in
//! - **source**: the random source adapter over the OS secure random device
//! - **phrase**: selection, delimiter modes, and passphrase rendering
//! - **error**: the error hierarchy shared by all of the above

pub mod error;
pub mod phrase;
pub mod source;
pub mod words;

pub use error::{MkpasswdError, Result};
pub use phrase::{Delimiter, Passphrase, PHRASE_BITS, WORDS_PER_PHRASE};
pub use source::{DeviceSource, RandomSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
