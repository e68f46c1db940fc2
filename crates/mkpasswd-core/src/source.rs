//! Random source adapter over the OS secure random device.
//!
//! The one platform-dependent piece of the program. The device is chosen at
//! compile time, not probed at runtime, because it reflects a known property
//! of each platform's kernel random subsystem:
//!
//! - On Linux the classic `/dev/random` blocks when the kernel considers
//!   its entropy pool low, so the non-blocking `/dev/urandom` is used
//!   instead. This trades a theoretical reduction in entropy quality for
//!   availability.
//! - On FreeBSD and macOS `/dev/random` is a well-seeded 256-bit
//!   Yarrow/Fortuna-class CSPRNG (fed by hardware RNGs where present) that
//!   does not block under normal operation, so it is used directly.
//!
//! Randomness failures are never retried and never substituted with a
//! weaker generator; see [`crate::error`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{MkpasswdError, Result};

/// Path of the secure random device for this platform.
#[cfg(target_os = "linux")]
pub const RANDOM_DEVICE: &str = "/dev/urandom";
/// Path of the secure random device for this platform.
#[cfg(not(target_os = "linux"))]
pub const RANDOM_DEVICE: &str = "/dev/random";

/// A supplier of uniformly distributed random bytes.
///
/// The single capability the rest of the crate needs from a randomness
/// backend. Implementations must return bytes suitable for
/// security-sensitive selection; on any shortfall they must fail rather
/// than pad or repeat.
pub trait RandomSource {
    /// Fill `buf` completely with fresh random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Draw one uniformly distributed 32-bit value.
    ///
    /// Reads exactly four fresh bytes and decodes them native-endian, the
    /// same way the original read a raw `unsigned int` from the device.
    /// One draw is consumed per passphrase word and never reused.
    fn draw_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }
}

/// Random source backed by the platform's secure random character device.
///
/// Holds the device open for the lifetime of the value; the handle is
/// released on drop, covering every exit path. Reads may block on the
/// platforms where [`RANDOM_DEVICE`] has blocking semantics, which is an
/// accepted property of those devices rather than something to engineer
/// around in a short-lived CLI.
pub struct DeviceSource {
    device: PathBuf,
    file: File,
}

impl DeviceSource {
    /// Open the platform's secure random device.
    ///
    /// # Errors
    ///
    /// Returns `MkpasswdError::SourceUnavailable` if the device is missing
    /// or cannot be opened (e.g. permission denied). This is fatal to the
    /// whole program.
    pub fn open() -> Result<Self> {
        Self::open_path(RANDOM_DEVICE)
    }

    /// Open an arbitrary path as the random device.
    ///
    /// Exists so tests can point the adapter at a nonexistent or degenerate
    /// device; production code goes through [`DeviceSource::open`].
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let device = path.as_ref().to_path_buf();
        let file = File::open(&device).map_err(|source| MkpasswdError::SourceUnavailable {
            device: device.clone(),
            source,
        })?;
        Ok(DeviceSource { device, file })
    }

    /// Path of the device this source reads from.
    pub fn device(&self) -> &Path {
        &self.device
    }
}

impl RandomSource for DeviceSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        // Exact-length semantics: a short read is a ReadError, not
        // something to silently top up from elsewhere.
        self.file
            .read_exact(buf)
            .map_err(|source| MkpasswdError::ReadError {
                device: self.device.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_device_is_source_unavailable() {
        let err = DeviceSource::open_path("/nonexistent/random-device")
            .err()
            .expect("open should fail");
        assert!(matches!(err, MkpasswdError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/random-device"));
        // ENOENT from the OS should be available for exit-code propagation.
        assert!(err.os_error_code().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_short_read_is_read_error() {
        // /dev/null yields EOF immediately, so any fill comes up short.
        let mut source = DeviceSource::open_path("/dev/null").expect("open /dev/null");
        let err = source.draw_u32().err().expect("draw should fail");
        assert!(matches!(err, MkpasswdError::ReadError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_platform_device_fills_buffers() {
        let mut source = DeviceSource::open().expect("open platform device");
        assert_eq!(source.device(), Path::new(RANDOM_DEVICE));
        let mut buf = [0u8; 16];
        source.fill(&mut buf).expect("fill should succeed");
        source.draw_u32().expect("draw should succeed");
    }
}
