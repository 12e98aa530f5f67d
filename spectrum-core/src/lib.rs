//! Spectrum Core - frequency-domain analysis of sampled signals
//!
//! Windows a time-domain sample buffer to reduce spectral leakage, transforms
//! it with a radix-2 FFT, and reduces the complex spectrum to real magnitude
//! bins over the non-redundant half of the frequency axis.
//!
//! ```
//! use spectrum_core::{apply_hamming_window, magnitude_spectrum, FftEngine};
//!
//! let samples: Vec<f64> = (0..8).map(|n| (n as f64 * 0.7).sin()).collect();
//! let windowed = apply_hamming_window(&samples)?;
//! let engine = FftEngine::new(windowed.len())?;
//! let spectrum = engine.process(&windowed)?;
//! let bins = magnitude_spectrum(&spectrum);
//! assert_eq!(bins.len(), 4);
//! # Ok::<(), spectrum_core::SpectrumError>(())
//! ```

use thiserror::Error;

pub mod analysis;
pub mod fft;
pub mod magnitude;
pub mod windowing;

pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
pub use fft::FftEngine;
pub use magnitude::magnitude_spectrum;
pub use windowing::apply_hamming_window;

/// Errors raised by the spectrum pipeline
///
/// All operations are pure and either fully succeed or fail fast on a
/// precondition violation; nothing is retried or recovered locally. NaN and
/// infinity in the input are not errors, they propagate through the
/// arithmetic unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumError {
    /// Input length violates a precondition: not a power of two (FFT),
    /// shorter than two samples (windowing), or different from the engine's
    /// configured size. There is no valid transform for the wrong length,
    /// so the input is never truncated or padded to fit.
    #[error("invalid input length: {0}")]
    InvalidLength(usize),
}
