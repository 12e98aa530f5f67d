//! Hamming windowing for spectral analysis
//!
//! Tapers time-domain signals before the FFT to reduce spectral leakage
//! caused by the sharp discontinuities at the buffer edges.

use std::f64::consts::PI;

use crate::SpectrumError;

/// Generate Hamming window coefficients
///
/// w[n] = 0.54 - 0.46*cos(2πn/(N-1)) for n = 0..N-1
///
/// # Errors
/// `InvalidLength` if `length < 2`: the coefficient denominator is N-1,
/// so a single-sample window is undefined.
pub fn hamming_window(length: usize) -> Result<Vec<f64>, SpectrumError> {
    if length < 2 {
        return Err(SpectrumError::InvalidLength(length));
    }

    let step = 2.0 * PI / (length - 1) as f64;
    Ok((0..length)
        .map(|n| 0.54 - 0.46 * (step * n as f64).cos())
        .collect())
}

/// Apply a Hamming window to a signal
///
/// Returns a new buffer with element i scaled by w[i]; the input is left
/// untouched.
pub fn apply_hamming_window(signal: &[f64]) -> Result<Vec<f64>, SpectrumError> {
    let window = hamming_window(signal.len())?;

    Ok(signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect())
}

/// Amplitude correction factor for the Hamming window
///
/// Windowing attenuates the signal. Multiplying FFT magnitudes by this
/// factor (N divided by the coefficient sum) restores the original scale.
pub fn window_correction_factor(length: usize) -> Result<f64, SpectrumError> {
    let window = hamming_window(length)?;
    let sum: f64 = window.iter().sum();
    Ok(length as f64 / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_near_zero_but_not_zero() {
        let window = hamming_window(1024).unwrap();

        // 0.54 - 0.46*cos(0) = 0.08 at both ends
        assert!((window[0] - 0.08).abs() < 1e-9);
        assert!((window[1023] - 0.08).abs() < 1e-9);
        assert!(window[0] > 0.0);
    }

    #[test]
    fn test_symmetry_and_center() {
        let length = 257;
        let window = hamming_window(length).unwrap();

        for i in 0..length / 2 {
            assert!((window[i] - window[length - 1 - i]).abs() < 1e-12);
        }

        // Odd length puts a sample exactly at the peak
        assert!((window[length / 2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_scales_elementwise() {
        let signal = vec![2.0; 100];
        let windowed = apply_hamming_window(&signal).unwrap();
        let window = hamming_window(100).unwrap();

        assert_eq!(windowed.len(), 100);
        for i in 0..100 {
            assert!((windowed[i] - 2.0 * window[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_too_short_is_rejected() {
        assert_eq!(hamming_window(0), Err(SpectrumError::InvalidLength(0)));
        assert_eq!(hamming_window(1), Err(SpectrumError::InvalidLength(1)));
        assert_eq!(
            apply_hamming_window(&[1.0]),
            Err(SpectrumError::InvalidLength(1))
        );
        assert!(hamming_window(2).is_ok());
    }

    #[test]
    fn test_correction_factor() {
        // Coefficient mean approaches 0.54 for long windows
        let factor = window_correction_factor(1024).unwrap();
        assert!((factor - 1.0 / 0.54).abs() < 0.01);
        assert!(factor > 1.5 && factor < 2.5);
    }
}
