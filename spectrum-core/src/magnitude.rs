//! Spectrum reduction: complex bins to real magnitudes
//!
//! For a real-valued input signal the upper half of the FFT output is the
//! conjugate mirror of the lower half and carries no extra information, so
//! only the first N/2 bins are kept.

use num_complex::Complex;

/// Floor applied to magnitudes before the logarithm in dB conversion
const DB_FLOOR: f64 = 1e-10;

/// Reduce a complex spectrum to magnitude bins over the usable half
///
/// Output length is floor(N/2) with bins[i] = |spectrum[i]|. The final
/// slot is deliberately left at zero rather than computed; callers that
/// need that bin must not rely on it carrying a value.
pub fn magnitude_spectrum(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let mid = spectrum.len() / 2;
    let mut bins = vec![0.0; mid];

    for (bin, value) in bins
        .iter_mut()
        .zip(spectrum.iter())
        .take(mid.saturating_sub(1))
    {
        *bin = value.norm();
    }
    bins
}

/// Single-sided amplitude spectrum
///
/// Scales magnitudes so bins read as waveform amplitudes: 1/N at DC and
/// 2/N elsewhere, the factor two folding in the mirrored negative-frequency
/// energy. An exact-bin unit sine reads as 1.0 at its tone bin.
pub fn amplitude_spectrum(spectrum: &[Complex<f64>]) -> Vec<f64> {
    let n = spectrum.len() as f64;
    let mut bins = magnitude_spectrum(spectrum);

    for (i, bin) in bins.iter_mut().enumerate() {
        let scale = if i == 0 { 1.0 / n } else { 2.0 / n };
        *bin *= scale;
    }
    bins
}

/// Convert magnitude bins to dB relative to `reference`
pub fn magnitude_to_db(bins: &[f64], reference: f64) -> Vec<f64> {
    bins.iter()
        .map(|&mag| 20.0 * (mag.max(DB_FLOOR) / reference).log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::FftEngine;
    use std::f64::consts::PI;

    #[test]
    fn test_half_length_and_euclidean_norm() {
        let spectrum = vec![Complex::new(3.0, 4.0); 8];
        let bins = magnitude_spectrum(&spectrum);

        assert_eq!(bins.len(), 4);
        for &bin in &bins[..3] {
            assert!((bin - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_final_slot_always_zero() {
        // Even with energy everywhere, the last usable bin is skipped
        let spectrum = vec![Complex::new(1.0, 1.0); 16];
        let bins = magnitude_spectrum(&spectrum);
        assert_eq!(bins[7], 0.0);

        let tiny = vec![Complex::new(9.0, 0.0); 2];
        assert_eq!(magnitude_spectrum(&tiny), vec![0.0]);
    }

    #[test]
    fn test_four_ones_pipeline() {
        let engine = FftEngine::new(4).unwrap();
        let spectrum = engine.process(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        let bins = magnitude_spectrum(&spectrum);

        assert_eq!(bins.len(), 2);
        assert!((bins[0] - 4.0).abs() < 1e-9);
        assert_eq!(bins[1], 0.0);
    }

    #[test]
    fn test_amplitude_scaling() {
        let n = 64;
        let k = 4;
        let engine = FftEngine::new(n).unwrap();

        let sine: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * k as f64 * i as f64 / n as f64).sin())
            .collect();
        let amplitudes = amplitude_spectrum(&engine.process(&sine).unwrap());
        assert!((amplitudes[k] - 1.0).abs() < 1e-9);

        let dc = vec![0.75; n];
        let amplitudes = amplitude_spectrum(&engine.process(&dc).unwrap());
        assert!((amplitudes[0] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_db_conversion() {
        let db = magnitude_to_db(&[1.0, 10.0, 0.0], 1.0);

        assert!(db[0].abs() < 1e-12);
        assert!((db[1] - 20.0).abs() < 1e-12);
        // Zero magnitude hits the clamp floor instead of -inf
        assert!((db[2] + 200.0).abs() < 1e-12);
    }
}
