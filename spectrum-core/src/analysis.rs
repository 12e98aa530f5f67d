//! High-level spectrum analyzer
//!
//! Combines the Hamming window, the FFT engine, and magnitude reduction
//! into a single pipeline, with an optional log-frequency bar reduction
//! for consumers that want a fixed number of display bands.

use crate::fft::FftEngine;
use crate::magnitude::{magnitude_spectrum, magnitude_to_db};
use crate::windowing::{hamming_window, window_correction_factor};
use crate::SpectrumError;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, must be a power of two >= 2)
    pub fft_size: usize,

    /// Sample rate in Hz, used only for the frequency axis and bar mapping
    pub sample_rate: f64,

    /// Undo the window's amplitude loss in the output magnitudes
    pub apply_correction: bool,

    /// Lowest frequency covered by the bar mapping, in Hz
    pub min_bar_frequency: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            sample_rate: 48000.0,
            apply_correction: true,
            min_bar_frequency: 40.0,
        }
    }
}

/// Windowed-FFT spectrum analyzer
///
/// Holds only immutable precomputed tables after construction, so a single
/// analyzer can be shared freely across threads.
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
    window: Vec<f64>,
    correction_factor: f64,
}

impl SpectrumAnalyzer {
    /// Create a new analyzer
    ///
    /// # Errors
    /// `InvalidLength` if the configured FFT size is not a power of two or
    /// is below two samples.
    pub fn new(config: AnalyzerConfig) -> Result<Self, SpectrumError> {
        let fft_engine = FftEngine::new(config.fft_size)?;
        let window = hamming_window(config.fft_size)?;
        let correction_factor = if config.apply_correction {
            window_correction_factor(config.fft_size)?
        } else {
            1.0
        };

        Ok(Self {
            config,
            fft_engine,
            window,
            correction_factor,
        })
    }

    /// Analyze a signal and return its magnitude spectrum
    ///
    /// Pipeline: window, FFT, magnitude reduction over the usable half,
    /// then amplitude correction when configured.
    ///
    /// # Errors
    /// `InvalidLength` if the signal length differs from the FFT size.
    pub fn analyze(&self, signal: &[f64]) -> Result<Vec<f64>, SpectrumError> {
        if signal.len() != self.config.fft_size {
            return Err(SpectrumError::InvalidLength(signal.len()));
        }

        let windowed: Vec<f64> = signal
            .iter()
            .zip(self.window.iter())
            .map(|(&s, &w)| s * w)
            .collect();

        let spectrum = self.fft_engine.process(&windowed)?;
        let mut bins = magnitude_spectrum(&spectrum);

        if self.config.apply_correction {
            for bin in bins.iter_mut() {
                *bin *= self.correction_factor;
            }
        }

        Ok(bins)
    }

    /// Analyze and return the magnitude spectrum in dB
    pub fn analyze_db(&self, signal: &[f64], reference: f64) -> Result<Vec<f64>, SpectrumError> {
        Ok(magnitude_to_db(&self.analyze(signal)?, reference))
    }

    /// Frequency in Hz of each usable bin
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        let spacing = self.bin_spacing_hz();
        (0..self.num_bins()).map(|bin| bin as f64 * spacing).collect()
    }

    /// Reduce magnitude bins to logarithmically spaced display bars
    ///
    /// Each bar covers a widening frequency band (log spacing matches how
    /// pitch is perceived) and carries the peak magnitude of its band.
    pub fn map_to_bars(&self, bins: &[f64], num_bars: usize) -> Vec<f64> {
        if bins.is_empty() || num_bars == 0 {
            return vec![0.0; num_bars];
        }

        let spacing = self.bin_spacing_hz();
        let min_freq = self.config.min_bar_frequency;
        let max_freq = self.config.sample_rate / 2.0;
        let ratio = max_freq / min_freq;

        let mut bars = Vec::with_capacity(num_bars);
        for bar in 0..num_bars {
            let freq_start = min_freq * ratio.powf(bar as f64 / num_bars as f64);
            let freq_end = min_freq * ratio.powf((bar + 1) as f64 / num_bars as f64);

            let start = ((freq_start / spacing) as usize).min(bins.len() - 1);
            let end = ((freq_end / spacing).ceil() as usize).clamp(start + 1, bins.len());

            let peak = bins[start..end].iter().fold(0.0f64, |acc, &b| acc.max(b));
            bars.push(peak);
        }
        bars
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Number of usable frequency bins (fft_size/2)
    pub fn num_bins(&self) -> usize {
        self.fft_engine.num_bins()
    }

    fn bin_spacing_hz(&self) -> f64 {
        self.config.sample_rate / self.config.fft_size as f64
    }
}
