//! Radix-2 FFT engine
//!
//! Iterative in-place Cooley-Tukey decimation-in-time transform. The input
//! is permuted into bit-reversed order so the recursive even/odd split can
//! be evaluated bottom-up, stage by stage, without extra allocation.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::SpectrumError;

/// FFT engine for power-of-two transform sizes
///
/// The bit-reversal permutation is precomputed once at construction;
/// `process` is then a pure function from input buffer to output buffer.
pub struct FftEngine {
    fft_size: usize,

    /// reversal[i] is the slot input element i lands in before stage 1
    reversal: Vec<usize>,
}

impl FftEngine {
    /// Create an engine for the given transform size
    ///
    /// # Errors
    /// `InvalidLength` if `fft_size` is not a power of two. A size of 1 is
    /// valid (the transform of a single element is itself).
    pub fn new(fft_size: usize) -> Result<Self, SpectrumError> {
        if !fft_size.is_power_of_two() {
            return Err(SpectrumError::InvalidLength(fft_size));
        }

        // Number of times the input would have been split in half
        let stages = fft_size.trailing_zeros();

        let mut reversal = vec![0usize; fft_size];
        for (i, slot) in reversal.iter_mut().enumerate() {
            let mut reversed = 0usize;
            for bit in 0..stages {
                if (i >> bit) & 1 == 1 {
                    reversed |= 1 << (stages - bit - 1);
                }
            }
            *slot = reversed;
        }

        Ok(Self { fft_size, reversal })
    }

    /// Transform a real-valued signal
    ///
    /// Samples are lifted to complex values with zero imaginary part.
    ///
    /// # Errors
    /// `InvalidLength` if the signal length differs from the engine size.
    pub fn process(&self, signal: &[f64]) -> Result<Vec<Complex<f64>>, SpectrumError> {
        if signal.len() != self.fft_size {
            return Err(SpectrumError::InvalidLength(signal.len()));
        }

        let lifted: Vec<Complex<f64>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();
        self.process_complex(&lifted)
    }

    /// Transform a complex buffer
    ///
    /// Returns a freshly allocated spectrum of the same length, indexed by
    /// frequency bin (mirrored upper half and Nyquist bin included); the
    /// input is never mutated. Each stage combines pairs with the twiddle
    /// factor e^(i*2π/len), a primitive len-th root of unity.
    ///
    /// # Errors
    /// `InvalidLength` if the buffer length differs from the engine size.
    pub fn process_complex(
        &self,
        input: &[Complex<f64>],
    ) -> Result<Vec<Complex<f64>>, SpectrumError> {
        let n = self.fft_size;
        if input.len() != n {
            return Err(SpectrumError::InvalidLength(input.len()));
        }

        let mut points = vec![Complex::new(0.0, 0.0); n];
        for (i, &value) in input.iter().enumerate() {
            points[self.reversal[i]] = value;
        }

        let mut len = 2;
        while len <= n {
            let factor = Complex::from_polar(1.0, 2.0 * PI / len as f64);
            let mid = len / 2;

            for block in (0..n).step_by(len) {
                let mut w = Complex::new(1.0, 0.0);

                // Pairwise combine the lower and upper halves of the block
                for j in 0..mid {
                    let even = points[block + j];
                    let odd = w * points[block + j + mid];
                    points[block + j] = even + odd;
                    points[block + j + mid] = even - odd;
                    w *= factor;
                }
            }
            len *= 2;
        }

        Ok(points)
    }

    /// Get the transform size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Number of usable frequency bins (fft_size/2, the non-mirrored half)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }
}
