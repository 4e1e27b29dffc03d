//! Analytic signal via the frequency-domain Hilbert transform.
//!
//! The analytic signal z(t) = x(t) + i*H{x(t)} pairs the received waveform
//! with its 90°-phase-shifted copy; its magnitude is the instantaneous
//! amplitude envelope, which is exactly the quantity the satellite
//! amplitude-modulated onto the audio carrier.
//!
//! The transform is computed in the frequency domain:
//! 1. FFT of the real signal
//! 2. Double the positive-frequency bins, zero the negative-frequency bins
//!    (DC and, for even lengths, Nyquist stay unchanged)
//! 3. Inverse FFT gives the analytic signal

use crate::fft::Fft;
use rustfft::num_complex::Complex;

/// Hilbert transform processor for a fixed signal length.
///
/// Plans are created for exactly the signal length rather than a padded
/// power of two: zero-padding would smear the envelope near the end of the
/// recording, which is visible as a bright artifact band in the image.
pub struct HilbertTransform {
    fft: Fft,
}

impl HilbertTransform {
    /// Create a processor for signals of exactly `len` samples.
    pub fn new(len: usize) -> Self {
        Self { fft: Fft::new(len) }
    }

    /// Signal length this processor was planned for.
    pub fn len(&self) -> usize {
        self.fft.size()
    }

    /// Whether the planned length is zero.
    pub fn is_empty(&self) -> bool {
        self.fft.size() == 0
    }

    /// Compute the analytic signal.
    ///
    /// `signal` must have exactly the planned length.
    pub fn analytic_signal(&self, signal: &[f32]) -> Vec<Complex<f32>> {
        debug_assert_eq!(signal.len(), self.fft.size());

        let mut buffer: Vec<Complex<f32>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();

        self.fft.forward(&mut buffer);

        let n = buffer.len();
        let half = n / 2;

        // Positive frequencies are doubled. For even n the Nyquist bin at
        // `half` stays unchanged; for odd n there is no Nyquist bin and the
        // positive band extends through `half`.
        let positive_end = if n % 2 == 0 { half } else { half + 1 };
        for sample in buffer.iter_mut().take(positive_end).skip(1) {
            *sample *= 2.0;
        }

        // Negative frequencies are zeroed.
        for sample in buffer.iter_mut().skip(half + 1) {
            *sample = Complex::new(0.0, 0.0);
        }

        self.fft.inverse(&mut buffer);
        buffer
    }

    /// Compute the instantaneous amplitude envelope.
    ///
    /// The envelope is the magnitude of the analytic signal, so it is
    /// non-negative for every input.
    pub fn envelope(&self, signal: &[f32]) -> Vec<f32> {
        self.analytic_signal(signal)
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}
