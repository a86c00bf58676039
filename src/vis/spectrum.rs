//! Spectrum bar track and scrolling spectrogram
//!
//! Ingestion takes one FFT magnitude vector per audio block. Only the lower
//! half of the spectrum is shown (the upper half mirrors it); magnitudes are
//! remapped onto the output axis either linearly or logarithmically and
//! compressed with a square root so quiet content stays visible.
//!
//! Two render modes share the same history:
//! - live bars: the newest vector as a bar chart, frequency on the x axis
//! - spectrogram: a persisted color frame, one column resolved per block at
//!   ingestion time, rendered as a pure two-span copy per row

use crate::color::{bar_edge_color, spectrogram_color};
use crate::config::Colors;
use crate::display::PixelBuffer;
use crate::ring::RingHistory;

/// How the spectrum viewport is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumMode {
    /// Current-frame bar chart
    LiveBars,
    /// Scrolling color-coded history
    Spectrogram,
}

/// Fractional bin position for output pixel `i` of `out_len`, over `bins`
/// usable bins, on a base-10 logarithmic frequency axis.
///
/// Exact at both ends: pixel 0 lands on bin 0 and the last pixel on the
/// last bin.
fn log_bin_position(i: usize, out_len: usize, bins: usize) -> f32 {
    if out_len < 2 || bins < 2 {
        return 0.0;
    }
    let t = i as f32 / (out_len - 1) as f32;
    let v = (10.0f32.powf(t) - 1.0) / 9.0;
    v * (bins - 1) as f32
}

/// Remap a magnitude vector of power-of-two length onto `out_len` output
/// values in [0, 1].
///
/// Uses the lower `len/2` bins; if those still exceed `out_len` they are
/// repeatedly halved by taking evenly strided samples (not averages) until
/// they fit. Magnitudes are linearly interpolated on the log axis, then
/// amplitude-mapped with `sqrt(|m| / len)`.
fn remap(spectrum: &[f32], out_len: usize, log_frequency: bool) -> Vec<f32> {
    let n = spectrum.len();
    if n < 2 || out_len == 0 {
        return vec![0.0; out_len];
    }

    let mut bins = n / 2;
    let mut stride = 1;
    while bins > out_len {
        bins /= 2;
        stride *= 2;
    }

    let magnitude = |b: usize| spectrum[b * stride].abs();
    let value = |m: f32| (m / n as f32).sqrt().min(1.0);

    let mut out = vec![0.0; out_len];
    if log_frequency {
        for (i, slot) in out.iter_mut().enumerate() {
            let pos = log_bin_position(i, out_len, bins);
            let floor = pos as usize;
            let ceil = (floor + 1).min(bins - 1);
            let t = pos - floor as f32;
            let m = magnitude(floor) + (magnitude(ceil) - magnitude(floor)) * t;
            *slot = value(m);
        }
    } else {
        for (i, slot) in out.iter_mut().enumerate().take(bins) {
            *slot = value(magnitude(i));
        }
    }
    out
}

pub struct SpectrumTrack {
    width: usize,
    height: usize,
    log_frequency: bool,
    history: RingHistory<Vec<f32>>,
    /// Persisted spectrogram colors, `height` rows by `width` slot columns,
    /// row-major. Columns are addressed by ring slot, so rendering resolves
    /// scroll order with two span copies per row and never recomputes colors.
    frame: Vec<u32>,
}

impl SpectrumTrack {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            log_frequency: false,
            history: RingHistory::new(width, Vec::new()),
            frame: vec![0; width * height],
        }
    }

    /// Record one magnitude vector.
    ///
    /// Changing the frequency axis invalidates the persisted frame first:
    /// its columns are pre-resolved colors and are not comparable across
    /// axis modes.
    pub fn record(&mut self, spectrum: &[f32], log_frequency: bool) {
        if log_frequency != self.log_frequency {
            self.frame.fill(0);
            self.log_frequency = log_frequency;
        }

        // Resolve this block's spectrogram column once, at ingestion time
        let column = self.history.cursor();
        let values = remap(spectrum, self.height, log_frequency);
        for (j, &v) in values.iter().enumerate() {
            // Low frequencies at the bottom of the viewport
            let row = self.height - 1 - j;
            self.frame[row * self.width + column] = spectrogram_color(v);
        }

        self.history.write(spectrum.to_vec());
    }

    /// Drop all history and blacken the persisted frame
    pub fn reset(&mut self) {
        self.history.reset(Vec::new());
        self.frame.fill(0);
        self.log_frequency = false;
    }

    /// Paint the viewport at (x, y) in the requested mode
    pub fn render(
        &self,
        buffer: &mut PixelBuffer,
        x: i32,
        y: i32,
        colors: &Colors,
        mode: SpectrumMode,
    ) {
        match mode {
            SpectrumMode::LiveBars => self.render_bars(buffer, x, y, colors),
            SpectrumMode::Spectrogram => self.render_spectrogram(buffer, x, y),
        }
    }

    /// Newest vector as vertical bars growing from the bottom edge
    fn render_bars(&self, buffer: &mut PixelBuffer, x: i32, y: i32, colors: &Colors) {
        let h = self.height;
        let values = remap(self.history.latest(), self.width, self.log_frequency);

        for (i, &v) in values.iter().enumerate() {
            let sx = x + i as i32;
            let scaled = v * h as f32;
            let full = (scaled as usize).min(h);
            let frac = scaled - scaled.floor();

            for row in 0..h {
                let from_bottom = h - 1 - row;
                let color = if from_bottom < full {
                    colors.bar
                } else if from_bottom == full && full < h {
                    bar_edge_color(frac)
                } else {
                    colors.background
                };
                buffer.set_pixel(sx, y + row as i32, color);
            }
        }
    }

    /// Persisted frame, scrolled so the oldest column lands on the left.
    ///
    /// The ring cursor points at the oldest slot, so each destination row is
    /// exactly two contiguous copies: `width - cursor` columns starting at
    /// the cursor, then `cursor` columns from slot zero.
    fn render_spectrogram(&self, buffer: &mut PixelBuffer, x: i32, y: i32) {
        let cursor = self.history.cursor();
        for row in 0..self.height {
            let span = &self.frame[row * self.width..(row + 1) * self.width];
            let sy = y + row as i32;
            buffer.copy_row_span(x, sy, &span[cursor..]);
            buffer.copy_row_span(x + (self.width - cursor) as i32, sy, &span[..cursor]);
        }
    }
}
