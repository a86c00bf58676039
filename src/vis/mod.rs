//! Visualizer: frame compositing over the track histories
//!
//! One `Visualizer` instance owns the waveform and spectrum tracks plus the
//! layout and palette. The host calls `record_block` once per audio block
//! (possibly from its audio thread; the host serializes access) and `render`
//! once per video frame with exclusive write access to the destination
//! buffer. State is explicit and per-instance, so independent visualizers
//! coexist and tests stay deterministic.

mod spectrum;
mod waveform;

pub use spectrum::{SpectrumMode, SpectrumTrack};
pub use waveform::{SamplePair, WaveformTrack};

use crate::config::VisualizerConfig;
use crate::display::{draw_text, PixelBuffer};

pub struct Visualizer {
    config: VisualizerConfig,
    waveform: WaveformTrack,
    spectrum: SpectrumTrack,
    height: u32,
}

impl Visualizer {
    /// Create a visualizer for a destination `width` x `height` pixels.
    /// Both tracks span the full width; the destination must be tall enough
    /// for the configured layout (caller contract).
    pub fn new(width: u32, height: u32, config: VisualizerConfig) -> Self {
        Self {
            waveform: WaveformTrack::new(width as usize),
            spectrum: SpectrumTrack::new(
                width as usize,
                config.layout.spectrum_height as usize,
            ),
            config,
            height,
        }
    }

    fn waveform_top(&self) -> i32 {
        (self.height - self.config.layout.bottom_padding - self.config.layout.waveform_height)
            as i32
    }

    fn spectrum_top(&self) -> i32 {
        self.waveform_top()
            - (self.config.layout.track_padding + self.config.layout.spectrum_height) as i32
    }

    /// Ingestion entry point, once per audio block.
    ///
    /// `spectrum` is the block's FFT magnitude vector (power-of-two length);
    /// `log_frequency` selects the frequency axis for spectral remapping.
    /// Advances the ring cursors; never blocks.
    pub fn record_block(
        &mut self,
        min: f32,
        max: f32,
        spectrum: Option<&[f32]>,
        log_frequency: bool,
    ) {
        self.waveform.record(min, max);
        if let Some(spectrum) = spectrum {
            self.spectrum.record(spectrum, log_frequency);
        }
    }

    /// Render one full frame: spectrum viewport, waveform strip, then the
    /// status-text overlay at the fixed margin.
    pub fn render(&self, buffer: &mut PixelBuffer, text: &str, mode: SpectrumMode) {
        let colors = &self.config.colors;
        self.spectrum
            .render(buffer, 0, self.spectrum_top(), colors, mode);
        self.waveform.render(
            buffer,
            0,
            self.waveform_top(),
            self.config.layout.waveform_height,
            colors,
        );
        draw_text(buffer, text, colors.text);
    }

    /// Reset entry point: zero all history, clear the destination, redraw
    /// only the text. Leaves the visualizer in its freshly constructed
    /// state, so the next record/render pair is the first-draw path again.
    pub fn clear(&mut self, buffer: &mut PixelBuffer, text: &str) {
        self.waveform.reset();
        self.spectrum.reset();
        buffer.clear(0);
        draw_text(buffer, text, self.config.colors.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 480;

    fn test_config() -> VisualizerConfig {
        VisualizerConfig::default()
    }

    fn record_and_render(vis: &mut Visualizer, buffer: &mut PixelBuffer) {
        let spectrum = vec![4.0; 16];
        vis.record_block(-0.5, 0.5, Some(&spectrum), false);
        vis.render(buffer, "status", SpectrumMode::LiveBars);
    }

    #[test]
    fn test_clear_reproduces_first_draw() {
        // A freshly constructed visualizer and a cleared one must produce
        // byte-identical frames from the same input
        let mut fresh = Visualizer::new(WIDTH, HEIGHT, test_config());
        let mut fresh_buf = PixelBuffer::with_size(WIDTH, HEIGHT);
        record_and_render(&mut fresh, &mut fresh_buf);

        let mut used = Visualizer::new(WIDTH, HEIGHT, test_config());
        let mut used_buf = PixelBuffer::with_size(WIDTH, HEIGHT);
        for _ in 0..100 {
            let spectrum = vec![9.0; 16];
            used.record_block(-2.0, 2.0, Some(&spectrum), true);
        }
        used.render(&mut used_buf, "other", SpectrumMode::Spectrogram);
        used.clear(&mut used_buf, "status");
        record_and_render(&mut used, &mut used_buf);

        assert_eq!(fresh_buf.as_pixels(), used_buf.as_pixels());
    }

    #[test]
    fn test_tracks_land_in_configured_viewports() {
        let config = test_config();
        let mut vis = Visualizer::new(WIDTH, HEIGHT, config);
        let mut buf = PixelBuffer::with_size(WIDTH, HEIGHT);
        record_and_render(&mut vis, &mut buf);

        let waveform_top = (HEIGHT
            - config.layout.bottom_padding
            - config.layout.waveform_height) as i32;
        let mid = waveform_top + config.layout.waveform_height as i32 / 2;
        // Center line at the waveform midline, background in the strip above it
        assert_eq!(buf.get_pixel(0, mid), Some(config.colors.center_line));
        // Pixels between the two viewports stay untouched
        let gap = waveform_top - 1;
        assert_eq!(buf.get_pixel(0, gap), Some(0));
    }

    #[test]
    fn test_independent_instances_do_not_share_state() {
        let mut a = Visualizer::new(WIDTH, HEIGHT, test_config());
        let b = Visualizer::new(WIDTH, HEIGHT, test_config());

        let mut a_buf = PixelBuffer::with_size(WIDTH, HEIGHT);
        record_and_render(&mut a, &mut a_buf);

        let mut b_buf = PixelBuffer::with_size(WIDTH, HEIGHT);
        b.render(&mut b_buf, "status", SpectrumMode::LiveBars);

        assert_ne!(a_buf.as_pixels(), b_buf.as_pixels());
    }
}
