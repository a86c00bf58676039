//! Scrolling waveform envelope track
//!
//! One `{min, max}` peak pair per audio block, held in a ring history as wide
//! as the viewport. Rendering walks the history old-to-new and paints one
//! vertical column per pair: background above and below the envelope, fill
//! between envelope and midline, a single center-line pixel, and red boundary
//! markers for samples that clipped the normalized display range.

use crate::config::Colors;
use crate::display::PixelBuffer;
use crate::ring::RingHistory;

/// Min/max peak envelope of one audio block, normalized amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePair {
    pub min: f32,
    pub max: f32,
}

impl SamplePair {
    pub const SILENCE: SamplePair = SamplePair { min: 0.0, max: 0.0 };
}

pub struct WaveformTrack {
    history: RingHistory<SamplePair>,
}

impl WaveformTrack {
    /// Create a track `width` columns wide, pre-seeded with silence so the
    /// warm-up region renders as a flat center line.
    pub fn new(width: usize) -> Self {
        Self {
            history: RingHistory::new(width, SamplePair::SILENCE),
        }
    }

    /// Record one audio block's peak envelope
    pub fn record(&mut self, min: f32, max: f32) {
        self.history.write(SamplePair { min, max });
    }

    /// Drop all history and rewind, as if freshly constructed
    pub fn reset(&mut self) {
        self.history.reset(SamplePair::SILENCE);
    }

    /// Paint the full history into the viewport at (x, y), `height` tall.
    ///
    /// Columns span `height + 1` rows inclusive of the bottom edge; the
    /// midline sits at `height / 2`. Values beyond [-1, 1] are clamped for
    /// display and flagged with a clip marker at the touched edge.
    pub fn render(&self, buffer: &mut PixelBuffer, x: i32, y: i32, height: u32, colors: &Colors) {
        let h = height as i32;
        let y_mid = y + h / 2;

        for (i, pair) in self.history.iter().enumerate() {
            let sx = x + i as i32;
            let max_clamped = pair.max.clamp(-1.0, 1.0);
            let min_clamped = pair.min.clamp(-1.0, 1.0);
            let y0 = (y_mid as f32 - max_clamped * h as f32 / 2.0 + 0.5) as i32;
            let y1 = (y_mid as f32 - min_clamped * h as f32 / 2.0 + 0.5) as i32;

            let mut sy = y;
            if max_clamped != pair.max {
                buffer.set_pixel(sx, sy, colors.clipped);
                sy += 1;
            }
            while sy < y0 {
                buffer.set_pixel(sx, sy, colors.background);
                sy += 1;
            }
            while sy < y_mid {
                buffer.set_pixel(sx, sy, colors.waveform);
                sy += 1;
            }
            buffer.set_pixel(sx, sy, colors.center_line);
            sy += 1;
            while sy <= y1 {
                buffer.set_pixel(sx, sy, colors.waveform);
                sy += 1;
            }
            while sy <= y + h {
                buffer.set_pixel(sx, sy, colors.background);
                sy += 1;
            }
            if min_clamped != pair.min {
                buffer.set_pixel(sx, y + h, colors.clipped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: u32 = 80;

    fn render_to_buffer(track: &WaveformTrack, width: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::with_size(width, HEIGHT + 1);
        track.render(&mut buf, 0, 0, HEIGHT, &Colors::default());
        buf
    }

    #[test]
    fn test_silence_renders_single_center_line() {
        let width = 512;
        let mut track = WaveformTrack::new(width as usize);
        for _ in 0..width {
            track.record(0.0, 0.0);
        }
        let buf = render_to_buffer(&track, width);
        let colors = Colors::default();
        let mid = (HEIGHT / 2) as i32;

        for x in 0..width as i32 {
            for y in 0..=HEIGHT as i32 {
                let expected = if y == mid {
                    colors.center_line
                } else {
                    colors.background
                };
                assert_eq!(buf.get_pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_in_range_samples_never_marked_clipped() {
        let mut track = WaveformTrack::new(4);
        track.record(-1.0, 1.0);
        track.record(-0.5, 0.5);
        let buf = render_to_buffer(&track, 4);
        let colors = Colors::default();
        assert!(buf.as_pixels().iter().all(|&p| p != colors.clipped));
    }

    #[test]
    fn test_clipped_samples_mark_touched_edges() {
        let mut track = WaveformTrack::new(3);
        track.record(-0.2, 1.5); // clipped high only
        track.record(-1.5, 0.2); // clipped low only
        track.record(-2.0, 2.0); // both
        let buf = render_to_buffer(&track, 3);
        let colors = Colors::default();

        assert_eq!(buf.get_pixel(0, 0), Some(colors.clipped));
        assert_ne!(buf.get_pixel(0, HEIGHT as i32), Some(colors.clipped));
        assert_ne!(buf.get_pixel(1, 0), Some(colors.clipped));
        assert_eq!(buf.get_pixel(1, HEIGHT as i32), Some(colors.clipped));
        assert_eq!(buf.get_pixel(2, 0), Some(colors.clipped));
        assert_eq!(buf.get_pixel(2, HEIGHT as i32), Some(colors.clipped));
    }

    #[test]
    fn test_columns_scroll_oldest_left() {
        let width = 4;
        let mut track = WaveformTrack::new(width);
        // Fill, then overwrite the two oldest columns with loud blocks
        for _ in 0..width {
            track.record(0.0, 0.0);
        }
        track.record(-1.0, 1.0);
        track.record(-1.0, 1.0);
        let buf = render_to_buffer(&track, width as u32);
        let colors = Colors::default();

        // Oldest (silent) columns on the left, loud columns on the right
        assert_eq!(buf.get_pixel(0, 1), Some(colors.background));
        assert_eq!(buf.get_pixel(1, 1), Some(colors.background));
        assert_eq!(buf.get_pixel(2, 1), Some(colors.waveform));
        assert_eq!(buf.get_pixel(3, 1), Some(colors.waveform));
    }
}
