//! Visualizer configuration
//!
//! Colors and fixed layout constants, loadable from a JSON file so a setup
//! can restyle the tracks without rebuilding. Defaults reproduce the classic
//! look: near-black background, gray waveform fill, red clip markers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Packed `0xAARRGGBB` colors for every painted element
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Colors {
    pub background: u32,
    pub waveform: u32,
    pub bar: u32,
    pub clipped: u32,
    pub center_line: u32,
    pub text: u32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: 0x18181818,
            waveform: 0x44444444,
            bar: 0x44444444,
            clipped: 0xFFFF0000,
            center_line: 0x66666666,
            text: 0x88888888,
        }
    }
}

/// Vertical layout of the stacked tracks, in pixels.
///
/// The waveform strip sits at the bottom edge above `bottom_padding`; the
/// spectrum viewport sits `track_padding` above it. The destination buffer
/// must be tall enough for both plus the text margin; sizing it is the
/// caller's contract, not a runtime check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Layout {
    pub waveform_height: u32,
    pub spectrum_height: u32,
    pub bottom_padding: u32,
    pub track_padding: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            waveform_height: 80,
            spectrum_height: 256,
            bottom_padding: 10,
            track_padding: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VisualizerConfig {
    pub colors: Colors,
    pub layout: Layout,
}

impl VisualizerConfig {
    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}
