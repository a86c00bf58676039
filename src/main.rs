// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod color;
mod config;
mod display;
mod ring;
mod util;
mod vis;

use config::VisualizerConfig;
use display::{Display, InputEvent, PixelBuffer, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rustfft::{num_complex::Complex, FftPlanner};
use sdl2::keyboard::Keycode;
use std::f32::consts::TAU;
use util::{FpsCounter, Rng};
use vis::{SpectrumMode, Visualizer};

/// Samples per synthesized audio block (power of two, one FFT window)
const BLOCK_SIZE: usize = 1024;

/// Audio blocks ingested per video frame
const BLOCKS_PER_FRAME: usize = 2;

const SAMPLE_RATE: f32 = 44100.0;

/// Synthetic program material: a slow sine sweep with a noise floor and an
/// occasional overdriven block, so the clip markers, bars and spectrogram
/// all get exercised without a real audio input.
struct ToneSweep {
    phase: f32,
    sweep: f32,
    blocks: u64,
    rng: Rng,
}

impl ToneSweep {
    fn new() -> Self {
        Self {
            phase: 0.0,
            sweep: 0.0,
            blocks: 0,
            rng: Rng::new(0x5EED),
        }
    }

    /// Fill `out` with one audio block, returning its (min, max) peak envelope
    fn next_block(&mut self, out: &mut [f32]) -> (f32, f32) {
        let freq = 80.0 + (1.0 - (self.sweep * TAU).cos()) * 2000.0;
        self.sweep = (self.sweep + 0.0008) % 1.0;

        // Every few seconds, one deliberately hot block to light the clip markers
        let gain = if self.blocks % 300 < 2 { 1.4 } else { 0.8 };
        self.blocks += 1;

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for sample in out.iter_mut() {
            self.phase = (self.phase + freq / SAMPLE_RATE) % 1.0;
            let s = (self.phase * TAU).sin() * gain + self.rng.range_f32(-0.05, 0.05);
            min = min.min(s);
            max = max.max(s);
            *sample = s;
        }
        (min, max)
    }
}

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: wavescope [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                println!();
                println!("Keys:");
                println!("  S    toggle live bars / spectrogram");
                println!("  L    toggle linear / logarithmic frequency axis");
                println!("  C    clear all history");
                println!("  F    toggle fps readout");
                println!("  Q    quit");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) = Display::with_options("wavescope", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = PixelBuffer::with_size(width, height);

    // Optional palette/layout overrides next to the binary
    let config = VisualizerConfig::load("wavescope.json").unwrap_or_default();
    let mut visualizer = Visualizer::new(width, height, config);

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(BLOCK_SIZE);
    let mut samples = vec![0.0f32; BLOCK_SIZE];
    let mut scratch = vec![Complex::new(0.0f32, 0.0); BLOCK_SIZE];

    let mut generator = ToneSweep::new();
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut mode = SpectrumMode::LiveBars;
    let mut log_frequency = false;
    let mut clear_requested = false;

    'running: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'running,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape | Keycode::Q => break 'running,
                    Keycode::S => {
                        mode = match mode {
                            SpectrumMode::LiveBars => SpectrumMode::Spectrogram,
                            SpectrumMode::Spectrogram => SpectrumMode::LiveBars,
                        };
                    },
                    Keycode::L => log_frequency = !log_frequency,
                    Keycode::C => clear_requested = true,
                    Keycode::F => show_fps = !show_fps,
                    _ => {},
                },
            }
        }

        let (_dt, _fps, avg_fps) = fps_counter.tick();

        let mode_name = match mode {
            SpectrumMode::LiveBars => "bars",
            SpectrumMode::Spectrogram => "spectrogram",
        };
        let axis_name = if log_frequency { "log" } else { "linear" };
        let mut text = format!("wavescope\n{} / {} freq", mode_name, axis_name);
        if show_fps {
            text.push_str(&format!("\n{:.0} fps", avg_fps));
        }

        if clear_requested {
            clear_requested = false;
            visualizer.clear(&mut buffer, &text);
        }

        for _ in 0..BLOCKS_PER_FRAME {
            let (min, max) = generator.next_block(&mut samples);
            for (c, &s) in scratch.iter_mut().zip(samples.iter()) {
                *c = Complex::new(s, 0.0);
            }
            fft.process(&mut scratch);
            let spectrum: Vec<f32> = scratch.iter().map(|c| c.norm()).collect();
            visualizer.record_block(min, max, Some(&spectrum), log_frequency);
        }

        visualizer.render(&mut buffer, &text, mode);
        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
