//! Wave-field model behind the animated canvas background.
//!
//! Pure geometry: the canvas plumbing lives in
//! `components::wavy_background`, which asks this model for one polyline
//! per layer each frame.

use crate::noise::Noise3;

pub const WAVE_LAYERS: usize = 3;
pub const DEFAULT_WAVE_COLORS: [&str; 3] = ["#38bdf8", "#818cf8", "#c084fc"];
pub const DEFAULT_WAVE_WIDTH: f64 = 15.0;
pub const DEFAULT_BLUR_PX: f64 = 10.0;
pub const DEFAULT_WAVE_OPACITY: f64 = 0.5;

/// Waves sit at 40% of the surface height and swing at most 40px around it.
const BASELINE_FRACTION: f64 = 0.4;
const AMPLITUDE_PX: f64 = 40.0;
const STEP_PX: f64 = 5.0;
const X_FREQUENCY: f64 = 0.002;
const LAYER_SPACING: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveSpeed {
    Slow,
    Fast,
}

impl WaveSpeed {
    /// Time added to the accumulator on every frame.
    pub fn increment(self) -> f64 {
        match self {
            WaveSpeed::Slow => 0.001,
            WaveSpeed::Fast => 0.002,
        }
    }
}

impl Default for WaveSpeed {
    fn default() -> Self {
        WaveSpeed::Fast
    }
}

/// Per-mount wave configuration. Fixed once the renderer is created.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveFieldConfig {
    pub colors: Vec<String>,
    pub stroke_width: f64,
    pub background_fill: Option<String>,
    pub blur_px: f64,
    pub speed: WaveSpeed,
    pub opacity: f64,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_WAVE_COLORS.iter().map(|c| c.to_string()).collect(),
            stroke_width: DEFAULT_WAVE_WIDTH,
            background_fill: None,
            blur_px: DEFAULT_BLUR_PX,
            speed: WaveSpeed::default(),
            opacity: DEFAULT_WAVE_OPACITY,
        }
    }
}

/// One mounted wave field: configuration, a seeded noise sampler and the
/// monotonic time accumulator. Time only ever moves forward.
pub struct WaveField {
    config: WaveFieldConfig,
    noise: Noise3,
    time: f64,
}

impl WaveField {
    pub fn new(config: WaveFieldConfig, seed: u32) -> Self {
        Self {
            config,
            noise: Noise3::new(seed),
            time: 0.0,
        }
    }

    pub fn config(&self) -> &WaveFieldConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance(&mut self) {
        self.time += self.config.speed.increment();
    }

    /// Stroke color for a layer; short palettes cycle.
    pub fn layer_color(&self, layer: usize) -> &str {
        &self.config.colors[layer % self.config.colors.len()]
    }

    pub fn baseline(height: f64) -> f64 {
        height * BASELINE_FRACTION
    }

    /// Polyline for one layer at the current time, stepping 5px across the
    /// surface with a noise-driven vertical offset from the baseline.
    pub fn layer_path(&self, width: f64, height: f64, layer: usize) -> Vec<(f64, f64)> {
        let baseline = Self::baseline(height);
        let mut points = Vec::with_capacity((width / STEP_PX) as usize + 1);
        let mut x = 0.0;
        while x < width {
            let offset = self
                .noise
                .sample(x * X_FREQUENCY, layer as f64 * LAYER_SPACING, self.time)
                * AMPLITUDE_PX;
            points.push((x, baseline + offset));
            x += STEP_PX;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field(config: WaveFieldConfig) -> WaveField {
        WaveField::new(config, 1234)
    }

    #[rstest]
    #[case(WaveSpeed::Fast, 0.002)]
    #[case(WaveSpeed::Slow, 0.001)]
    fn accumulator_advances_by_speed_increment(#[case] speed: WaveSpeed, #[case] step: f64) {
        let mut field = field(WaveFieldConfig {
            speed,
            ..WaveFieldConfig::default()
        });
        for _ in 0..250 {
            field.advance();
        }
        assert!((field.time() - 250.0 * step).abs() < 1e-9);
    }

    #[test]
    fn accumulator_is_monotonic() {
        let mut field = field(WaveFieldConfig::default());
        let mut previous = field.time();
        for _ in 0..100 {
            field.advance();
            assert!(field.time() > previous);
            previous = field.time();
        }
    }

    #[rstest]
    #[case(vec!["#111111"])]
    #[case(vec!["#111111", "#222222"])]
    #[case(vec!["#111111", "#222222", "#333333"])]
    fn layer_colors_cycle_through_palette(#[case] palette: Vec<&str>) {
        let field = field(WaveFieldConfig {
            colors: palette.iter().map(|c| c.to_string()).collect(),
            ..WaveFieldConfig::default()
        });
        for layer in 0..WAVE_LAYERS {
            assert_eq!(field.layer_color(layer), palette[layer % palette.len()]);
        }
    }

    #[test]
    fn single_color_palette_paints_every_layer() {
        let field = field(WaveFieldConfig {
            colors: vec!["#abcdef".to_string()],
            ..WaveFieldConfig::default()
        });
        assert!((0..WAVE_LAYERS).all(|layer| field.layer_color(layer) == "#abcdef"));
    }

    #[test]
    fn path_steps_five_pixels_up_to_the_surface_width() {
        let field = field(WaveFieldConfig::default());
        let points = field.layer_path(200.0, 100.0, 0);
        assert_eq!(points.len(), 40);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[1].0, 5.0);
        assert_eq!(points.last().unwrap().0, 195.0);
    }

    #[test]
    fn path_tracks_resized_surface_dimensions() {
        let field = field(WaveFieldConfig::default());
        let before = field.layer_path(300.0, 100.0, 0);
        let after = field.layer_path(500.0, 400.0, 0);
        assert_eq!(before.len(), 60);
        assert_eq!(after.len(), 100);
        assert!(before.last().unwrap().0 < 300.0);
        assert!(after.last().unwrap().0 < 500.0);
        // Baseline follows the new height.
        assert!((WaveField::baseline(100.0) - 40.0).abs() < 1e-12);
        assert!((WaveField::baseline(400.0) - 160.0).abs() < 1e-12);
    }

    #[test]
    fn offsets_stay_within_the_wave_amplitude() {
        let mut field = field(WaveFieldConfig::default());
        for _ in 0..10 {
            field.advance();
            for layer in 0..WAVE_LAYERS {
                let baseline = WaveField::baseline(240.0);
                for (_, y) in field.layer_path(640.0, 240.0, layer) {
                    assert!((y - baseline).abs() <= AMPLITUDE_PX * 1.1);
                }
            }
        }
    }

    #[test]
    fn layers_are_offset_from_each_other() {
        let mut field = field(WaveFieldConfig::default());
        field.advance();
        let a = field.layer_path(400.0, 100.0, 0);
        let b = field.layer_path(400.0, 100.0, 1);
        assert!(a.iter().zip(&b).any(|(p, q)| p.1 != q.1));
    }
}
