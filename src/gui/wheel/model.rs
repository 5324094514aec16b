use crate::config::{FontWeight, WheelConfig};
use crate::gui::wheel::{REFERENCE_SIZE, RIM_MARGIN};
use rotor::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(&self, radius: f64, angle: f64) -> Self {
        Self::new(
            self.x + radius * angle.cos(),
            self.y + radius * angle.sin(),
        )
    }
}

/// Where the wheel sits inside the drawing area. Fixed-size decorations are
/// multiplied by `scale` so the wheel looks the same at any window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
    pub scale: f64,
}

impl WheelGeometry {
    pub fn calculate(width: f64, height: f64) -> Self {
        let side = width.min(height);
        let scale = side / REFERENCE_SIZE;
        let radius = (side / 2.0 - RIM_MARGIN * scale).max(0.0);

        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius,
            scale,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WheelStyle {
    pub palette: Palette,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_size: f64,
}

impl WheelStyle {
    pub fn from_config(cfg: &WheelConfig) -> Self {
        let palette = cfg.palette().unwrap_or_else(|e| {
            log::warn!("Invalid palette, using built-in colors: {}", e);
            Palette::default()
        });

        Self {
            palette,
            font_family: cfg.font_family.clone(),
            font_weight: cfg.font_weight,
            font_size: cfg.font_size,
        }
    }
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self::from_config(&WheelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_geometry_at_reference_size() {
        let g = WheelGeometry::calculate(600.0, 600.0);
        assert_eq!(g.center, Point::new(300.0, 300.0));
        assert_relative_eq!(g.radius, 260.0);
        assert_relative_eq!(g.scale, 1.0);
    }

    #[test]
    fn test_geometry_uses_shorter_side() {
        let g = WheelGeometry::calculate(900.0, 300.0);
        assert_eq!(g.center, Point::new(450.0, 150.0));
        assert_relative_eq!(g.scale, 0.5);
        assert_relative_eq!(g.radius, 130.0);
    }

    #[test]
    fn test_geometry_never_negative() {
        assert_eq!(WheelGeometry::calculate(0.0, 0.0).radius, 0.0);
    }

    #[test]
    fn test_polar_points_up_at_pointer_angle() {
        let p = Point::new(10.0, 10.0).polar(5.0, 3.0 * PI / 2.0);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_palette_falls_back() {
        let cfg = WheelConfig {
            palette: vec!["not-a-color".into()],
            ..Default::default()
        };
        let style = WheelStyle::from_config(&cfg);
        assert_eq!(style.palette, Palette::default());
        assert_eq!(style.font_size, 26.0);
    }
}
