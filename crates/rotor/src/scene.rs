use crate::colors::Palette;
use crate::geometry::{POINTER_ANGLE, segment_span, segment_width};
use crate::labels::{Label, LabelList};
use palette::Srgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub color: Srgb<u8>,
}

impl Wedge {
    pub fn bisector(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive<'a> {
    Wedge(Wedge),
    /// Label text laid along the bisector of its wedge.
    Caption {
        label: &'a Label,
        angle: f64,
    },
    CenterOrnament,
    Pointer {
        angle: f64,
    },
}

/// Everything a surface needs to paint one frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    pub rotation: f64,
    pub primitives: Vec<Primitive<'a>>,
}

impl<'a> Scene<'a> {
    pub fn build(rotation: f64, labels: &'a LabelList, palette: &Palette) -> Self {
        let count = labels.len();
        let half = segment_width(count) / 2.0;

        let mut primitives = Vec::with_capacity(count * 2 + 2);
        for (index, label) in labels.iter().enumerate() {
            let (start, end) = segment_span(rotation, index, count);
            primitives.push(Primitive::Wedge(Wedge {
                index,
                start,
                end,
                color: palette.color_for(index),
            }));
            primitives.push(Primitive::Caption {
                label,
                angle: start + half,
            });
        }
        primitives.push(Primitive::CenterOrnament);
        primitives.push(Primitive::Pointer {
            angle: POINTER_ANGLE,
        });

        Self {
            rotation,
            primitives,
        }
    }

    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Wedge(w) => Some(w),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::parse_labels;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_primitive_order() {
        let labels = parse_labels("a\nb\nc").unwrap();
        let scene = Scene::build(0.0, &labels, &Palette::default());

        assert_eq!(scene.primitives.len(), 8);
        assert!(matches!(scene.primitives[0], Primitive::Wedge(Wedge { index: 0, .. })));
        assert!(matches!(scene.primitives[1], Primitive::Caption { label, .. } if label.as_str() == "a"));
        assert!(matches!(scene.primitives[4], Primitive::Wedge(Wedge { index: 2, .. })));
        assert_eq!(scene.primitives[6], Primitive::CenterOrnament);
        assert!(matches!(scene.primitives[7], Primitive::Pointer { .. }));
    }

    #[test]
    fn test_wedges_follow_rotation() {
        let labels = parse_labels("a\nb\nc\nd").unwrap();
        let scene = Scene::build(1.0, &labels, &Palette::default());
        let wedges: Vec<_> = scene.wedges().collect();

        assert_eq!(wedges.len(), 4);
        assert_relative_eq!(wedges[0].start, 1.0);
        assert_relative_eq!(wedges[1].start, 1.0 + PI / 2.0);
        assert_relative_eq!(wedges[3].end, 1.0 + 2.0 * PI);
        assert_relative_eq!(wedges[2].bisector(), 1.0 + 1.25 * PI);
    }

    #[test]
    fn test_wedge_colors_cycle_palette() {
        let labels = parse_labels("a\nb\nc").unwrap();
        let palette = Palette::from_hex(["#ff0000", "#00ff00"]).unwrap();
        let scene = Scene::build(0.0, &labels, &palette);
        let colors: Vec<_> = scene.wedges().map(|w| w.color).collect();

        assert_eq!(
            colors,
            vec![
                Srgb::new(255, 0, 0),
                Srgb::new(0, 255, 0),
                Srgb::new(255, 0, 0)
            ]
        );
    }
}
