use super::model::{Point, WheelGeometry, WheelStyle};
use super::{
    CAPTION_INSET, CAPTION_OUTLINE_WIDTH, HUB_DOT_RADIUS, HUB_RADIUS, POINTER_DIP,
    POINTER_HALF_WIDTH, POINTER_LENGTH, SEGMENT_BORDER_WIDTH, SHADOW_OFFSET,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use rotor::{Label, Primitive, Scene, Wedge};
use std::f64::consts::{FRAC_PI_2, PI};

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct WheelRenderer<'a> {
    geometry: WheelGeometry,
    style: &'a WheelStyle,
    colors: &'a ThemeColors,
}

impl<'a> WheelRenderer<'a> {
    fn new(geometry: WheelGeometry, style: &'a WheelStyle, colors: &'a ThemeColors) -> Self {
        Self {
            geometry,
            style,
            colors,
        }
    }

    fn draw_shadow(&self, cr: &Context) -> Result<(), cairo::Error> {
        let Point { x, y } = self.geometry.center;
        let offset = SHADOW_OFFSET * self.geometry.scale;
        set_source(cr, self.colors.shadow);
        cr.arc(x + offset, y + offset, self.geometry.radius, 0.0, 2.0 * PI);
        cr.fill()
    }

    fn draw_wedge(&self, cr: &Context, wedge: &Wedge) -> Result<(), cairo::Error> {
        let Point { x, y } = self.geometry.center;
        let (r, g, b) = wedge.color.into_format::<f64>().into_components();

        cr.move_to(x, y);
        cr.arc(x, y, self.geometry.radius, wedge.start, wedge.end);
        cr.close_path();
        cr.set_source_rgb(r, g, b);
        cr.fill_preserve()?;

        set_source(cr, self.colors.segment_border);
        cr.set_line_width(SEGMENT_BORDER_WIDTH * self.geometry.scale);
        cr.stroke()
    }

    fn draw_caption(&self, cr: &Context, label: &Label, angle: f64) -> Result<(), cairo::Error> {
        let Point { x, y } = self.geometry.center;

        cr.save()?;
        cr.translate(x, y);
        cr.rotate(angle);
        cr.select_font_face(
            &self.style.font_family,
            cairo::FontSlant::Normal,
            self.style.font_weight.into(),
        );
        cr.set_font_size(self.style.font_size * self.geometry.scale);

        // right-aligned against the rim, vertically centered on the bisector
        let ext = cr.text_extents(label)?;
        let text_x = self.geometry.radius - CAPTION_INSET * self.geometry.scale
            - ext.width()
            - ext.x_bearing();
        let text_y = -(ext.y_bearing() + ext.height() / 2.0);
        cr.move_to(text_x, text_y);
        cr.text_path(label);

        set_source(cr, self.colors.caption_outline);
        cr.set_line_width(CAPTION_OUTLINE_WIDTH * self.geometry.scale);
        cr.stroke_preserve()?;
        set_source(cr, self.colors.caption_fill);
        cr.fill()?;
        cr.restore()
    }

    fn draw_hub(&self, cr: &Context) -> Result<(), cairo::Error> {
        let Point { x, y } = self.geometry.center;
        let scale = self.geometry.scale;

        cr.arc(x, y, HUB_RADIUS * scale, 0.0, 2.0 * PI);
        set_source(cr, self.colors.hub);
        cr.fill_preserve()?;
        set_source(cr, self.colors.segment_border);
        cr.set_line_width(SEGMENT_BORDER_WIDTH * scale);
        cr.stroke()?;

        cr.arc(x, y, HUB_DOT_RADIUS * scale, 0.0, 2.0 * PI);
        set_source(cr, self.colors.hub_dot);
        cr.fill()
    }

    /// Triangle whose tip dips into the rim at `angle`.
    fn draw_pointer(&self, cr: &Context, angle: f64) -> Result<(), cairo::Error> {
        let Point { x, y } = self.geometry.center;
        let scale = self.geometry.scale;
        let tip = self.geometry.radius - POINTER_DIP * scale;
        let half = POINTER_HALF_WIDTH * scale;
        let len = POINTER_LENGTH * scale;

        cr.save()?;
        cr.translate(x, y);
        // local -y now runs from the center toward `angle`
        cr.rotate(angle + FRAC_PI_2);
        cr.translate(0.0, -tip);

        let shadow = 2.0 * scale;
        cr.move_to(shadow, shadow);
        cr.line_to(-half - shadow, -len - shadow);
        cr.line_to(half + shadow, -len - shadow);
        cr.close_path();
        set_source(cr, self.colors.pointer_shadow);
        cr.fill()?;

        cr.move_to(0.0, 0.0);
        cr.line_to(-half, -len);
        cr.line_to(half, -len);
        cr.close_path();
        set_source(cr, self.colors.pointer);
        cr.fill_preserve()?;
        set_source(cr, self.colors.pointer_outline);
        cr.set_line_width(2.0 * scale);
        cr.stroke()?;

        cr.move_to(0.0, 0.0);
        cr.line_to(-half / 2.0, -len / 2.0);
        cr.line_to(half / 2.0, -len / 2.0);
        cr.close_path();
        set_source(cr, self.colors.pointer_highlight);
        cr.fill()?;

        cr.restore()
    }
}

pub fn draw(
    cr: &Context,
    scene: &Scene,
    style: &WheelStyle,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let renderer = WheelRenderer::new(WheelGeometry::calculate(width, height), style, colors);
    renderer.draw_shadow(cr)?;

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Wedge(wedge) => renderer.draw_wedge(cr, wedge)?,
            Primitive::Caption { label, angle } => renderer.draw_caption(cr, label, *angle)?,
            Primitive::CenterOrnament => renderer.draw_hub(cr)?,
            Primitive::Pointer { angle } => renderer.draw_pointer(cr, *angle)?,
        }
    }
    Ok(())
}
