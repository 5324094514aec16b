use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Wheel chrome colors. Each can be overridden from a user GTK stylesheet
/// with `@define-color whirl_<name> ...`.
pub struct ThemeColors {
    pub shadow: Srgba<f64>,
    pub segment_border: Srgba<f64>,
    pub caption_fill: Srgba<f64>,
    pub caption_outline: Srgba<f64>,
    pub hub: Srgba<f64>,
    pub hub_dot: Srgba<f64>,
    pub pointer: Srgba<f64>,
    pub pointer_outline: Srgba<f64>,
    pub pointer_shadow: Srgba<f64>,
    pub pointer_highlight: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            shadow: Self::lookup_color(
                context,
                "whirl_shadow",
                Srgba::new(0.0, 0.0, 0.0, 0.2),
                None,
            ),
            segment_border: Self::lookup_color(
                context,
                "whirl_segment_border",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            caption_fill: Self::lookup_color(
                context,
                "whirl_caption_fill",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            caption_outline: Self::lookup_color(
                context,
                "whirl_caption_outline",
                Srgba::new(0.0, 0.0, 0.0, 0.5),
                None,
            ),
            hub: Self::lookup_color(
                context,
                "whirl_hub",
                Srgba::new(0.2, 0.2, 0.2, 1.0),
                None,
            ),
            hub_dot: Self::lookup_color(
                context,
                "whirl_hub_dot",
                Srgba::new(1.0, 0.843, 0.0, 1.0),
                None,
            ),
            pointer: Self::lookup_color(
                context,
                "whirl_pointer",
                Srgba::new(1.0, 0.0, 0.0, 1.0),
                None,
            ),
            pointer_outline: Self::lookup_color(
                context,
                "whirl_pointer_outline",
                Srgba::new(0.6, 0.0, 0.0, 1.0),
                None,
            ),
            // same hue as the wheel shadow, a little darker
            pointer_shadow: Self::lookup_color(
                context,
                "whirl_shadow",
                Srgba::new(0.0, 0.0, 0.0, 0.3),
                Some(0.3),
            ),
            pointer_highlight: Self::lookup_color(
                context,
                "whirl_pointer_highlight",
                Srgba::new(1.0, 1.0, 1.0, 0.3),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color whirl_shadow rgba(0, 0, 0, 0.2);
@define-color whirl_segment_border #ffffff;
@define-color whirl_caption_fill #ffffff;
@define-color whirl_caption_outline rgba(0, 0, 0, 0.5);
@define-color whirl_hub #333333;
@define-color whirl_hub_dot #ffd700;
@define-color whirl_pointer #ff0000;
@define-color whirl_pointer_outline #990000;
@define-color whirl_pointer_highlight rgba(255, 255, 255, 0.3);

.whirl-backdrop {
    background-color: rgba(0, 0, 0, 0.5);
}
.whirl-result-card {
    background-color: @theme_bg_color;
    border-radius: 16px;
    padding: 32px;
}
.whirl-winner {
    font-size: 32px;
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
