//! Calculator theme
//!
//! Dark display strip over a white keypad, purple operator column and a
//! yellow equals button. Square corners, no borders.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::input::ButtonKind;

pub struct CalcColors;

impl CalcColors {
    pub const PURPLE: Color32 = Color32::from_rgb(0x99, 0x66, 0xCC);
    pub const YELLOW: Color32 = Color32::from_rgb(0xFF, 0xCF, 0x40);
    pub const LABEL: Color32 = Color32::from_rgb(0x14, 0x14, 0x14);
    pub const WHITE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const OFF_WHITE: Color32 = Color32::from_rgb(0xDC, 0xDC, 0xDC);
}

/// Fill, text and hover colors of one keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub fill: Color32,
    pub text: Color32,
    pub hover: Color32,
}

impl ButtonColors {
    pub fn for_kind(kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::Digit | ButtonKind::Function => Self {
                fill: CalcColors::WHITE,
                text: CalcColors::LABEL,
                hover: CalcColors::OFF_WHITE,
            },
            ButtonKind::Operator => Self {
                fill: CalcColors::PURPLE,
                text: CalcColors::WHITE,
                hover: CalcColors::LABEL,
            },
            ButtonKind::Equals => Self {
                fill: CalcColors::YELLOW,
                text: CalcColors::WHITE,
                hover: CalcColors::LABEL,
            },
        }
    }
}

pub struct CalcTheme {
    /// Running total line.
    pub font_size_small: f32,
    /// Current entry line.
    pub font_size_large: f32,
    pub font_size_button: f32,
    pub display_padding: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_small: 18.0,
            font_size_large: 40.0,
            font_size_button: 25.0,
            display_padding: 24.0,
        }
    }
}

impl CalcTheme {
    pub fn total_font(&self) -> FontId {
        FontId::new(self.font_size_small, FontFamily::Proportional)
    }

    pub fn current_font(&self) -> FontId {
        FontId::new(self.font_size_large, FontFamily::Proportional)
    }

    pub fn button_font(&self) -> FontId {
        FontId::new(self.font_size_button, FontFamily::Proportional)
    }

    /// Apply the calculator theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, self.total_font()),
            (TextStyle::Body, self.total_font()),
            (TextStyle::Button, self.button_font()),
            (TextStyle::Heading, self.current_font()),
            (TextStyle::Monospace, FontId::new(self.font_size_small, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::OFF_WHITE;
        visuals.panel_fill = CalcColors::OFF_WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::NONE;

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = Rounding::ZERO;
            ws.expansion = 0.0;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(0.0, 0.0);
        style.spacing.window_margin = egui::Margin::ZERO;

        ctx.set_style(style);
    }

    /// Frame of the two-line display strip.
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::LABEL)
            .inner_margin(egui::Margin::symmetric(self.display_padding, 12.0))
    }
}
