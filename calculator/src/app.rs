//! Calculator application

use calccore::config::CalcSettings;
use calccore::input::{keypad_row, KeypadButton, KEYPAD_COLS, KEYPAD_ROWS};
use calccore::theme::{ButtonColors, CalcColors};
use calccore::{CalcTheme, Calculator, Input};
use egui::{Align, Context, Event, Key, Layout, RichText, Sense};

/// Height of the two-line display strip
const DISPLAY_HEIGHT: f32 = 221.0;

pub struct CalculatorApp {
    calc: Calculator,
    theme: CalcTheme,
}

impl CalculatorApp {
    pub fn new(theme: CalcTheme, settings: &CalcSettings) -> Self {
        Self {
            calc: Calculator::with_settings(settings),
            theme,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let inputs = ctx.input(|i| {
            let mut inputs = Vec::new();
            for event in &i.events {
                match event {
                    // Typed characters cover digits, '.', operators and '='
                    // regardless of keyboard layout
                    Event::Text(text) => inputs.extend(text.chars().filter_map(Input::from_char)),
                    Event::Key { key, pressed: true, repeat: false, .. } => {
                        if let Some(input) = key_input(*key) {
                            inputs.push(input);
                        }
                    }
                    _ => {}
                }
            }
            inputs
        });

        for input in inputs {
            self.calc.apply(input);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display = self.calc.display();
        ui.with_layout(Layout::top_down(Align::Max), |ui| {
            ui.add_space((ui.available_height() - 2.0 * self.theme.font_size_large).max(0.0));
            ui.label(
                RichText::new(display.total)
                    .font(self.theme.total_font())
                    .color(CalcColors::WHITE),
            );
            ui.label(
                RichText::new(display.current)
                    .font(self.theme.current_font())
                    .color(CalcColors::WHITE),
            );
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let cell_w = ui.available_width() / KEYPAD_COLS as f32;
        let cell_h = ui.available_height() / KEYPAD_ROWS as f32;

        let mut pressed = None;
        for row in 0..KEYPAD_ROWS {
            ui.horizontal(|ui| {
                for button in keypad_row(row) {
                    let size = egui::vec2(cell_w * button.span as f32, cell_h);
                    if keypad_button(ui, button, size, &self.theme) {
                        pressed = Some(button.input);
                    }
                }
            });
        }

        if let Some(input) = pressed {
            self.calc.apply(input);
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("display")
            .exact_height(DISPLAY_HEIGHT)
            .frame(self.theme.display_frame())
            .show(ctx, |ui| self.render_display(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::OFF_WHITE))
            .show(ctx, |ui| self.render_keypad(ui));
    }
}

/// Keys that do not arrive as text
fn key_input(key: Key) -> Option<Input> {
    match key {
        Key::Enter => Input::from_symbol("Return"),
        Key::Backspace => Input::from_symbol("BackSpace"),
        Key::Escape => Input::from_symbol("Escape"),
        _ => None,
    }
}

/// A flat keypad button: solid fill, hover color, centered label.
fn keypad_button(
    ui: &mut egui::Ui,
    button: &KeypadButton,
    size: egui::Vec2,
    theme: &CalcTheme,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let colors = ButtonColors::for_kind(button.kind);
        let fill = if response.hovered() { colors.hover } else { colors.fill };
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            button.label,
            theme.button_font(),
            colors.text,
        );
    }
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_input() {
        assert_eq!(key_input(Key::Enter), Some(Input::Evaluate));
        assert_eq!(key_input(Key::Backspace), Some(Input::ClearEntry));
        assert_eq!(key_input(Key::Escape), Some(Input::Clear));
        assert_eq!(key_input(Key::Tab), None);
    }
}
