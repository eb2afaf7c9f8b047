//! Transcript, quick replies and input row shared by the widget and the panel
use eframe::egui;
use std::time::Duration;

use crate::core::suggestions::SuggestionSet;
use crate::core::transcript::Message;

/// Styling constants
pub const SEND_BUTTON_SIZE: f32 = 36.0;
pub const BUBBLE_WIDTH_RATIO: f32 = 0.8;

pub const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const AGENT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(22, 28, 42);
pub const AGENT_TEXT: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const CHIP_STROKE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// What the user did in a chat skin during this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Submit,
    Suggestion(String),
    Book,
    ToggleOpen,
    Close,
    ToggleExpand,
    Collapse,
}

/// Renders the title row. Extra buttons go in `buttons`, right-aligned.
pub fn draw_header(
    ui: &mut egui::Ui,
    title: &str,
    tagline: &str,
    buttons: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).strong().size(15.0));
            ui.label(egui::RichText::new(tagline).size(11.0).color(MUTED_TEXT));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), buttons);
    });
    ui.separator();
}

/// Renders the transcript, newest at the bottom.
///
/// `reserved` is the height left free below the scroll area for chips and input.
pub fn draw_messages(ui: &mut egui::Ui, messages: &[Message], is_typing: bool, reserved: f32) {
    let height = (ui.available_height() - reserved).max(80.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(height)
        .show(ui, |ui| {
            for message in messages {
                ui.push_id(message.id(), |ui| draw_bubble(ui, message));
            }

            if is_typing {
                draw_typing_indicator(ui);
            }
        });
}

fn draw_bubble(ui: &mut egui::Ui, message: &Message) {
    let (fill, text_color, layout) = if message.is_user() {
        (
            USER_BUBBLE,
            egui::Color32::WHITE,
            egui::Layout::right_to_left(egui::Align::TOP),
        )
    } else {
        (
            AGENT_BUBBLE,
            AGENT_TEXT,
            egui::Layout::left_to_right(egui::Align::TOP),
        )
    };

    ui.with_layout(layout, |ui| {
        let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;
        egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.add(egui::Label::new(egui::RichText::new(message.text()).color(text_color)).wrap());
                    ui.label(
                        egui::RichText::new(message.sent_at().format("%H:%M").to_string())
                            .size(9.0)
                            .color(MUTED_TEXT),
                    );
                });
            });
    });
    ui.add_space(6.0);
}

fn draw_typing_indicator(ui: &mut egui::Ui) {
    // Three dots cycling while the reply is pending
    let phase = (ui.input(|i| i.time) * 3.0) as usize % 3;
    let dots = "•".repeat(phase + 1);

    egui::Frame::new()
        .fill(AGENT_BUBBLE)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(format!("{dots:<3}")).color(MUTED_TEXT));
        });

    ui.ctx().request_repaint_after(Duration::from_millis(300));
}

/// Renders quick-reply chips. Returns the chip that was clicked.
pub fn draw_suggestions(ui: &mut egui::Ui, suggestions: &SuggestionSet) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for suggestion in suggestions.iter() {
            let chip = egui::Button::new(egui::RichText::new(suggestion).size(12.0))
                .corner_radius(egui::CornerRadius::same(16))
                .stroke(egui::Stroke::new(1.0, CHIP_STROKE));
            if ui.add(chip).clicked() {
                clicked = Some(suggestion.to_string());
            }
        }
    });
    clicked
}

/// Renders the input field and send button. Returns true on Enter or click.
pub fn draw_input_row(ui: &mut egui::Ui, input: &mut String, enabled: bool, hint: &str) -> bool {
    let mut send = false;

    ui.horizontal(|ui| {
        let width = ui.available_width() - SEND_BUTTON_SIZE - ui.spacing().item_spacing.x;
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(input)
                .hint_text(hint)
                .desired_width(width),
        );

        // Send on Enter
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }

        let can_send = enabled && !input.trim().is_empty();
        let button = egui::Button::new("↑").min_size(egui::vec2(SEND_BUTTON_SIZE, SEND_BUTTON_SIZE - 8.0));
        if ui.add_enabled(can_send, button).clicked() {
            send = true;
        }
    });

    send && enabled
}
