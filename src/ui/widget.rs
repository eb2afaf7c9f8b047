//! Floating chat widget: corner button plus a compact chat window
use eframe::egui;

use super::chat::{self, ChatAction};
use crate::core::surface::WidgetSurface;
use crate::core::Conversation;

pub const WIDGET_WIDTH: f32 = 360.0;
pub const WIDGET_HEIGHT: f32 = 460.0;
pub const WIDGET_MARGIN: f32 = 24.0;

/// Renders the corner button and returns true if it was clicked.
fn draw_toggle_button(ctx: &egui::Context, open: bool) -> bool {
    let label = if open { "✕" } else { "💬 Falar com agente" };

    egui::Area::new(egui::Id::new("widget_toggle"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-WIDGET_MARGIN, -WIDGET_MARGIN))
        .show(ctx, |ui| {
            let button = egui::Button::new(egui::RichText::new(label).size(14.0).color(egui::Color32::WHITE))
                .fill(chat::USER_BUBBLE)
                .corner_radius(egui::CornerRadius::same(24))
                .min_size(egui::vec2(48.0, 48.0));

            let response = ui.add(button);
            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            response.clicked()
        })
        .inner
}

/// Renders the widget. Returns the action taken this frame, if any.
pub fn draw_widget(
    ctx: &egui::Context,
    surface: &WidgetSurface,
    conversation: &mut Conversation,
) -> Option<ChatAction> {
    let mut action = None;

    if draw_toggle_button(ctx, surface.is_open()) {
        action = Some(ChatAction::ToggleOpen);
    }

    if !surface.is_open() {
        return action;
    }

    let persona = conversation.persona();
    let typing = conversation.is_typing();

    egui::Window::new(persona.display_name())
        .id(egui::Id::new("chat_widget"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_size(egui::vec2(WIDGET_WIDTH, WIDGET_HEIGHT))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-WIDGET_MARGIN, -(WIDGET_MARGIN + 64.0)),
        )
        .show(ctx, |ui| {
            chat::draw_header(ui, persona.display_name(), persona.tagline(), |ui| {
                if ui.button("✕").on_hover_text("Fechar").clicked() {
                    action = Some(ChatAction::Close);
                }
                if ui.button("📅").on_hover_text("Agendar no WhatsApp").clicked() {
                    action = Some(ChatAction::Book);
                }
            });

            chat::draw_messages(ui, conversation.transcript().messages(), typing, 96.0);

            // Chips belong to the last agent message, hidden while typing
            if !typing {
                if let Some(choice) = chat::draw_suggestions(ui, conversation.suggestions()) {
                    action = Some(ChatAction::Suggestion(choice));
                }
            }

            ui.separator();
            if chat::draw_input_row(ui, conversation.input_mut(), true, "Digite sua dúvida...") {
                action = Some(ChatAction::Submit);
            }
        });

    action
}
