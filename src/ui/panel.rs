//! Aron panel: docked to the right, or taking the whole window when expanded

use eframe::egui;

use super::chat::{self, ChatAction};
use crate::core::Conversation;

pub const PANEL_WIDTH: f32 = 400.0;

/// Height kept below the transcript for chips, input and the collapse button.
const FOOTER_HEIGHT: f32 = 120.0;

pub fn draw_panel(ui: &mut egui::Ui, conversation: &mut Conversation, expanded: bool) -> Option<ChatAction> {
    let mut action = None;
    let persona = conversation.persona();
    let typing = conversation.is_typing();

    chat::draw_header(ui, persona.display_name(), persona.tagline(), |ui| {
        let (icon, hint) = if expanded { ("🗗", "Reduzir") } else { ("⛶", "Expandir") };
        if ui.button(icon).on_hover_text(hint).clicked() {
            action = Some(ChatAction::ToggleExpand);
        }
        if ui.button("Agendar Reunião").clicked() {
            action = Some(ChatAction::Book);
        }
    });

    chat::draw_messages(ui, conversation.transcript().messages(), typing, FOOTER_HEIGHT);

    if !typing {
        if let Some(choice) = chat::draw_suggestions(ui, conversation.suggestions()) {
            action = Some(ChatAction::Suggestion(choice));
        }
    }

    ui.separator();
    if chat::draw_input_row(ui, conversation.input_mut(), !typing, "Digite sua mensagem...") {
        action = Some(ChatAction::Submit);
    }

    if expanded {
        ui.vertical_centered(|ui| {
            if ui
                .button(egui::RichText::new("⌄ RECOLHER CHAT").size(11.0).color(chat::MUTED_TEXT))
                .clicked()
            {
                action = Some(ChatAction::Collapse);
            }
        });
    }

    action
}
