//! Plan cards shown beside the docked panel
use eframe::egui;

use super::chat::MUTED_TEXT;
use crate::core::booking::{Plan, PLANS};

/// Renders the plan list. Returns the plan whose booking button was clicked.
pub fn draw_landing(ui: &mut egui::Ui) -> Option<&'static Plan> {
    let mut chosen = None;

    ui.add_space(12.0);
    ui.heading("Automação de atendimento no WhatsApp");
    ui.label(
        egui::RichText::new("Agente de IA 24/7, qualificação de leads e agendamento automático.")
            .color(MUTED_TEXT),
    );
    ui.add_space(16.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for plan in PLANS {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(plan.name).strong().size(16.0));
                    ui.label(format!("Implementação: {}", plan.implementation));
                    ui.label(format!("Manutenção: {}", plan.maintenance));
                    if ui.button("Agendar agora →").clicked() {
                        chosen = Some(plan);
                    }
                });
            ui.add_space(8.0);
        }
    });

    chosen
}
