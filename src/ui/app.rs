//! Main application structure and lifecycle management
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::chat::ChatAction;
use super::{landing, panel, widget};
use crate::ai::{self, GeminiSession, Persona};
use crate::config::Config;
use crate::core::booking::{booking_link, prefill_for_plan, prefill_for_text};
use crate::core::surface::{PanelSurface, WidgetSurface};
use crate::core::{Conversation, PendingTurn, Reply, ReplyResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationId {
    Widget,
    Panel,
}

/// Reply delivered from a background task to the UI thread.
#[derive(Debug)]
pub struct TurnResult {
    pub conversation: ConversationId,
    pub turn: Uuid,
    pub reply: Reply,
}

pub struct AssistantApp {
    config: Config,
    runtime: Handle,
    widget: Conversation,
    panel: Conversation,
    widget_surface: WidgetSurface,
    panel_surface: PanelSurface,
    widget_resolver: ReplyResolver<GeminiSession>,
    panel_resolver: ReplyResolver<GeminiSession>,
    reply_receiver: std_mpsc::Receiver<TurnResult>,
    reply_sender: std_mpsc::Sender<TurnResult>,
}

impl AssistantApp {
    pub fn new(config: Config, runtime: Handle) -> Self {
        // Created once; absence is permanent for this run
        let session = ai::open_session(&config).map(|s| Arc::new(Mutex::new(s)));

        let panel_resolver = ReplyResolver::new(Persona::Aron, session, config.typing_delay);
        let widget_resolver = ReplyResolver::new(Persona::Scripted, None, config.typing_delay);
        log::info!(
            "Aron replies via {}",
            if panel_resolver.uses_remote() { "Gemini" } else { "canned table" }
        );

        let (sender, receiver) = std_mpsc::channel();

        Self {
            config,
            runtime,
            widget: Conversation::new(Persona::Scripted),
            panel: Conversation::new(Persona::Aron),
            widget_surface: WidgetSurface::default(),
            panel_surface: PanelSurface::default(),
            widget_resolver,
            panel_resolver,
            reply_receiver: receiver,
            reply_sender: sender,
        }
    }

    fn conversation_mut(&mut self, id: ConversationId) -> &mut Conversation {
        match id {
            ConversationId::Widget => &mut self.widget,
            ConversationId::Panel => &mut self.panel,
        }
    }

    fn resolver(&self, id: ConversationId) -> &ReplyResolver<GeminiSession> {
        match id {
            ConversationId::Widget => &self.widget_resolver,
            ConversationId::Panel => &self.panel_resolver,
        }
    }

    /// Applies replies that arrived since the last frame.
    fn process_replies(&mut self) {
        while let Ok(result) = self.reply_receiver.try_recv() {
            self.conversation_mut(result.conversation)
                .complete(result.turn, result.reply);
        }
    }

    fn start_turn(&mut self, ctx: &egui::Context, id: ConversationId, turn: Option<PendingTurn>) {
        let Some(turn) = turn else {
            return;
        };

        if id == ConversationId::Panel {
            self.panel_surface.on_submit(ctx.screen_rect().width());
        }

        let resolver = self.resolver(id).clone();
        let sender = self.reply_sender.clone();
        let ctx_clone = ctx.clone();

        self.runtime.spawn(async move {
            let reply = resolver.resolve(&turn.text).await;

            let result = TurnResult {
                conversation: id,
                turn: turn.id,
                reply,
            };
            if sender.send(result).is_err() {
                log::debug!("UI closed before turn {} finished", turn.id);
                return;
            }

            ctx_clone.request_repaint();
        });
    }

    fn open_booking(&self, ctx: &egui::Context, prefill: Option<&str>) {
        let url = booking_link(&self.config.booking_phone, prefill);
        log::info!("📅 Opening booking link");
        ctx.open_url(egui::OpenUrl::new_tab(url));
    }

    fn handle_action(&mut self, ctx: &egui::Context, id: ConversationId, action: ChatAction) {
        match action {
            ChatAction::Submit => {
                let turn = self.conversation_mut(id).submit_input();
                self.start_turn(ctx, id, turn);
            }
            ChatAction::Suggestion(text) => {
                let turn = self.conversation_mut(id).click_suggestion(&text);
                self.start_turn(ctx, id, turn);
            }
            ChatAction::Book => {
                let prefill = self
                    .conversation_mut(id)
                    .last_user_text()
                    .and_then(prefill_for_text);
                self.open_booking(ctx, prefill.as_deref());
            }
            ChatAction::ToggleOpen => self.widget_surface.toggle(),
            ChatAction::Close => self.widget_surface.close(),
            ChatAction::ToggleExpand => self.panel_surface.toggle(),
            ChatAction::Collapse => self.panel_surface.collapse(),
        }
        ctx.request_repaint();
    }

    pub fn check_close_widget(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.widget_surface.is_open() {
            self.widget_surface.close();
            ctx.request_repaint();
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_replies();
        self.check_close_widget(ctx);

        let expanded = self.panel_surface.is_expanded();
        let panel_action = if expanded {
            egui::CentralPanel::default()
                .show(ctx, |ui| panel::draw_panel(ui, &mut self.panel, true))
                .inner
        } else {
            let action = egui::SidePanel::right("aron_panel")
                .exact_width(panel::PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| panel::draw_panel(ui, &mut self.panel, false))
                .inner;

            let chosen = egui::CentralPanel::default()
                .show(ctx, landing::draw_landing)
                .inner;
            if let Some(plan) = chosen {
                self.open_booking(ctx, Some(&prefill_for_plan(plan)));
            }
            action
        };

        if let Some(action) = panel_action {
            self.handle_action(ctx, ConversationId::Panel, action);
        }

        if let Some(action) = widget::draw_widget(ctx, &self.widget_surface, &mut self.widget) {
            self.handle_action(ctx, ConversationId::Widget, action);
        }
    }
}

impl Drop for AssistantApp {
    fn drop(&mut self) {
        // Pending replies must not touch the torn-down windows
        self.widget.teardown();
        self.panel.teardown();
        log::info!("Chat windows closed");
    }
}
