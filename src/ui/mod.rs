// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the personal site.
//! Handles layout, routes page events through the dispatch table, and feeds
//! commands to background workers.

pub mod components;

use std::collections::BTreeMap;
use std::sync::Arc;

use eframe::egui;

use crate::config::{SiteConfig, TabSpec};
use crate::dispatch::{DispatchTable, DomEvent, ESCAPE_KEY, EventName};
use crate::models::theme::Theme;
use crate::mvu::{self, AppModel, Command, CommandRunner, Msg, Restore};
use crate::ui::components::{access_gate, contact_form, tabs, theme};
use crate::utils::{Block, to_blocks};

/// Stateful egui application rendering the site.
pub struct FolioApp {
    config: SiteConfig,
    model: AppModel,
    dispatch: DispatchTable,
    panels: BTreeMap<String, Vec<Block>>,
    applied_theme: Option<Theme>,
    inbox: Vec<Msg>,
    /// Messages raised by page widgets; dropped while the access modal is open.
    page_msgs: Vec<Msg>,
    events: Vec<DomEvent>,
    runner: Arc<CommandRunner>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Option<Msg>>,
}

impl FolioApp {
    /// Spawn command workers and queue load-time restoration.
    ///
    /// Workers handle hashing, delivery, and link opening. Storage writes stay
    /// on the UI thread so the persisted flags follow the order of the updates
    /// that issued them.
    pub fn new(config: SiteConfig, runner: Arc<CommandRunner>, restore: Restore) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Option<Msg>>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let runner = Arc::clone(&runner);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let _ = msg_tx.send(runner.run(cmd));
                }
            });
        }

        let panels = config
            .tabs
            .iter()
            .map(|t| (t.name.clone(), to_blocks(&t.body)))
            .collect();

        Self {
            model: AppModel::new(&config),
            config,
            dispatch: DispatchTable::new(),
            panels,
            applied_theme: None,
            inbox: vec![Msg::Restore(restore)],
            page_msgs: Vec::new(),
            events: Vec::new(),
            runner,
            cmd_tx,
            msg_rx,
        }
    }

    /// Drain worker replies, dispatched events, and queued messages into the model.
    ///
    /// Input from the page behind an open access modal is discarded, so a click
    /// that dismisses the modal never reaches the widget underneath it.
    fn pump(&mut self) {
        let modal_was_open = self.model.access.modal_open();

        while let Ok(reply) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.extend(reply);
        }

        for event in std::mem::take(&mut self.events) {
            if modal_was_open && !event.name.reaches_modal() {
                tracing::debug!(event = event.name.as_str(), "ignored behind access modal");
                continue;
            }
            if let Some(msg) = self.dispatch.dispatch(&event) {
                self.inbox.push(msg);
            }
        }

        let page_msgs = std::mem::take(&mut self.page_msgs);
        if !modal_was_open {
            self.inbox.extend(page_msgs);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if cmd.runs_on_ui_thread() {
                    self.inbox.extend(self.runner.run(cmd));
                } else if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.model.theme.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_theme(theme.to_egui());
            self.applied_theme = Some(theme);
        }
    }

    /// Collect document-wide input: Escape anywhere raises a keydown event.
    fn collect_global_events(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.events.push(DomEvent::key_down(ESCAPE_KEY));
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(&self.config.site.title);
                ui.label(
                    egui::RichText::new(&self.config.site.owner)
                        .color(egui::Color32::from_gray(110)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_enabled_ui(!self.model.access.modal_open(), |ui| {
                        let events = theme::view(ui, &self.model.theme);
                        self.events.extend(events);
                    });
                });
            });
            if !self.config.site.tagline.is_empty() {
                ui.label(egui::RichText::new(&self.config.site.tagline).italics());
            }
            ui.add_space(4.0);
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        if self.model.pending_commands > 0 {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
                ui.label(egui::RichText::new("Working…").color(egui::Color32::from_gray(110)));
            });
        }
    }

    /// Render the access modal and report clicks that land outside it.
    fn render_access_modal(&mut self, ctx: &egui::Context) {
        let (msgs, rect) = access_gate::view(ctx, &self.model.access);
        self.inbox.extend(msgs.into_iter().map(Msg::Access));

        if let Some(rect) = rect {
            let outside = ctx.input(|i| {
                i.pointer.any_click()
                    && i.pointer
                        .interact_pos()
                        .is_some_and(|pos| !rect.contains(pos))
            });
            if outside {
                self.events.push(DomEvent::new(EventName::OverlayClick));
            }
        }
    }

    fn render_active_panel(&self, ui: &mut egui::Ui) {
        let Some(tab) = self
            .model
            .tabs
            .active_panel()
            .and_then(|name| self.config.tab(name))
        else {
            return;
        };
        if tab.gated && !self.model.access.is_unlocked() {
            return;
        }
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_blocks(ui, tab, self.panels.get(&tab.name).map(Vec::as_slice).unwrap_or(&[]));
        });
    }
}

impl eframe::App for FolioApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which
    /// eframe still invokes before `ui` each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame.
    ///
    /// Routes pending events and messages into the model, applies the current
    /// theme, then renders the top bar, tab strip, active panel, contact form,
    /// and (when open) the access modal. Interaction during the frame is queued
    /// for the next pass.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_global_events(ctx);
        self.pump();
        self.apply_theme(ctx);

        self.render_top_bar(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            let page_enabled = !self.model.access.modal_open();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_enabled_ui(page_enabled, |ui| {
                    let events = tabs::view(
                        ui,
                        &self.model.tabs,
                        &self.config.tabs,
                        self.model.access.is_unlocked(),
                    );
                    self.events.extend(events);
                    ui.add_space(8.0);

                    self.render_active_panel(ui);
                    ui.add_space(16.0);

                    let msgs = contact_form::view(ui, &self.model.contact);
                    self.page_msgs.extend(msgs.into_iter().map(Msg::Contact));
                    ui.add_space(8.0);
                });
            });
        });

        self.render_access_modal(ctx);

        if self.model.pending_commands > 0
            || !self.inbox.is_empty()
            || !self.page_msgs.is_empty()
            || !self.events.is_empty()
        {
            ctx.request_repaint();
        }
    }
}

/// Lay out a panel's Markdown blocks.
fn render_blocks(ui: &mut egui::Ui, tab: &TabSpec, blocks: &[Block]) {
    if blocks.is_empty() {
        ui.label(
            egui::RichText::new(format!("Nothing in {} yet.", tab.label))
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => 22.0,
                    2 => 19.0,
                    _ => 16.0,
                };
                ui.add_space(4.0);
                ui.label(egui::RichText::new(text).size(size).strong());
            }
            Block::Paragraph(text) => {
                ui.label(text);
            }
            Block::Item(text) => {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(text);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    use anyhow::Result;
    use url::Url;

    use crate::models::contact::ContactField;
    use crate::storage::{KeyValueStore, MemoryStore, THEME_KEY};
    use crate::ui::components::access_gate::AccessMsg;
    use crate::ui::components::contact_form::ContactMsg;
    use crate::ui::components::theme::ThemeMsg;

    /// Store whose first write stalls, as a slow disk would.
    #[derive(Default)]
    struct SlowFirstWrite {
        inner: MemoryStore,
        stalled: std::sync::atomic::AtomicBool,
    }

    impl KeyValueStore for SlowFirstWrite {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if !self.stalled.swap(true, std::sync::atomic::Ordering::SeqCst) {
                thread::sleep(Duration::from_millis(300));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    fn app_with(durable: Arc<dyn KeyValueStore>) -> FolioApp {
        let config = SiteConfig::builtin().unwrap();
        let runner = CommandRunner::new(
            durable,
            Arc::new(MemoryStore::default()),
            Url::parse("http://127.0.0.1:9/f").unwrap(),
        )
        .unwrap();
        let mut app = FolioApp::new(config, Arc::new(runner), Restore::default());
        app.pump();
        app
    }

    #[test]
    fn slow_theme_write_does_not_reorder_persisted_flag() {
        let durable = Arc::new(SlowFirstWrite::default());
        let mut app = app_with(durable.clone());
        assert_eq!(app.model.theme.theme(), Theme::Light);

        app.inbox.push(Msg::Theme(ThemeMsg::Toggle));
        app.pump();
        app.inbox.push(Msg::Theme(ThemeMsg::Toggle));
        app.pump();
        thread::sleep(Duration::from_millis(500));
        app.pump();

        assert_eq!(app.model.theme.theme(), Theme::Light);
        assert_eq!(durable.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(app.model.pending_commands, 0);
    }

    #[test]
    fn overlay_click_does_not_switch_tab_underneath() {
        let mut app = app_with(Arc::new(MemoryStore::default()));
        app.inbox.push(Msg::Access(AccessMsg::RequestAccess));
        app.pump();
        assert!(app.model.access.modal_open());

        app.events.push(DomEvent::new(EventName::OverlayClick));
        app.events
            .push(DomEvent::new(EventName::SwitchTab).with_target("projects"));
        app.events.push(DomEvent::new(EventName::ToggleTheme));
        app.pump();

        assert!(!app.model.access.modal_open());
        assert_eq!(app.model.tabs.active_panel(), Some("resume"));
        assert_eq!(app.model.theme.theme(), Theme::Light);
    }

    #[test]
    fn escape_does_not_submit_contact_form_underneath() {
        let mut app = app_with(Arc::new(MemoryStore::default()));
        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.org"),
            (ContactField::Subject, "Hi"),
            (ContactField::Message, "Hello"),
        ] {
            app.inbox
                .push(Msg::Contact(ContactMsg::FieldChanged(field, value.into())));
        }
        app.inbox.push(Msg::Access(AccessMsg::RequestAccess));
        app.pump();
        assert!(app.model.access.modal_open());

        app.events.push(DomEvent::key_down(ESCAPE_KEY));
        app.page_msgs.push(Msg::Contact(ContactMsg::Submit));
        app.pump();

        assert!(!app.model.access.modal_open());
        assert!(!app.model.contact.sending());
        assert!(app.model.contact.status().is_none());
        assert_eq!(app.model.pending_commands, 0);
    }

    #[test]
    fn page_input_flows_once_modal_is_closed() {
        let mut app = app_with(Arc::new(MemoryStore::default()));

        app.events
            .push(DomEvent::new(EventName::SwitchTab).with_target("projects"));
        app.page_msgs.push(Msg::Contact(ContactMsg::Submit));
        app.pump();

        assert_eq!(app.model.tabs.active_panel(), Some("projects"));
        assert!(app.model.contact.status().is_some(), "blank form reports missing fields");
    }
}
