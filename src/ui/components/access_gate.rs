// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Access gate for the one code-protected tab.
//!
//! Two states, Locked and Unlocked; Unlocked is sticky for the session. The
//! digest ships with the app, so this is friction for casual visitors and
//! nothing more.

use eframe::egui;
use url::Url;

use crate::models::access::AccessDigest;

/// Shown when the modal is submitted empty.
pub const EMPTY_CODE_MESSAGE: &str = "Please enter an access code.";
/// Shown when the digest does not match.
pub const INVALID_CODE_MESSAGE: &str = "Invalid access code. Please try again or request access.";

/// Gate state for the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

/// UI model for the gate and its modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessModel {
    digest: AccessDigest,
    gated_tab: Option<String>,
    request_url: Option<Url>,
    state: GateState,
    modal_open: bool,
    input: String,
    error: Option<String>,
    focus_requested: bool,
    verifying: bool,
}

/// Messages emitted by the gate button, the modal, and the command worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessMsg {
    /// The gated tab's button was clicked.
    RequestAccess,
    InputChanged(String),
    /// The modal form was submitted.
    Submit,
    /// Digest of the submitted code, computed off the UI thread.
    CodeHashed { digest: String },
    /// Escape or a click outside the modal content.
    Dismiss,
    /// The view has moved keyboard focus to the input.
    FocusApplied,
    /// "Request access" link clicked.
    RequestCode,
    /// Load-time restoration from the session flag.
    Restore { unlocked: bool },
}

/// Side-effects requested by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessCommand {
    HashCode(String),
    PersistUnlock,
    /// Make the gated tab the active view.
    ActivateTab(String),
    OpenLink(Url),
}

impl AccessModel {
    /// Build a locked gate for `gated_tab`. Without a gated tab every request is a no-op.
    pub fn new(digest: AccessDigest, gated_tab: Option<String>, request_url: Option<Url>) -> Self {
        Self {
            digest,
            gated_tab,
            request_url,
            state: GateState::Locked,
            modal_open: false,
            input: String::new(),
            error: None,
            focus_requested: false,
            verifying: false,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    pub fn verifying(&self) -> bool {
        self.verifying
    }

    pub fn gated_tab(&self) -> Option<&str> {
        self.gated_tab.as_deref()
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.input.clear();
        self.error = None;
        self.focus_requested = false;
    }
}

/// Apply a message to the gate and queue any side-effects.
pub fn update(model: &mut AccessModel, msg: AccessMsg, cmds: &mut Vec<AccessCommand>) {
    match msg {
        AccessMsg::RequestAccess => {
            let Some(tab) = model.gated_tab.clone() else {
                return;
            };
            if model.is_unlocked() {
                cmds.push(AccessCommand::ActivateTab(tab));
            } else {
                model.modal_open = true;
                model.focus_requested = true;
            }
        }
        AccessMsg::InputChanged(text) => model.input = text,
        AccessMsg::Submit => {
            if !model.modal_open || model.verifying {
                return;
            }
            let code = model.input.trim();
            if code.is_empty() {
                model.error = Some(EMPTY_CODE_MESSAGE.to_string());
                return;
            }
            model.verifying = true;
            cmds.push(AccessCommand::HashCode(code.to_string()));
        }
        AccessMsg::CodeHashed { digest } => {
            model.verifying = false;
            if model.digest.matches(&digest) {
                tracing::info!("access gate unlocked for this session");
                model.state = GateState::Unlocked;
                model.close_modal();
                cmds.push(AccessCommand::PersistUnlock);
                if let Some(tab) = model.gated_tab.clone() {
                    cmds.push(AccessCommand::ActivateTab(tab));
                }
            } else {
                tracing::debug!("access code digest mismatch");
                if model.modal_open {
                    model.error = Some(INVALID_CODE_MESSAGE.to_string());
                    model.input.clear();
                    model.focus_requested = true;
                }
            }
        }
        AccessMsg::Dismiss => {
            if model.modal_open {
                model.close_modal();
            }
        }
        AccessMsg::FocusApplied => model.focus_requested = false,
        AccessMsg::RequestCode => {
            if let Some(url) = model.request_url.clone() {
                cmds.push(AccessCommand::OpenLink(url));
            }
        }
        AccessMsg::Restore { unlocked } => {
            if unlocked {
                model.state = GateState::Unlocked;
            }
        }
    }
}

/// Render the access modal when open.
///
/// Returns the messages raised inside the modal plus the modal's screen
/// rectangle, which the shell uses to detect clicks on the surrounding overlay.
pub fn view(ctx: &egui::Context, model: &AccessModel) -> (Vec<AccessMsg>, Option<egui::Rect>) {
    let mut msgs = Vec::new();
    if !model.modal_open {
        return (msgs, None);
    }

    let mut input = model.input.clone();
    let shown = egui::Window::new(format!("{} Restricted section", egui_phosphor::regular::LOCK))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter the access code to view the detailed résumé.");
            ui.add_space(6.0);

            let resp = ui.add_enabled(
                !model.verifying,
                egui::TextEdit::singleline(&mut input)
                    .password(true)
                    .hint_text("Access code"),
            );
            if model.focus_requested {
                resp.request_focus();
                msgs.push(AccessMsg::FocusApplied);
            }
            if resp.changed() {
                msgs.push(AccessMsg::InputChanged(input.clone()));
            }
            if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                msgs.push(AccessMsg::Submit);
            }

            if let Some(error) = &model.error {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(error).color(ui.visuals().error_fg_color));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!model.verifying, egui::Button::new("Unlock"))
                    .clicked()
                {
                    msgs.push(AccessMsg::Submit);
                }
                if ui.button("Cancel").clicked() {
                    msgs.push(AccessMsg::Dismiss);
                }
                if model.request_url.is_some() && ui.link("Request access").clicked() {
                    msgs.push(AccessMsg::RequestCode);
                }
            });
        });

    (msgs, shown.map(|inner| inner.response.rect))
}
