// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form with a single in-flight submission and a status slot.

use eframe::egui;

use crate::models::contact::{ContactField, ContactFields, ContactPayload};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const SENT_MESSAGE: &str = "Message sent! I will get back to you soon.";
pub const UNAVAILABLE_MESSAGE: &str =
    "The message service is unavailable right now. Please try again later.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Colour class of the status slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Text shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub kind: StatusKind,
}

/// Result of one delivery attempt, reported back by the worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactModel {
    fields: ContactFields,
    sending: bool,
    status: Option<FormStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactMsg {
    FieldChanged(ContactField, String),
    Submit,
    Delivered(DeliveryOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactCommand {
    Send(ContactPayload),
}

impl ContactModel {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Whether a submission is in flight (submit control disabled).
    pub fn sending(&self) -> bool {
        self.sending
    }

    pub fn submit_enabled(&self) -> bool {
        !self.sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    fn set_status(&mut self, text: &str, kind: StatusKind) {
        self.status = Some(FormStatus {
            text: text.to_string(),
            kind,
        });
    }
}

/// Apply a message to the form.
///
/// Every accepted `Submit` yields exactly one `Send` command, and the matching
/// `Delivered` re-enables the submit control whatever the outcome.
pub fn update(model: &mut ContactModel, msg: ContactMsg, cmds: &mut Vec<ContactCommand>) {
    match msg {
        ContactMsg::FieldChanged(field, value) => model.fields.set(field, value),
        ContactMsg::Submit => {
            if model.sending {
                return;
            }
            match model.fields.to_payload() {
                Some(payload) => {
                    model.sending = true;
                    cmds.push(ContactCommand::Send(payload));
                }
                None => model.set_status(MISSING_FIELDS_MESSAGE, StatusKind::Error),
            }
        }
        ContactMsg::Delivered(outcome) => {
            if !model.sending {
                tracing::debug!(?outcome, "ignoring delivery outcome with no submission in flight");
                return;
            }
            match outcome {
                DeliveryOutcome::Sent => {
                    model.set_status(SENT_MESSAGE, StatusKind::Success);
                    model.fields.clear();
                }
                DeliveryOutcome::Failed => {
                    model.set_status(UNAVAILABLE_MESSAGE, StatusKind::Error)
                }
            }
            model.sending = false;
        }
    }
}

/// Render the contact form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &ContactModel) -> Vec<ContactMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new(format!("{} Contact", egui_phosphor::regular::ENVELOPE_SIMPLE))
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("contact_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 8.0))
                .min_col_width(80.0)
                .show(ui, |ui| {
                    single_line(ui, model, ContactField::Name, "Name", "Ada Lovelace", &mut msgs);
                    single_line(ui, model, ContactField::Email, "Email", "ada@example.org", &mut msgs);
                    single_line(ui, model, ContactField::Subject, "Subject", "Hello", &mut msgs);

                    ui.label("Message");
                    let mut text = model.fields.message.clone();
                    if ui
                        .add_enabled(
                            !model.sending,
                            egui::TextEdit::multiline(&mut text)
                                .desired_rows(5)
                                .desired_width(f32::INFINITY),
                        )
                        .changed()
                    {
                        msgs.push(ContactMsg::FieldChanged(ContactField::Message, text));
                    }
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let label = format!("{} {}", egui_phosphor::regular::PAPER_PLANE_TILT, model.submit_label());
                if ui
                    .add_enabled(model.submit_enabled(), egui::Button::new(label))
                    .clicked()
                {
                    msgs.push(ContactMsg::Submit);
                }
                if model.sending {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });

            if let Some(status) = &model.status {
                let color = match status.kind {
                    StatusKind::Success => egui::Color32::from_rgb(46, 139, 87),
                    StatusKind::Error => ui.visuals().error_fg_color,
                };
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&status.text).color(color));
            }
        });

    msgs
}

fn single_line(
    ui: &mut egui::Ui,
    model: &ContactModel,
    field: ContactField,
    label: &str,
    hint: &str,
    msgs: &mut Vec<ContactMsg>,
) {
    ui.label(label);
    let mut text = model.fields.get(field).to_string();
    if ui
        .add_enabled(
            !model.sending,
            egui::TextEdit::singleline(&mut text).hint_text(hint),
        )
        .changed()
    {
        msgs.push(ContactMsg::FieldChanged(field, text));
    }
    ui.end_row();
}
