// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Résumé tab strip: parallel button and panel sets with one "active" marker each.

use eframe::egui;

use crate::config::TabSpec;
use crate::dispatch::{DomEvent, EventName};

/// Which panel and which button currently carry the active marker.
///
/// Panels and buttons are tracked separately, mirroring page markup where a
/// switch can activate a panel without a button (or the reverse).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabsModel {
    names: Vec<String>,
    active_panel: Option<String>,
    active_button: Option<String>,
}

/// Messages for the tab switcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabsMsg {
    /// Activate the panel `name` and, when given, the originating button.
    Switch { name: String, origin: Option<String> },
}

impl TabsModel {
    /// Build the strip with `initial` active (both panel and button).
    pub fn new(names: Vec<String>, initial: &str) -> Self {
        let mut model = Self {
            names,
            ..Default::default()
        };
        update(
            &mut model,
            TabsMsg::Switch {
                name: initial.to_string(),
                origin: Some(initial.to_string()),
            },
        );
        model
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel.as_deref()
    }

    pub fn active_button(&self) -> Option<&str> {
        self.active_button.as_deref()
    }

    pub fn is_panel_active(&self, name: &str) -> bool {
        self.active_panel.as_deref() == Some(name)
    }

    pub fn is_button_active(&self, name: &str) -> bool {
        self.active_button.as_deref() == Some(name)
    }

    fn has(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Clear every active marker, then activate the matching panel and origin button.
///
/// Unknown names leave nothing active rather than failing.
pub fn update(model: &mut TabsModel, msg: TabsMsg) {
    match msg {
        TabsMsg::Switch { name, origin } => {
            model.active_panel = None;
            model.active_button = None;
            if model.has(&name) {
                model.active_panel = Some(name);
            }
            if let Some(origin) = origin.filter(|o| model.has(o)) {
                model.active_button = Some(origin);
            }
        }
    }
}

/// Render the tab buttons.
///
/// The gated tab shows a lock glyph and raises an access request until
/// `gate_unlocked` is true; afterwards it switches like any other tab.
pub fn view(
    ui: &mut egui::Ui,
    model: &TabsModel,
    tabs: &[TabSpec],
    gate_unlocked: bool,
) -> Vec<DomEvent> {
    let mut events = Vec::new();
    ui.horizontal_wrapped(|ui| {
        for tab in tabs {
            let locked = tab.gated && !gate_unlocked;
            let text = if tab.gated {
                let glyph = if locked {
                    egui_phosphor::regular::LOCK
                } else {
                    egui_phosphor::regular::LOCK_OPEN
                };
                format!("{glyph} {}", tab.label)
            } else {
                tab.label.clone()
            };
            let mut rich = egui::RichText::new(text);
            if locked {
                rich = rich.weak();
            }
            let button = egui::Button::new(rich).selected(model.is_button_active(&tab.name));
            let response = ui.add(button);
            let response = if locked {
                response.on_hover_text("Access code required")
            } else {
                response
            };
            if response.clicked() {
                let event = if locked {
                    DomEvent::new(EventName::RequestAccess)
                } else {
                    DomEvent::new(EventName::SwitchTab).with_target(&tab.name)
                };
                events.push(event);
            }
        }
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabsModel {
        TabsModel::new(
            vec!["resume".into(), "projects".into(), "detailed".into()],
            "projects",
        )
    }

    #[test]
    fn switch_leaves_exactly_one_active_panel_and_button() {
        let mut model = strip();

        update(
            &mut model,
            TabsMsg::Switch {
                name: "resume".into(),
                origin: Some("resume".into()),
            },
        );

        assert_eq!(model.active_panel(), Some("resume"));
        assert_eq!(model.active_button(), Some("resume"));
        assert!(!model.is_panel_active("projects"));
        assert!(!model.is_button_active("projects"));
    }

    #[test]
    fn switch_is_idempotent() {
        let mut once = strip();
        let msg = TabsMsg::Switch {
            name: "detailed".into(),
            origin: Some("detailed".into()),
        };
        update(&mut once, msg.clone());

        let mut twice = once.clone();
        update(&mut twice, msg);

        assert_eq!(once, twice);
    }

    #[test]
    fn switch_without_origin_activates_panel_only() {
        let mut model = strip();

        update(
            &mut model,
            TabsMsg::Switch {
                name: "resume".into(),
                origin: None,
            },
        );

        assert_eq!(model.active_panel(), Some("resume"));
        assert_eq!(model.active_button(), None);
    }

    #[test]
    fn unknown_tab_clears_markers_without_failing() {
        let mut model = strip();

        update(
            &mut model,
            TabsMsg::Switch {
                name: "missing".into(),
                origin: Some("missing".into()),
            },
        );

        assert_eq!(model.active_panel(), None);
        assert_eq!(model.active_button(), None);
    }
}
