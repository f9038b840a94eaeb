// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page-level event wiring.
//!
//! Clicks on shell controls and document-wide input (keys, clicks on the
//! modal overlay) arrive as named [`DomEvent`]s. A [`DispatchTable`] built once
//! at startup maps each name to a handler that turns the event into an
//! application [`Msg`]. Field edits inside components bypass the table and
//! emit component messages directly.

use std::collections::BTreeMap;

use crate::mvu::Msg;
use crate::ui::components::access_gate::AccessMsg;
use crate::ui::components::tabs::TabsMsg;
use crate::ui::components::theme::ThemeMsg;

/// Key name that dismisses the access modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Names of the events the shell raises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventName {
    ToggleTheme,
    SwitchTab,
    RequestAccess,
    KeyDown,
    OverlayClick,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleTheme => "toggle-theme",
            Self::SwitchTab => "switch-tab",
            Self::RequestAccess => "request-access",
            Self::KeyDown => "keydown",
            Self::OverlayClick => "overlay-click",
        }
    }

    /// Whether the event still applies while the access modal covers the page.
    pub fn reaches_modal(&self) -> bool {
        matches!(self, Self::KeyDown | Self::OverlayClick)
    }
}

/// One event with its optional target element and key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub name: EventName,
    /// Name of the element that raised the event (e.g. the tab button).
    pub target: Option<String>,
    pub key: Option<String>,
}

impl DomEvent {
    pub fn new(name: EventName) -> Self {
        Self {
            name,
            target: None,
            key: None,
        }
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn key_down(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::new(EventName::KeyDown)
        }
    }
}

/// Event handler: returns the message to route, or `None` to ignore the event.
pub type Handler = fn(&DomEvent) -> Option<Msg>;

/// Event name to handler mapping.
pub struct DispatchTable {
    handlers: BTreeMap<EventName, Handler>,
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// Register the handlers for every event the shell raises.
    pub fn new() -> Self {
        let mut handlers: BTreeMap<EventName, Handler> = BTreeMap::new();
        handlers.insert(EventName::ToggleTheme, on_toggle_theme);
        handlers.insert(EventName::SwitchTab, on_switch_tab);
        handlers.insert(EventName::RequestAccess, on_request_access);
        handlers.insert(EventName::KeyDown, on_key_down);
        handlers.insert(EventName::OverlayClick, on_overlay_click);
        Self { handlers }
    }

    /// Route an event to its handler.
    pub fn dispatch(&self, event: &DomEvent) -> Option<Msg> {
        let Some(handler) = self.handlers.get(&event.name) else {
            tracing::debug!(event = event.name.as_str(), "no handler registered");
            return None;
        };
        handler(event)
    }

    pub fn handles(&self, name: EventName) -> bool {
        self.handlers.contains_key(&name)
    }
}

fn on_toggle_theme(_: &DomEvent) -> Option<Msg> {
    Some(Msg::Theme(ThemeMsg::Toggle))
}

fn on_switch_tab(event: &DomEvent) -> Option<Msg> {
    let name = event.target.clone()?;
    Some(Msg::Tabs(TabsMsg::Switch {
        origin: Some(name.clone()),
        name,
    }))
}

fn on_request_access(_: &DomEvent) -> Option<Msg> {
    Some(Msg::Access(AccessMsg::RequestAccess))
}

fn on_key_down(event: &DomEvent) -> Option<Msg> {
    match event.key.as_deref() {
        Some(ESCAPE_KEY) => Some(Msg::Access(AccessMsg::Dismiss)),
        _ => None,
    }
}

fn on_overlay_click(_: &DomEvent) -> Option<Msg> {
    Some(Msg::Access(AccessMsg::Dismiss))
}
