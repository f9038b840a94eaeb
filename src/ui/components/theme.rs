// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Light/dark theme switching with a persisted preference.

use eframe::egui;

use crate::dispatch::{DomEvent, EventName};
use crate::models::theme::Theme;

/// Root theme state; the icon is derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeModel {
    theme: Theme,
}

/// Messages for the theme manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeMsg {
    /// Flip the theme and persist the result.
    Toggle,
    /// Load-time restoration from the persisted flag or the system preference.
    Restore {
        saved: Option<String>,
        system_prefers_dark: Option<bool>,
    },
}

/// Side-effects requested by the theme manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeCommand {
    Persist(Theme),
}

impl ThemeModel {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn icon(&self) -> &'static str {
        self.theme.icon()
    }
}

/// Apply a message to the model, queueing persistence when the theme is toggled.
pub fn update(model: &mut ThemeModel, msg: ThemeMsg, cmds: &mut Vec<ThemeCommand>) {
    match msg {
        ThemeMsg::Toggle => {
            model.theme = model.theme.toggled();
            cmds.push(ThemeCommand::Persist(model.theme));
        }
        ThemeMsg::Restore {
            saved,
            system_prefers_dark,
        } => {
            model.theme = resolve(saved.as_deref(), system_prefers_dark);
        }
    }
}

/// Saved flag wins; otherwise a dark system preference; otherwise light.
pub fn resolve(saved: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    match saved.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark == Some(true) => Theme::Dark,
        None => Theme::Light,
    }
}

/// Render the theme toggle button.
pub fn view(ui: &mut egui::Ui, model: &ThemeModel) -> Vec<DomEvent> {
    let mut events = Vec::new();
    let hover = match model.theme {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    };
    if ui
        .button(egui::RichText::new(model.icon()).size(16.0))
        .on_hover_text(hover)
        .clicked()
    {
        events.push(DomEvent::new(EventName::ToggleTheme));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_theme_and_persists_each_step() {
        let mut model = ThemeModel::default();
        let mut cmds = Vec::new();

        update(&mut model, ThemeMsg::Toggle, &mut cmds);
        assert_eq!(model.theme(), Theme::Dark);
        update(&mut model, ThemeMsg::Toggle, &mut cmds);

        assert_eq!(model.theme(), Theme::Light);
        assert_eq!(
            cmds,
            vec![
                ThemeCommand::Persist(Theme::Dark),
                ThemeCommand::Persist(Theme::Light)
            ]
        );
    }

    #[test]
    fn restore_without_saved_flag_follows_dark_system_preference() {
        let mut model = ThemeModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            ThemeMsg::Restore {
                saved: None,
                system_prefers_dark: Some(true),
            },
            &mut cmds,
        );

        assert_eq!(model.theme(), Theme::Dark);
        assert!(cmds.is_empty(), "restoration must not write storage");
    }

    #[test]
    fn saved_flag_overrides_system_preference() {
        assert_eq!(resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn missing_support_degrades_to_light() {
        assert_eq!(resolve(None, None), Theme::Light);
        assert_eq!(resolve(Some("sepia"), None), Theme::Light);
        assert_eq!(resolve(Some("sepia"), Some(true)), Theme::Dark);
    }

    #[test]
    fn icon_tracks_theme() {
        let mut model = ThemeModel::default();
        let light_icon = model.icon();
        update(&mut model, ThemeMsg::Toggle, &mut Vec::new());
        assert_ne!(model.icon(), light_icon);
        assert_eq!(model.icon(), Theme::Dark.icon());
    }
}
