// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::sync::Arc;

use anyhow::Result;
use reqwest::blocking::Client;
use url::Url;

use crate::config::SiteConfig;
use crate::logic::contact;
use crate::models::contact::ContactPayload;
use crate::models::theme::Theme;
use crate::storage::{self, KeyValueStore, THEME_KEY, UNLOCK_KEY, UNLOCKED_VALUE};
use crate::ui::components::access_gate::{self, AccessCommand, AccessModel, AccessMsg};
use crate::ui::components::contact_form::{
    self, ContactCommand, ContactModel, ContactMsg, DeliveryOutcome,
};
use crate::ui::components::tabs::{self, TabsModel, TabsMsg};
use crate::ui::components::theme::{self, ThemeCommand, ThemeModel, ThemeMsg};
use crate::utils::hash_str;

/// Top-level application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppModel {
    /// Root theme attribute and icon.
    pub theme: ThemeModel,
    /// Active tab panel and button.
    pub tabs: TabsModel,
    /// Access gate and its modal.
    pub access: AccessModel,
    /// Contact form fields and status.
    pub contact: ContactModel,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    /// Initial state for a site: default tab active, gate locked, light theme.
    pub fn new(config: &SiteConfig) -> Self {
        let names = config.tabs.iter().map(|t| t.name.clone()).collect();
        Self {
            theme: ThemeModel::default(),
            tabs: TabsModel::new(names, &config.default_tab),
            access: AccessModel::new(
                config.access.digest.clone(),
                config.gated_tab().map(|t| t.name.clone()),
                config.access.request_url.clone(),
            ),
            contact: ContactModel::default(),
            pending_commands: 0,
        }
    }
}

/// Values read from storage and the platform at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Restore {
    pub saved_theme: Option<String>,
    pub system_prefers_dark: Option<bool>,
    pub unlocked: bool,
}

impl Restore {
    pub fn read(
        durable: &dyn KeyValueStore,
        session: &dyn KeyValueStore,
        system_prefers_dark: Option<bool>,
    ) -> Self {
        Self {
            saved_theme: durable.get(THEME_KEY),
            system_prefers_dark,
            unlocked: storage::is_unlocked(session),
        }
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Load-time restoration of theme and gate state.
    Restore(Restore),
    Theme(ThemeMsg),
    Tabs(TabsMsg),
    Access(AccessMsg),
    Contact(ContactMsg),
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PersistTheme(Theme),
    PersistUnlock,
    HashCode(String),
    SendContact(ContactPayload),
    OpenLink(Url),
}

impl Command {
    /// Storage writes run in issue order on the UI thread; everything else
    /// goes to the worker pool.
    pub fn runs_on_ui_thread(&self) -> bool {
        matches!(self, Self::PersistTheme(_) | Self::PersistUnlock)
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Restore(restore) => {
            theme::update(
                &mut model.theme,
                ThemeMsg::Restore {
                    saved: restore.saved_theme,
                    system_prefers_dark: restore.system_prefers_dark,
                },
                &mut Vec::new(),
            );
            update_access(
                model,
                AccessMsg::Restore {
                    unlocked: restore.unlocked,
                },
                cmds,
            );
        }
        Msg::Theme(m) => {
            let mut theme_cmds = Vec::new();
            theme::update(&mut model.theme, m, &mut theme_cmds);
            for c in theme_cmds {
                match c {
                    ThemeCommand::Persist(theme) => cmds.push(Command::PersistTheme(theme)),
                }
            }
        }
        Msg::Tabs(m) => tabs::update(&mut model.tabs, m),
        Msg::Access(m) => update_access(model, m, cmds),
        Msg::Contact(m) => {
            let mut contact_cmds = Vec::new();
            contact_form::update(&mut model.contact, m, &mut contact_cmds);
            for c in contact_cmds {
                match c {
                    ContactCommand::Send(payload) => cmds.push(Command::SendContact(payload)),
                }
            }
        }
    }
}

/// Route a gate message, activating the gated tab in-place when asked.
fn update_access(model: &mut AppModel, msg: AccessMsg, cmds: &mut Vec<Command>) {
    let mut access_cmds = Vec::new();
    access_gate::update(&mut model.access, msg, &mut access_cmds);
    for c in access_cmds {
        match c {
            AccessCommand::HashCode(code) => cmds.push(Command::HashCode(code)),
            AccessCommand::PersistUnlock => cmds.push(Command::PersistUnlock),
            AccessCommand::ActivateTab(name) => tabs::update(
                &mut model.tabs,
                TabsMsg::Switch {
                    origin: Some(name.clone()),
                    name,
                },
            ),
            AccessCommand::OpenLink(url) => cmds.push(Command::OpenLink(url)),
        }
    }
}

/// Executes commands against storage and the network.
///
/// The shell calls [`CommandRunner::run`] directly for storage writes and from
/// worker threads for hashing, delivery, and link opening.
pub struct CommandRunner {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
    client: Client,
    endpoint: Url,
}

impl CommandRunner {
    pub fn new(
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
        endpoint: Url,
    ) -> Result<Self> {
        Ok(Self {
            durable,
            session,
            client: contact::build_client()?,
            endpoint,
        })
    }

    pub fn durable(&self) -> &dyn KeyValueStore {
        self.durable.as_ref()
    }

    pub fn session(&self) -> &dyn KeyValueStore {
        self.session.as_ref()
    }

    /// Execute a command and return the resulting message, if any.
    ///
    /// Storage and launcher failures are logged and otherwise ignored; the UI
    /// keeps working with in-memory state.
    pub fn run(&self, cmd: Command) -> Option<Msg> {
        match cmd {
            Command::PersistTheme(theme) => {
                match self.durable.set(THEME_KEY, theme.as_str()) {
                    Ok(()) => tracing::debug!(theme = theme.as_str(), "theme persisted"),
                    Err(err) => tracing::warn!(error = %err, "failed to persist theme"),
                }
                None
            }
            Command::PersistUnlock => {
                if let Err(err) = self.session.set(UNLOCK_KEY, UNLOCKED_VALUE) {
                    tracing::warn!(error = %err, "failed to record unlock for session");
                }
                None
            }
            Command::HashCode(code) => Some(Msg::Access(AccessMsg::CodeHashed {
                digest: hash_str(&code),
            })),
            Command::SendContact(payload) => {
                let outcome = match contact::deliver(&self.client, &self.endpoint, &payload) {
                    Ok(()) => {
                        tracing::info!(endpoint = %self.endpoint, "contact message delivered");
                        DeliveryOutcome::Sent
                    }
                    Err(err) => {
                        tracing::warn!(error = %format!("{err:#}"), "contact delivery failed");
                        DeliveryOutcome::Failed
                    }
                };
                Some(Msg::Contact(ContactMsg::Delivered(outcome)))
            }
            Command::OpenLink(url) => {
                if let Err(err) = open::that(url.as_str()) {
                    tracing::warn!(%url, error = %err, "failed to open link");
                }
                None
            }
        }
    }
}
