// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the site UI.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::config::SiteConfig;
use crate::mvu::{CommandRunner, Restore};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::FolioApp;

/// Bootstrap the application and run the main egui event loop.
///
/// `prefs` is the durable preferences file; the session store lives only as
/// long as this call.
pub fn run(config: SiteConfig, prefs: &Path) -> Result<()> {
    let durable: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(prefs));
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
    let runner = Arc::new(CommandRunner::new(
        durable,
        session,
        config.contact.endpoint.clone(),
    )?);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    let title = config.site.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            let system_prefers_dark = cc
                .egui_ctx
                .system_theme()
                .map(|theme| theme == egui::Theme::Dark);
            let restore = Restore::read(runner.durable(), runner.session(), system_prefers_dark);
            Ok(Box::new(FolioApp::new(config, runner, restore)))
        }),
    )
    .map_err(|err| anyhow!("failed to run UI: {err}"))
}
