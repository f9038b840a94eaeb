// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Personal site shell: theme switching, résumé tabs, a code-gated tab, and a
//! contact form, structured as a Model-View-Update application on egui.

pub mod app;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod logic;
pub mod logging;
pub mod models;
pub mod mvu;
pub mod storage;
pub mod ui;
pub mod utils;
