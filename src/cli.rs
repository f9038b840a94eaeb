// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Site configuration JSON (tabs, access digest, contact endpoint).
    ///
    /// Built-in demo content is used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File holding durable preferences such as the theme flag.
    #[arg(long, default_value = "folio-prefs.json")]
    pub prefs: PathBuf,
}
