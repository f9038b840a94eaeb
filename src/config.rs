// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Site configuration: tab content, access digest, and the contact endpoint.
//!
//! Loaded from a JSON file when one is given, otherwise built-in defaults are
//! used. Everything is validated once at startup so the UI layer can assume
//! well-formed input.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use url::Url;

use crate::models::access::AccessDigest;

/// Default contact endpoint (a Formspree-style form collector).
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xzdargzv";

/// Digest of the built-in default access code.
const DEFAULT_DIGEST: &str = "a615be49fb7984faad958c1cdaa856305bbdc4c164fd3c709683ce86e7443f30";

/// Raw on-disk shape.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    site: SiteInfo,
    tabs: Vec<TabSpec>,
    default_tab: String,
    access: RawAccess,
    contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAccess {
    digest: String,
    #[serde(default)]
    request_url: Option<Url>,
}

/// Header information shown in the top bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
}

/// One résumé tab: a button in the tab strip plus its panel (`tab-<name>`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabSpec {
    pub name: String,
    pub label: String,
    /// Panel body in Markdown.
    #[serde(default)]
    pub body: String,
    /// Whether the tab sits behind the access gate.
    #[serde(default)]
    pub gated: bool,
}

impl TabSpec {
    /// Panel identifier following the `tab-<name>` convention.
    pub fn panel_id(&self) -> String {
        format!("tab-{}", self.name)
    }
}

/// Validated access-gate settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub digest: AccessDigest,
    /// Where visitors can ask for a code (often a `mailto:` link).
    pub request_url: Option<Url>,
}

/// Contact form target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    pub endpoint: Url,
}

/// Validated site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub tabs: Vec<TabSpec>,
    pub default_tab: String,
    pub access: AccessConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Invalid site config: {:?}", path))
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(raw).context("Failed to parse site config")?;
        let access = AccessConfig {
            digest: AccessDigest::from_hex(&raw.access.digest)?,
            request_url: raw.access.request_url,
        };
        let config = Self {
            site: raw.site,
            tabs: raw.tabs,
            default_tab: raw.default_tab,
            access,
            contact: raw.contact,
        };
        config.validate()?;
        Ok(config)
    }

    /// The tab hidden behind the access gate, if any.
    pub fn gated_tab(&self) -> Option<&TabSpec> {
        self.tabs.iter().find(|t| t.gated)
    }

    pub fn tab(&self, name: &str) -> Option<&TabSpec> {
        self.tabs.iter().find(|t| t.name == name)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.tabs.is_empty(), "at least one tab is required");

        let mut seen = BTreeSet::new();
        for tab in &self.tabs {
            ensure!(!tab.name.trim().is_empty(), "tab names must not be empty");
            ensure!(
                !tab.name.contains(char::is_whitespace),
                "tab name '{}' must not contain whitespace",
                tab.name
            );
            if !seen.insert(tab.name.as_str()) {
                bail!("duplicate tab name '{}'", tab.name);
            }
        }

        let gated = self.tabs.iter().filter(|t| t.gated).count();
        ensure!(gated <= 1, "only one tab may be gated, found {gated}");

        match self.tab(&self.default_tab) {
            None => bail!("default tab '{}' does not exist", self.default_tab),
            Some(tab) if tab.gated => {
                bail!("default tab '{}' must not be gated", self.default_tab)
            }
            Some(_) => Ok(()),
        }
    }
}

impl SiteConfig {
    /// Built-in demo content used when no config file is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint constant fails to parse.
    pub fn builtin() -> Result<Self> {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).context("Invalid default contact endpoint")?;
        Ok(Self {
            site: SiteInfo {
                title: "Folio".into(),
                owner: "Your Name".into(),
                tagline: "Engineer, writer, occasional tinkerer.".into(),
            },
            tabs: vec![
                TabSpec {
                    name: "resume".into(),
                    label: "Résumé".into(),
                    body: "## Experience\n\nShipping reliable software for small teams.\n\n\
                           - Systems programming in Rust\n- Desktop and web front ends\n"
                        .into(),
                    gated: false,
                },
                TabSpec {
                    name: "projects".into(),
                    label: "Projects".into(),
                    body: "## Projects\n\nA selection of things built along the way.\n".into(),
                    gated: false,
                },
                TabSpec {
                    name: "detailed".into(),
                    label: "Detailed".into(),
                    body: "## Detailed résumé\n\nReferences and full employment history.\n".into(),
                    gated: true,
                },
            ],
            default_tab: "resume".into(),
            access: AccessConfig {
                digest: AccessDigest::from_trusted(DEFAULT_DIGEST),
                request_url: None,
            },
            contact: ContactConfig { endpoint },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_json(digest: &str, default_tab: &str) -> String {
        serde_json::json!({
            "site": { "title": "T", "owner": "O" },
            "tabs": [
                { "name": "resume", "label": "Résumé", "body": "hello" },
                { "name": "detailed", "label": "Detailed", "gated": true }
            ],
            "default_tab": default_tab,
            "access": { "digest": digest, "request_url": "mailto:me@example.org" },
            "contact": { "endpoint": "https://forms.example.org/f/abc" }
        })
        .to_string()
    }

    #[test]
    fn builtin_config_is_valid() {
        let config = SiteConfig::builtin().unwrap();
        assert_eq!(config.contact.endpoint.as_str(), DEFAULT_ENDPOINT);
        config.validate().unwrap();
        assert_eq!(config.gated_tab().map(|t| t.name.as_str()), Some("detailed"));
        assert!(config.access.digest.matches(&crate::utils::hash_str("folio2025")));
    }

    #[test]
    fn loads_valid_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        let digest = crate::utils::hash_str("open sesame");
        fs::write(&path, sample_json(&digest, "resume")).unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.tab("resume").unwrap().panel_id(), "tab-resume");
        assert_eq!(
            config.access.request_url.as_ref().map(Url::scheme),
            Some("mailto")
        );
        assert_eq!(config.contact.endpoint.path(), "/f/abc");
    }

    #[test]
    fn demo_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/site.json");
        let config = SiteConfig::load(&path).unwrap();
        assert!(config.access.digest.matches(&crate::utils::hash_str("open sesame")));
    }

    #[test]
    fn rejects_gated_default_tab() {
        let digest = crate::utils::hash_str("open sesame");
        let err = SiteConfig::from_json(&sample_json(&digest, "detailed")).unwrap_err();
        assert!(err.to_string().contains("must not be gated"));
    }

    #[test]
    fn rejects_unknown_default_tab() {
        let digest = crate::utils::hash_str("open sesame");
        assert!(SiteConfig::from_json(&sample_json(&digest, "missing")).is_err());
    }

    #[test]
    fn rejects_uppercase_digest() {
        let digest = crate::utils::hash_str("open sesame").to_ascii_uppercase();
        assert!(SiteConfig::from_json(&sample_json(&digest, "resume")).is_err());
    }

    #[test]
    fn rejects_duplicate_tabs() {
        let mut config = SiteConfig::builtin().unwrap();
        config.tabs.push(config.tabs[0].clone());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate tab name"));
    }

    #[test]
    fn rejects_two_gated_tabs() {
        let mut config = SiteConfig::builtin().unwrap();
        config.tabs[1].gated = true;
        assert!(config.validate().is_err());
    }
}
