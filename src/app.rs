use crate::api::fixtures;
use crate::api::models::ContactFilter;
use crate::error::{Error, Result};
use crate::storage::ContactStore;
use crate::ui;
use directories::BaseDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CAMPAIGN_CONNECT_CONFIG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Campaigner,
    Candidate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub role: Role,
    pub filter: ContactFilter,
    pub latest_contacts: usize,
    pub message_id: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            role: Role::default(),
            filter: ContactFilter::default(),
            latest_contacts: 3,
            message_id: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // TOML is the primary format. A JSON state file from older installs is
    // read once and rewritten as TOML.
    fn toml_path() -> Option<PathBuf> {
        Self::resolve_toml_path(std::env::var_os(CONFIG_ENV))
    }

    /// An explicit override path wins over the platform config dir.
    fn resolve_toml_path(override_path: Option<OsString>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(PathBuf::from(path));
        }
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("campaign-connect.toml"))
    }

    fn legacy_json_path() -> Option<PathBuf> {
        let proj = directories::ProjectDirs::from("com", "example", "CampaignConnect")?;
        Some(proj.config_dir().join("state.json"))
    }

    pub fn load() -> Self {
        Self::load_with(Self::toml_path(), Self::legacy_json_path())
    }

    /// Reads `toml` if it exists. Only when it does not is the `legacy` JSON
    /// file consulted and, on success, rewritten to `toml`.
    pub fn load_with(toml: Option<PathBuf>, legacy: Option<PathBuf>) -> Self {
        if let Some(path) = &toml {
            if path.exists() {
                return Self::load_from(path).unwrap_or_else(|e| {
                    warn!("ignoring config at {}: {e}", path.display());
                    Self::new()
                });
            }
        }

        if let Some(legacy) = legacy {
            if let Ok(bytes) = fs::read(&legacy) {
                match serde_json::from_slice::<AppState>(&bytes) {
                    Ok(state) => {
                        let migrated = match &toml {
                            Some(path) => state.save_to(path),
                            None => Err(Error::NoConfigDir),
                        };
                        if let Err(e) = migrated {
                            warn!("could not migrate legacy config: {e}");
                        }
                        return state;
                    }
                    Err(e) => warn!("ignoring legacy config at {}: {e}", legacy.display()),
                }
            }
        }

        Self::new()
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::toml_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Renders every screen available to the configured role.
pub fn build_ui(state: &AppState, store: &ContactStore) -> Result<String> {
    let mut screens = Vec::new();
    match state.role {
        Role::Campaigner => {
            screens.push(ui::dashboard::campaigner(store.contacts(), state.latest_contacts));
            screens.push(ui::contact_list::render(store.contacts(), &state.filter));
            screens.push(ui::message_view::render_all(
                store.contacts(),
                state.message_id.as_deref(),
            )?);
            screens.push(ui::polling_view::render(store.contacts()));
        }
        Role::Candidate => {
            screens.push(ui::dashboard::candidate(store.contacts(), store.networks()));
            screens.push(ui::network_view::render(&fixtures::USER, store));
            screens.push(ui::dashboard::promotions(&fixtures::PROMOTION_REQUESTS));
        }
    }
    Ok(screens.join("\n"))
}
