use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

use crate::document;
use crate::plugin::Plugin;

pub const CONFIG_ENV: &str = "XBARMENU_CONFIG";
pub const LOCAL_CONFIG: &str = "xbarmenu.json";

/// Loads the plugin described by the resolved config file, if there is one.
pub fn load_optional() -> Result<Option<Plugin>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let plugin = document::load(&path).with_context(|| format!("loading {}", path.display()))?;
    Ok(Some(plugin))
}

pub fn resolve_config_path() -> Option<PathBuf> {
    resolve_config_path_from(
        env::var(CONFIG_ENV).ok(),
        Path::new(LOCAL_CONFIG),
        env::var_os("HOME"),
    )
}

fn resolve_config_path_from(
    override_path: Option<String>,
    local: &Path,
    home: Option<OsString>,
) -> Option<PathBuf> {
    if let Some(p) = override_path {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    if local.exists() {
        return Some(local.to_path_buf());
    }

    if let Some(home) = home {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("xbarmenu")
                .join("plugin.json"),
        );
    }

    None
}

/// Creates the config file with a starter menu when it does not exist yet.
pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set {CONFIG_ENV} or ensure HOME is present)"
        ));
    };
    write_template(&path)?;
    Ok(path)
}

fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    let template = serde_json::json!({
        "title": "xbarmenu",
        "items": [
            {
                "title": "Edit menu",
                "shell": { "command": "open", "args": [path.display().to_string()] }
            },
            "---",
            {
                "title": "xbar plugin docs",
                "href": "https://github.com/matryer/xbar-plugins/blob/main/CONTRIBUTING.md"
            }
        ]
    });
    let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote starter menu");
    Ok(())
}
