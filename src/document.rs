//! Declarative menu definitions.
//!
//! A JSON document describes a whole plugin so that a menu can be changed
//! without recompiling:
//!
//! ```json
//! {
//!   "title": "🐌",
//!   "items": [
//!     { "title": "Say Hello", "shell": { "command": "say", "args": ["hello"] },
//!       "alt": { "title": "Say Goodbye", "shell": { "command": "say", "args": ["bye"] } } },
//!     "---",
//!     { "title": "Places", "submenu": [ { "title": "London" }, { "title": "Paris" } ] }
//!   ]
//! }
//! ```
//!
//! The string `"---"` stands for a separator in the top-level item list.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::action::{Action, ShellAction};
use crate::element::{shortcut, Element, MenuItem, ModifierKey};
use crate::error::DocumentError;
use crate::icon::{self, Icon};
use crate::plugin::Plugin;
use crate::render::SEPARATOR;
use crate::style::Style;

type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Option<IconSpec>,
    #[serde(default = "default_true")]
    pub template_icon: bool,
    #[serde(default)]
    pub items: Vec<EntrySpec>,
}

/// A string (separator token) or an item object.
#[derive(Debug, Clone)]
pub enum EntrySpec {
    Separator(String),
    Item(Box<ItemSpec>),
}

impl<'de> Deserialize<'de> for EntrySpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = EntrySpec;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{SEPARATOR}\" or a menu item object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<EntrySpec, E> {
        Ok(EntrySpec::Separator(v.to_string()))
    }

    // Item errors (unknown fields, wrong types) surface as-is.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<EntrySpec, A::Error> {
        ItemSpec::deserialize(MapAccessDeserializer::new(map))
            .map(|item| EntrySpec::Item(Box::new(item)))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSpec {
    pub title: String,
    #[serde(default)]
    pub shortcut: Option<ShortcutSpec>,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub template_icon: bool,
    #[serde(default)]
    pub icon: Option<IconSpec>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub shell: Option<ShellSpec>,
    #[serde(default)]
    pub refresh: bool,
    #[serde(default)]
    pub alt: Option<Box<ItemSpec>>,
    #[serde(default)]
    pub submenu: Vec<EntrySpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShortcutSpec {
    /// Already joined, e.g. `"CmdOrCtrl+c"`.
    Raw(String),
    Combo {
        key: String,
        #[serde(default)]
        modifiers: Vec<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSpec {
    /// Relative paths are resolved against the document's directory.
    Path(PathBuf),
    Base64(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellSpec {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub terminal: bool,
}

fn default_true() -> bool {
    true
}

impl PluginDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the plugin. `base_dir` anchors relative icon paths.
    pub fn into_plugin(self, base_dir: Option<&Path>) -> Result<Plugin> {
        let mut plugin = Plugin::new().with_text(self.title);
        plugin.title.style.icon_is_template = self.template_icon;
        if let Some(spec) = self.icon {
            plugin = plugin.with_icon(build_icon(spec, base_dir)?);
        }
        for entry in self.items {
            let element = match entry {
                EntrySpec::Separator(token) => {
                    check_separator(&token)?;
                    Element::Separator
                }
                EntrySpec::Item(spec) => Element::Item(build_item(*spec, base_dir)?),
            };
            plugin.elements.push(element);
        }
        Ok(plugin)
    }
}

/// Reads and builds the plugin described by the document at `path`.
pub fn load(path: &Path) -> Result<Plugin> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = PluginDocument::from_json(&text)?;
    tracing::debug!(path = %path.display(), items = doc.items.len(), "loaded menu document");
    doc.into_plugin(path.parent())
}

fn check_separator(token: &str) -> Result<()> {
    if token == SEPARATOR {
        Ok(())
    } else {
        Err(DocumentError::Invalid(format!(
            "unexpected string entry '{token}' (only \"{SEPARATOR}\" is allowed)"
        )))
    }
}

fn build_item(spec: ItemSpec, base_dir: Option<&Path>) -> Result<MenuItem> {
    let mut item = MenuItem::new(spec.title).with_style(Style {
        max_length: spec.length,
        color: spec.color,
        icon_is_template: spec.template_icon,
    });
    item.refresh = spec.refresh;

    if let Some(shortcut) = spec.shortcut {
        item.shortcut = Some(build_shortcut(shortcut)?);
    }

    item.action = match (spec.href, spec.shell) {
        (Some(_), Some(_)) => {
            return Err(DocumentError::Invalid(format!(
                "item '{}' has both href and shell",
                item.title
            )))
        }
        (Some(uri), None) => Some(Action::href(uri)),
        (None, Some(shell)) => {
            let mut action = ShellAction::new(shell.command, shell.args);
            action.open_in_terminal = shell.terminal;
            Some(action.into())
        }
        (None, None) => None,
    };

    if let Some(spec) = spec.icon {
        item.icon = Some(build_icon(spec, base_dir)?);
    }
    if let Some(alt) = spec.alt {
        item.alt = Some(Box::new(build_item(*alt, base_dir)?));
    }
    for entry in spec.submenu {
        match entry {
            EntrySpec::Separator(_) => {
                return Err(DocumentError::Invalid(format!(
                    "submenu of '{}' may only contain items",
                    item.title
                )))
            }
            EntrySpec::Item(child) => item.sub_menu.push(build_item(*child, base_dir)?),
        }
    }
    Ok(item)
}

fn build_shortcut(spec: ShortcutSpec) -> Result<String> {
    match spec {
        ShortcutSpec::Raw(raw) => Ok(raw),
        ShortcutSpec::Combo { key, modifiers } => {
            let modifiers = modifiers
                .iter()
                .map(|name| {
                    ModifierKey::parse(name).ok_or_else(|| {
                        DocumentError::Invalid(format!("unknown modifier key '{name}'"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(shortcut(&key, &modifiers))
        }
    }
}

fn build_icon(spec: IconSpec, base_dir: Option<&Path>) -> Result<Icon> {
    match spec {
        IconSpec::Path(path) => {
            let path = match base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            };
            Ok(Icon::from_file(path))
        }
        IconSpec::Base64(text) => icon::decode(text.trim())
            .map(Icon::from_bytes)
            .map_err(|e| DocumentError::Invalid(format!("invalid base64 icon: {e}"))),
    }
}
