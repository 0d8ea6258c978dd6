use crate::action::{Action, ShellAction};
use crate::icon::Icon;
use crate::style::Style;

/// A node in the dropdown: either a separator or a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Visually splits related groups of items.
    Separator,
    Item(MenuItem),
}

impl Element {
    pub fn children(&self) -> &[MenuItem] {
        match self {
            Element::Separator => &[],
            Element::Item(item) => item.children(),
        }
    }
}

impl From<MenuItem> for Element {
    fn from(item: MenuItem) -> Self {
        Element::Item(item)
    }
}

/// A modifier that can be combined with a key to form a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    Command,
    Option,
    Control,
    Shift,
}

impl ModifierKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ModifierKey::Command => "CmdOrCtrl",
            ModifierKey::Option => "OptionOrAlt",
            ModifierKey::Control => "ctrl",
            ModifierKey::Shift => "shift",
        }
    }

    /// Accepts both the wire token (`CmdOrCtrl`) and a short name (`cmd`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cmdorctrl" | "cmd" | "command" => Some(ModifierKey::Command),
            "optionoralt" | "option" | "alt" => Some(ModifierKey::Option),
            "ctrl" | "control" => Some(ModifierKey::Control),
            "shift" => Some(ModifierKey::Shift),
            _ => None,
        }
    }
}

/// Joins modifiers and a final key with `+`, keeping the caller's order.
pub fn shortcut(key: &str, modifiers: &[ModifierKey]) -> String {
    modifiers
        .iter()
        .map(|m| m.as_str())
        .chain(std::iter::once(key))
        .collect::<Vec<_>>()
        .join("+")
}

/// A clickable (or inert) line in the menu, optionally with a submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItem {
    /// May be empty when an icon is set.
    pub title: String,
    pub style: Style,
    pub icon: Option<Icon>,
    /// `+`-joined combination such as `shift+k` or `CmdOrCtrl+c`.
    pub shortcut: Option<String>,
    pub action: Option<Action>,
    /// Refresh the plugin after the item is clicked (after its command finishes).
    pub refresh: bool,
    /// Replaces this item while the Option key is held.
    pub alt: Option<Box<MenuItem>>,
    pub sub_menu: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[MenuItem] {
        &self.sub_menu
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_href(self, uri: impl Into<String>) -> Self {
        self.with_action(Action::href(uri))
    }

    pub fn with_shell<I, S>(self, command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_action(ShellAction::new(command, args))
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_alt(mut self, item: MenuItem) -> Self {
        self.alt = Some(Box::new(item));
        self
    }

    pub fn with_shortcut(mut self, key: &str, modifiers: &[ModifierKey]) -> Self {
        self.shortcut = Some(shortcut(key, modifiers));
        self
    }

    /// Appends to the existing submenu.
    pub fn with_sub_menu(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.sub_menu.extend(items);
        self
    }
}
