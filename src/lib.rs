//! Build xbar plugins in Rust.
//!
//! A [`Plugin`] is a title plus a tree of [`Element`]s. Rendering it prints the
//! line protocol that xbar (<https://github.com/matryer/xbar>) polls from a
//! plugin's standard output and turns into a menu-bar dropdown.
//!
//! ```no_run
//! use xbarmenu::{Element, MenuItem, ModifierKey, Plugin};
//!
//! fn main() -> xbarmenu::Result<()> {
//!     Plugin::new()
//!         .with_text("🐌")
//!         .with_elements([
//!             MenuItem::new("Say Hello")
//!                 .with_shell("say", ["hello"])
//!                 .with_shortcut("h", &[ModifierKey::Command])
//!                 .into(),
//!             Element::Separator,
//!             MenuItem::new("Docs").with_href("https://github.com/matryer/xbar").into(),
//!         ])
//!         .run()
//! }
//! ```

pub mod action;
pub mod config;
pub mod demos;
pub mod document;
pub mod element;
pub mod error;
pub mod icon;
pub mod logging;
pub mod plugin;
pub mod render;
pub mod style;

pub use action::{Action, HrefAction, ShellAction};
pub use element::{Element, MenuItem, ModifierKey};
pub use error::{DocumentError, RenderError, Result};
pub use icon::Icon;
pub use plugin::Plugin;
pub use style::Style;
