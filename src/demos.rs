//! Ready-made plugins showing how the pieces fit together.
//!
//! These are also what `xbarmenu demo <name>` prints.

use std::env;

use clap::ValueEnum;

use crate::action::{Action, ShellAction};
use crate::element::{Element, MenuItem, ModifierKey};
use crate::icon::{STATUS_AVAILABLE, STATUS_NONE, STATUS_PARTIALLY, STATUS_UNAVAILABLE};
use crate::plugin::Plugin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    HelloWorld,
    RunShell,
    AlternateOptions,
    Submenus,
    ImagesAndLinks,
}

impl Demo {
    /// Builds the demo, pulling user-specific bits from the environment.
    pub fn build(self) -> Plugin {
        match self {
            Demo::HelloWorld => {
                let greeting = env::var("GREETING").unwrap_or_default();
                let user = env::var("USER")
                    .or_else(|_| env::var("USERNAME"))
                    .unwrap_or_default();
                hello_world(&greeting, &user)
            }
            Demo::RunShell => {
                let home = env::var("HOME").unwrap_or_else(|_| "/".to_string());
                run_shell(&home)
            }
            Demo::AlternateOptions => alternate_options(),
            Demo::Submenus => submenus(),
            Demo::ImagesAndLinks => images_and_links(),
        }
    }
}

pub fn hello_world(greeting: &str, user: &str) -> Plugin {
    Plugin::new().with_text("👋🌎").with_elements([
        MenuItem::new("Greet")
            .with_shell("say", [greeting, user])
            .with_shortcut("G", &[ModifierKey::Command])
            .into(),
        Element::Separator,
        MenuItem::new("Statuses")
            .with_sub_menu([
                MenuItem::new("Available").with_icon(STATUS_AVAILABLE),
                MenuItem::new("None").with_icon(STATUS_NONE),
                MenuItem::new("Partially").with_icon(STATUS_PARTIALLY),
                MenuItem::new("Unavailable").with_icon(STATUS_UNAVAILABLE),
            ])
            .into(),
    ])
}

/// Shell actions with shortcuts and an option-key alternate.
pub fn run_shell(home: &str) -> Plugin {
    Plugin::new().with_text("🐌").with_elements([
        MenuItem::new("🗣️ Say Hello")
            .with_shell("say", ["hello", "world"])
            .with_alt(MenuItem::new("🗣️ Say Goodbye").with_shell("say", ["goodbye", "world"]))
            .into(),
        Element::Separator,
        MenuItem::new("🔋 Battery Preferences")
            .with_shell(
                "open",
                [
                    "-b",
                    "com.apple.systempreferences",
                    "/System/Library/PreferencePanes/Battery.prefPane",
                ],
            )
            .with_shortcut("b", &[ModifierKey::Shift])
            .into(),
        Element::Separator,
        MenuItem::new("🏠 Home Directory")
            .with_sub_menu([
                // No shell expansion happens in the host, so the path is resolved here.
                MenuItem::new("View Tree")
                    .with_action(ShellAction::new("tree", ["-d", "-L", "1", home]).with_terminal()),
                MenuItem::new("Copy Path")
                    .with_action(Action::copy(home))
                    .with_shortcut("c", &[ModifierKey::Command]),
            ])
            .into(),
        Element::Separator,
        MenuItem::new("ℹ️ Send Notification")
            .with_shell(
                "osascript",
                [
                    "-e",
                    r#"display notification "This is a notification" with title "Example" subtitle "Thanks for clicking!""#,
                ],
            )
            .with_shortcut("n", &[ModifierKey::Control, ModifierKey::Option])
            .into(),
    ])
}

pub fn alternate_options() -> Plugin {
    Plugin::new().with_text("Alternate Options").with_elements([
        MenuItem::new("Hello").with_alt(MenuItem::new("Option key is pressed")),
        MenuItem::new("Another"),
    ])
}

pub fn submenus() -> Plugin {
    Plugin::new().with_text("Submenu").with_elements([
        MenuItem::new("Places")
            .with_sub_menu([
                MenuItem::new("London"),
                MenuItem::new("Paris"),
                MenuItem::new("Tokyo"),
            ])
            .into(),
        Element::Separator,
        MenuItem::new("Fruit")
            .with_sub_menu([
                MenuItem::new("Apple"),
                MenuItem::new("Orange"),
                MenuItem::new("Melon")
                    .with_sub_menu([MenuItem::new("Watermelon"), MenuItem::new("Honeydew")]),
            ])
            .into(),
    ])
}

/// A template title icon plus a link. The built-in available-status icon and the
/// xbar plugin repository stand in for a third-party icon and its attribution link.
pub fn images_and_links() -> Plugin {
    Plugin::new().with_icon(STATUS_AVAILABLE).with_elements([
        MenuItem::new("Status icons are embedded PNGs"),
        MenuItem::new("View Source").with_href("https://github.com/matryer/xbar-plugins"),
    ])
}
