//! Encoding of the element tree into xbar's line protocol.
//!
//! Every node becomes one line: `<indent><title>| <attr>=<value> ...`, where the
//! indent is `--` repeated once per nesting level. Attribute order is fixed and
//! must match the host's grammar exactly.

use std::fmt::Write as _;
use std::io::Write;

use crate::action::Action;
use crate::element::{Element, MenuItem};
use crate::error::{RenderError, Result};
use crate::icon;

pub const SEPARATOR: &str = "---";
pub const INDENT: &str = "--";
const ALTERNATE_SUFFIX: &str = " alternate=true";

/// Encodes a single node, independent of its position in the tree.
pub fn encode_element(element: &Element) -> Result<String> {
    match element {
        Element::Separator => Ok(SEPARATOR.to_string()),
        Element::Item(item) => encode_item(item),
    }
}

pub fn encode_item(item: &MenuItem) -> Result<String> {
    let mut parts = vec![format!("{}|", item.title)];

    if let Some(shortcut) = item.shortcut.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("key={shortcut}"));
    }
    if item.style.max_length > 0 {
        parts.push(format!("length={}", item.style.max_length));
    }
    if let Some(color) = item.style.color.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("color={color}"));
    }
    if let Some(action) = &item.action {
        parts.push(encode_action(action));
    }
    if let Some(icon) = &item.icon {
        let bytes = icon.load().map_err(|source| RenderError::Icon {
            path: icon.path().map(ToOwned::to_owned).unwrap_or_default(),
            source,
        })?;
        let image_type = if item.style.icon_is_template {
            "templateImage"
        } else {
            "image"
        };
        parts.push(format!("{image_type}={}", icon::encode(&bytes)));
    }
    parts.push(format!("refresh={}", item.refresh));
    parts.push("trim=false".to_string());

    Ok(parts.join(" "))
}

// Quotes are not escaped: the host splits on these exact delimiters, so a `'`
// inside an argument breaks that argument.
fn encode_action(action: &Action) -> String {
    match action {
        Action::Href(href) => format!("href={}", href.uri),
        Action::Shell(shell) => {
            let mut part = format!(
                "terminal={} shell=\"{}\"",
                shell.open_in_terminal, shell.command
            );
            for (i, arg) in shell.args.iter().enumerate() {
                let _ = write!(part, " param{}='{arg}'", i + 1);
            }
            part
        }
    }
}

/// Writes `element` and its subtree, starting at `depth`.
pub fn write_element<W: Write>(w: &mut W, element: &Element, depth: usize) -> Result<()> {
    match element {
        Element::Separator => {
            writeln!(w, "{}{SEPARATOR}", INDENT.repeat(depth))?;
            Ok(())
        }
        Element::Item(item) => write_item(w, item, depth),
    }
}

fn write_item<W: Write>(w: &mut W, item: &MenuItem, depth: usize) -> Result<()> {
    let prefix = INDENT.repeat(depth);
    writeln!(w, "{prefix}{}", encode_item(item)?)?;

    // Children must come before the alt line, otherwise the host attaches them
    // to the alt instead.
    for child in item.children() {
        write_item(w, child, depth + 1)?;
    }
    // The alt is a single line: its own submenu and alt are never emitted.
    if let Some(alt) = item.alt.as_deref() {
        writeln!(w, "{prefix}{}{ALTERNATE_SUFFIX}", encode_item(alt)?)?;
    }
    Ok(())
}
