use std::io::{self, Write};

use crate::element::{Element, MenuItem};
use crate::error::Result;
use crate::icon::Icon;
use crate::render::{self, SEPARATOR};
use crate::style::Style;

/// An xbar plugin: the menu-bar label plus the dropdown contents.
///
/// The host runs the plugin's executable periodically and turns each line it
/// prints into a menu entry. See
/// <https://github.com/matryer/xbar-plugins/blob/main/CONTRIBUTING.md>.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Rendered on its own; its submenu and alt are ignored.
    pub title: MenuItem,
    pub elements: Vec<Element>,
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin {
    pub fn new() -> Self {
        Self {
            title: MenuItem::new("").with_style(Style::template()),
            elements: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.title.title = text.into();
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.title.icon = Some(icon);
        self
    }

    pub fn with_elements<I, E>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.elements.extend(elements.into_iter().map(Into::into));
        self
    }

    /// Writes the full plugin output. Stops at the first failure; lines already
    /// written stay written.
    pub fn render<W: Write>(&self, w: &mut W) -> Result<()> {
        tracing::debug!(
            title = %self.title.title,
            elements = self.elements.len(),
            "rendering plugin"
        );
        writeln!(w, "{}", render::encode_item(&self.title)?)?;
        if !self.elements.is_empty() {
            writeln!(w, "{SEPARATOR}")?;
            for element in &self.elements {
                render::write_element(w, element, 0)?;
            }
        }
        Ok(())
    }

    /// Renders to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.render(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn empty_plugin_renders_only_the_title() {
        let mut out = Vec::new();
        Plugin::new().with_text("Solo").render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Solo| refresh=false trim=false\n");
    }

    #[test]
    fn title_icon_is_a_template_by_default() {
        let mut out = Vec::new();
        Plugin::new()
            .with_icon(Icon::from_bytes(b"f".to_vec()))
            .render(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "| templateImage=Zg== refresh=false trim=false\n"
        );
    }

    #[test]
    fn title_submenu_is_not_rendered() {
        let mut plugin = Plugin::new().with_text("T");
        plugin.title = plugin
            .title
            .with_sub_menu([MenuItem::new("hidden")])
            .with_alt(MenuItem::new("also hidden"));
        let mut out = Vec::new();
        plugin.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "T| refresh=false trim=false\n");
    }

    #[test]
    fn write_failure_propagates() {
        let plugin = Plugin::new().with_elements([MenuItem::new("a")]);
        let err = plugin.render(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, crate::RenderError::Write(_)));
    }
}
