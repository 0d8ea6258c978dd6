/// Presentation of a menu item's text and icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Truncate the title to this many characters. `0` means unlimited.
    ///
    /// xbar appends a `…` to truncated titles and shows the full text as a tooltip.
    pub max_length: u32,
    /// Title color, e.g. `"red"` or `"#ff0000"`.
    pub color: Option<String>,
    /// Render the icon as a template image (a mask recolored by the host for
    /// light/dark menu bars). Icons in plugin titles should enable this.
    pub icon_is_template: bool,
}

impl Style {
    pub fn template() -> Self {
        Self {
            icon_is_template: true,
            ..Default::default()
        }
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
