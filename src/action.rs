/// What a menu item does when clicked or when its shortcut is pressed.
///
/// Items without an action show up disabled in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Href(HrefAction),
    Shell(ShellAction),
}

/// Opens a URI on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefAction {
    pub uri: String,
}

/// Runs a command on click.
///
/// Arguments are passed through verbatim; the host does no shell expansion, so
/// things like `$HOME` must be resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellAction {
    pub command: String,
    pub args: Vec<String>,
    pub open_in_terminal: bool,
}

impl ShellAction {
    pub fn new<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
            open_in_terminal: false,
        }
    }

    /// Shows the command's output in a new terminal window.
    pub fn with_terminal(mut self) -> Self {
        self.open_in_terminal = true;
        self
    }
}

impl Action {
    pub fn href(uri: impl Into<String>) -> Self {
        Action::Href(HrefAction { uri: uri.into() })
    }

    pub fn shell<I, S>(command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::Shell(ShellAction::new(command, args))
    }

    /// Copies `text` to the clipboard via `pbcopy`.
    pub fn copy(text: &str) -> Self {
        Action::Shell(ShellAction::new(
            "/bin/bash",
            ["-c".to_string(), format!("echo -n {text} | pbcopy")],
        ))
    }
}

impl From<HrefAction> for Action {
    fn from(action: HrefAction) -> Self {
        Action::Href(action)
    }
}

impl From<ShellAction> for Action {
    fn from(action: ShellAction) -> Self {
        Action::Shell(action)
    }
}
