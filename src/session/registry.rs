//! Built-in command table.
//!
//! The registry is fixed at startup and read-only afterwards. Declaration
//! order matters: it is the order `help` prints and the order the placeholder
//! animation cycles through.

/// A built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Clear,
    Date,
    Echo,
    Github,
    Resume,
    Download,
}

/// One registry row: primary name, aliases, and the `help` description.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub command: Command,
}

/// Field width the command name is padded to in `help` output.
const HELP_NAME_WIDTH: usize = 10;

const BUILTINS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        aliases: &[],
        description: "List available commands",
        command: Command::Help,
    },
    CommandSpec {
        name: "about",
        aliases: &["whoareyou"],
        description: "Who is Kisetsu?",
        command: Command::About,
    },
    CommandSpec {
        name: "clear",
        aliases: &[],
        description: "Clear the terminal",
        command: Command::Clear,
    },
    CommandSpec {
        name: "date",
        aliases: &[],
        description: "Print the current date and time",
        command: Command::Date,
    },
    CommandSpec {
        name: "echo",
        aliases: &[],
        description: "Print back the arguments",
        command: Command::Echo,
    },
    CommandSpec {
        name: "github",
        aliases: &[],
        description: "Open my GitHub profile",
        command: Command::Github,
    },
    CommandSpec {
        name: "resume",
        aliases: &[],
        description: "Open my resume",
        command: Command::Resume,
    },
    CommandSpec {
        name: "download",
        aliases: &[],
        description: "Download my resume as a text file",
        command: Command::Download,
    },
];

/// Declaration-ordered table of built-in commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn new() -> Self {
        Self
    }

    /// All registry rows in declaration order.
    pub fn specs(&self) -> &'static [CommandSpec] {
        BUILTINS
    }

    /// Resolve a command token. Matching is ASCII-case-insensitive over
    /// primary names and aliases.
    pub fn lookup(&self, token: &str) -> Option<Command> {
        let token = token.to_ascii_lowercase();
        BUILTINS
            .iter()
            .find(|spec| spec.name == token || spec.aliases.contains(&token.as_str()))
            .map(|spec| spec.command)
    }

    /// `help` output: one line per registry entry, declaration order.
    pub fn help_lines(&self) -> Vec<String> {
        BUILTINS
            .iter()
            .map(|spec| format!("{:<width$} - {}", spec.name, spec.description, width = HELP_NAME_WIDTH))
            .collect()
    }
}
