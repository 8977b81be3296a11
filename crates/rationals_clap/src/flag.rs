#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Flag {
    Help,
    Version,
    Verbose,
}

pub const FLAGS: [Flag; 3] = [
    Flag::Help,
    Flag::Version,
    Flag::Verbose,
];

impl Flag {
    pub fn takes_arg(&self) -> bool {
        match self {
            Flag::Verbose => true,
            Flag::Help
            | Flag::Version => false,
        }
    }

    pub fn short(&self) -> Option<&'static str> {
        match self {
            Flag::Help => Some("-h"),
            Flag::Version => Some("-v"),
            Flag::Verbose => None,
        }
    }

    pub fn long(&self) -> &'static str {
        match self {
            Flag::Help => "--help",
            Flag::Version => "--version",
            Flag::Verbose => "--verbose",
        }
    }

    pub fn from_token(token: &str) -> Option<Flag> {
        FLAGS.iter().find(
            |flag| flag.long() == token || flag.short() == Some(token)
        ).copied()
    }

    pub fn render_error(&self) -> String {
        match self.short() {
            Some(short) => format!("{short}, {}", self.long()),
            None => self.long().to_string(),
        }
    }
}

// `-1/2` is a number, not a flag
pub fn looks_like_flag(token: &str) -> bool {
    let bytes = token.as_bytes();

    token.starts_with("--") || (bytes.len() > 1 && bytes[0] == b'-' && bytes[1].is_ascii_alphabetic())
}
