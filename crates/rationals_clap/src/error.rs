use crate::dist::edit_distance;
use crate::flag::{Flag, FLAGS};
use colored::Colorize;
use hmath::BigInt;

#[derive(Debug)]
pub struct ClapError {
    kind: ClapErrorKind,

    // extra line below the message, e.g. "Do you mean `--verbose`?"
    message: Option<String>,
}

impl ClapError {
    pub fn invalid_flag(token: &str) -> Self {
        // it catches typos
        let mut closest_flag = "";
        let mut closest_dist = usize::MAX;

        for flag in FLAGS.iter() {
            for candidate in [Some(flag.long()), flag.short()].into_iter().flatten() {
                let dist = edit_distance(token.as_bytes(), candidate.as_bytes());

                if dist < closest_dist {
                    closest_dist = dist;
                    closest_flag = candidate;
                }
            }
        }

        //  --xx -> --vx  (no sense)
        //  --verbos -> --verbose  (makes sense)
        let message = if (token.len() > 4 && closest_dist < 3) || closest_dist < 2 {
            Some(format!("Do you mean `{closest_flag}`?"))
        } else {
            None
        };

        ClapError {
            kind: ClapErrorKind::InvalidFlag(token.to_string()),
            message,
        }
    }

    pub fn no_arg(flag: Flag) -> Self {
        ClapError {
            kind: ClapErrorKind::NoArg(flag),
            message: None,
        }
    }

    pub fn invalid_argument(flag: Flag, argument: &str) -> Self {
        ClapError {
            kind: ClapErrorKind::InvalidArgument(flag, argument.to_string()),
            message: None,
        }
    }

    pub fn same_flag_multiple_times(flag: Flag) -> Self {
        ClapError {
            kind: ClapErrorKind::SameFlagMultipleTimes(flag),
            message: None,
        }
    }

    pub fn incompatible_flags(flag1: Flag, flag2: Flag) -> Self {
        ClapError {
            kind: ClapErrorKind::IncompatibleFlags(flag1, flag2),
            message: None,
        }
    }

    // `start` is inclusive, and `end` is exclusive
    pub fn integer_range_error(start: BigInt, end: BigInt, given: BigInt) -> Self {
        ClapError {
            kind: ClapErrorKind::IntegerRangeError {
                start, end, given,
            },
            message: None,
        }
    }

    pub fn kind(&self) -> &ClapErrorKind {
        &self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn render_error(&self) -> String {
        let help = self.kind.help();

        format!(
            "{}\n{}{}{}",
            "[Error while parsing command line arguments]".red(),
            self.kind.msg(),
            match self.message() {
                Some(m) => format!("\n{m}"),
                None => String::new(),
            },
            if help.is_empty() { String::new() } else { format!("\n{help}") },
        )
    }
}

#[derive(Debug)]
pub enum ClapErrorKind {
    InvalidFlag(String),
    NoArg(Flag),
    InvalidArgument(Flag, String),
    SameFlagMultipleTimes(Flag),
    IncompatibleFlags(Flag, Flag),
    IntegerRangeError {
        start: BigInt,  // inclusive
        end: BigInt,    // exclusive
        given: BigInt,
    },
}

impl ClapErrorKind {
    pub fn msg(&self) -> String {
        match self {
            ClapErrorKind::InvalidFlag(s) => format!("invalid flag: `{s}`"),
            ClapErrorKind::NoArg(flag) => format!("`{}` expects an integer, got nothing", flag.long()),
            ClapErrorKind::InvalidArgument(flag, arg) => format!("`{}` expects an integer, got `{arg}`", flag.long()),
            ClapErrorKind::SameFlagMultipleTimes(flag) => format!("`{}` given more than once", flag.render_error()),
            ClapErrorKind::IncompatibleFlags(flag1, flag2) => format!(
                "`{}` and `{}` are incompatible",
                flag1.render_error(),
                flag2.render_error(),
            ),
            ClapErrorKind::IntegerRangeError { start, end, given } => format!(
                "expected an integer in range {start}..{end}, got {given}"
            ),
        }
    }

    pub fn help(&self) -> String {
        match self {
            ClapErrorKind::InvalidFlag(_) => String::from("Try `rationals --help` to see available options."),
            ClapErrorKind::IncompatibleFlags(Flag::Help, f)
            | ClapErrorKind::IncompatibleFlags(f, Flag::Help) => format!(
                "There's no help message for `{}`",
                f.render_error(),
            ),
            ClapErrorKind::NoArg(_)
            | ClapErrorKind::InvalidArgument(_, _)
            | ClapErrorKind::SameFlagMultipleTimes(_)
            | ClapErrorKind::IncompatibleFlags(_, _)
            | ClapErrorKind::IntegerRangeError { .. } => String::new(),
        }
    }
}
