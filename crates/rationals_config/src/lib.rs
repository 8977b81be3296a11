#![deny(unused_imports)]

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

// 0: results only
// 1: `<expression> = <result>`
// 2: also dumps the raw fields of the result
pub const DEFAULT_VERBOSITY: u8 = 1;

#[derive(Clone, Debug)]
pub struct RunOption {
    pub do_not_run_and_do_this: Option<SpecialOutput>,

    // tokens of a single expression, e.g. `["1/2", "+", "1/3"]`
    // if it's empty, the driver runs the demo table
    pub expression: Vec<String>,

    pub verbosity: u8,
}

impl RunOption {
    pub fn help_message() -> Self {
        RunOption::do_this_and_quit(SpecialOutput::HelpMessage)
    }

    pub fn version_info() -> Self {
        RunOption::do_this_and_quit(SpecialOutput::VersionInfo)
    }

    pub fn do_this_and_quit(s: SpecialOutput) -> Self {
        RunOption {
            do_not_run_and_do_this: Some(s),
            ..RunOption::default()
        }
    }

    pub fn evaluate(expression: &[&str]) -> Self {
        RunOption {
            expression: expression.iter().map(|s| s.to_string()).collect(),
            ..RunOption::default()
        }
    }

    pub fn runs_demo(&self) -> bool {
        self.do_not_run_and_do_this.is_none() && self.expression.is_empty()
    }
}

impl Default for RunOption {
    fn default() -> Self {
        RunOption {
            do_not_run_and_do_this: None,
            expression: vec![],
            verbosity: DEFAULT_VERBOSITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialOutput {
    HelpMessage,
    VersionInfo,
}
