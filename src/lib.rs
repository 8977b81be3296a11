#![deny(unused_imports)]

use log::info;
use rationals_clap::help_message;
use rationals_config::{RunOption, SpecialOutput};

mod demo;
mod eval;
mod output;

#[cfg(test)]
mod tests;

pub use demo::{DEMO_CASES, DemoCase, run_demo};
pub use eval::{EvalError, EvalErrorKind, Expr, InfixOp, Value, eval_expression};
pub use output::RunOutput;

pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 0;
pub const PATCH_VERSION: u8 = 0;

pub fn run(option: RunOption) -> RunOutput {
    info!("rationals::run() with option: {option:?}");
    let mut output = RunOutput::new();

    match option.do_not_run_and_do_this {
        Some(SpecialOutput::HelpMessage) => {
            output.push_stdout(help_message());
        },
        Some(SpecialOutput::VersionInfo) => {
            output.push_stdout(format!("rationals {MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}"));
        },
        None if option.expression.is_empty() => {
            run_demo(option.verbosity, &mut output);
        },
        None => match eval_expression(&option.expression) {
            Ok(value) => {
                output.push_stdout(render_result(&option.expression, &value, option.verbosity));
            },
            Err(e) => {
                output.push_error(e.render_error());
            },
        },
    }

    output
}

fn render_result(expression: &[String], value: &Value, verbosity: u8) -> String {
    match (verbosity, value) {
        (0, _) => value.to_string(),
        (1, _)
        | (_, Value::Bool(_)) => format!("{} = {value}", expression.join(" ")),
        (_, Value::Number(n)) => format!("{} = {value}  (raw: {n:?})", expression.join(" ")),
    }
}
