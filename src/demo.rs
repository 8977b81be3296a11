use crate::eval::{EvalError, Value, eval_expression};
use crate::output::RunOutput;
use colored::Colorize;
use log::info;
use rationals_number::{DivBy, Rational};

pub enum DemoCase {
    /// (expression, expected result), fed to the evaluator token by token
    Expr(&'static str, &'static str),

    /// (label, value, expected result), for values that are built from
    /// machine integers instead of parsed
    Native(&'static str, fn() -> Result<Value, EvalError>, &'static str),
}

impl DemoCase {
    fn label(&self) -> &'static str {
        match self {
            DemoCase::Expr(expression, _) => expression,
            DemoCase::Native(label, _, _) => label,
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            DemoCase::Expr(_, expected) => expected,
            DemoCase::Native(_, _, expected) => expected,
        }
    }

    fn eval(&self) -> Result<Value, EvalError> {
        match self {
            DemoCase::Expr(expression, _) => {
                let tokens = expression.split(' ').map(|s| s.to_string()).collect::<Vec<_>>();

                eval_expression(&tokens)
            },
            DemoCase::Native(_, f, _) => f(),
        }
    }
}

fn large_i64_quotient() -> Result<Value, EvalError> {
    let lhs = 2_000_000_000i64.div_by(4_000_000_000)?;
    let rhs = 1i32.div_by(2)?;

    Ok(Value::Bool(lhs.eq_rat(&rhs)))
}

fn i64_min_negated() -> Result<Value, EvalError> {
    Ok(Value::Number(i64::MIN.div_by(-1)?))
}

fn big_int_quotient() -> Result<Value, EvalError> {
    let lhs = Rational::from_string(
        "912016490186296920119201192141970416029/1824032980372593840238402384283940832058",
    )?;

    Ok(Value::Bool(lhs.eq_rat(&1i32.div_by(2)?)))
}

pub const DEMO_CASES: [DemoCase; 13] = [
    DemoCase::Expr("1/2 + 1/3", "5/6"),
    DemoCase::Expr("1/2 - 1/3", "1/6"),
    DemoCase::Expr("1/2 * 1/3", "1/6"),
    DemoCase::Expr("1/2 / 1/3", "3/2"),
    DemoCase::Expr("neg 1/2", "-1/2"),
    DemoCase::Expr("2/1", "2"),
    DemoCase::Expr("-2/4", "-1/2"),
    DemoCase::Expr("117/1098", "13/122"),
    DemoCase::Expr("1/2 < 2/3", "true"),
    DemoCase::Expr("1/2 in 1/3..2/3", "true"),
    DemoCase::Native("2000000000i64.div_by(4000000000) == 1i32.div_by(2)", large_i64_quotient, "true"),
    DemoCase::Native("i64::MIN.div_by(-1)", i64_min_negated, "9223372036854775808"),
    DemoCase::Native(
        "912016490186296920119201192141970416029/1824032980372593840238402384283940832058 == 1i32.div_by(2)",
        big_int_quotient,
        "true",
    ),
];

/// Returns the number of failed cases.
pub fn run_demo(verbosity: u8, output: &mut RunOutput) -> usize {
    info!("rationals::run_demo()");
    let mut failures = 0;

    for case in DEMO_CASES.iter() {
        let (label, expected) = (case.label(), case.expected());

        match case.eval() {
            Ok(value) if value.to_string() == expected => {
                if verbosity > 0 {
                    output.push_stdout(format!("{} {label} = {value}", "[ok]".green()));
                }
            },
            Ok(value) => {
                failures += 1;
                output.push_error(format!(
                    "{} {label} = {value}, expected {expected}",
                    "[FAILED]".red(),
                ));
            },
            Err(e) => {
                failures += 1;
                output.push_error(e.render_error());
            },
        }
    }

    output.push_stdout(format!("{}/{} passed", DEMO_CASES.len() - failures, DEMO_CASES.len()));
    failures
}
