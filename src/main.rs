#![deny(unused_imports)]

use rationals::{RunOutput, run};
use rationals_clap::parse_cli_args;

fn main() {
    let clap_result = parse_cli_args();

    let output = if clap_result.has_error() {
        let mut output = RunOutput::new();

        for error in clap_result.errors.iter() {
            output.push_error(error.render_error());
        }

        output
    }

    else {
        run(clap_result.result)
    };

    println!("{}", output.concat_results());

    if output.has_error() {
        std::process::exit(1);
    }
}
