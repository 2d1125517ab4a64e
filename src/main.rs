#![allow(non_snake_case)]
//! Interactive shell for the equation solver: one prompt for the mode, one
//! for the equation text, then dispatch, print and plot. All work happens
//! synchronously on this thread in direct response to a submission; an error
//! only ends the current request, never the shell.

use RustedEqSolver::Utils::plots::plot_expression;
use RustedEqSolver::solver::dispatcher::{EquationRequest, EquationType, handle};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const PLOT_FILE: &str = "solution_plot.png";

fn prompt(stdin: &mut impl BufRead, message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn main() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    println!("Math Equation Solver");
    println!(
        "Modes: Algebraic Equation | Differentiation | Integration | System of Equations"
    );
    println!("Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(mode_line) = prompt(&mut input, "Equation type: ") else {
            break;
        };
        if mode_line.eq_ignore_ascii_case("quit") || mode_line.eq_ignore_ascii_case("exit") {
            break;
        }
        let eq_type = match EquationType::from_str(&mode_line) {
            Ok(eq_type) => eq_type,
            Err(_) => {
                println!("Invalid selection.\n");
                continue;
            }
        };

        let Some(equation_line) =
            prompt(&mut input, "Enter equation(s), e.g., x + y = 5, x - y = 1: ")
        else {
            break;
        };

        let request = EquationRequest::new(eq_type, &equation_line);
        match handle(&request) {
            Ok(result) => {
                println!("{}", result.display_text);
                if let Some(expr) = result.plot_expression {
                    match plot_expression(&expr, PLOT_FILE) {
                        Ok(()) => println!("Plot saved to {}", PLOT_FILE),
                        // the solve result above stays on screen; only the
                        // plot step failed
                        Err(plot_error) => println!("{}", plot_error),
                    }
                }
            }
            Err(error) => println!("{}", error),
        }
        println!();
    }
}
