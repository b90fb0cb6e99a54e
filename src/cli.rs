use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use make_ten::solver::constants::{DEFAULT_TARGET, HIGHEST_CARRIAGE_NUMBER};
use make_ten::solver::score;
use make_ten::utils::digits_to_string;
use make_ten::{Digits, MakeTenSolver, SolverConfig, parse_carriage_number};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Make Ten - Solve the Sydney train carriage game
#[derive(Parser, Debug)]
#[command(name = "make-ten")]
#[command(about = "Combine the four digits of a carriage number into an expression equal to 10")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the most elegant expression for a carriage number
    Solve {
        /// Four-digit carriage number
        number: String,

        /// List every solution with its score instead of only the best
        #[arg(short, long)]
        all: bool,

        /// Value to make instead of 10
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: f64,
    },
    /// Check whether an expression is a valid answer for a carriage number
    Check {
        /// Four-digit carriage number
        number: String,

        /// Proposed expression, e.g. "(9 + 9 * 9) / 9"
        expression: String,

        /// Value to make instead of 10
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: f64,
    },
    /// Solve every carriage number from 0000 to 9999 and list the unsolvable ones
    Survey {
        /// Value to make instead of 10
        #[arg(short, long, default_value_t = DEFAULT_TARGET)]
        target: f64,
    },
}

/// A validated unit of work
pub enum Task {
    Solve { digits: Digits, all: bool },
    Check { digits: Digits, expression: String },
    Survey,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub task: Task,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let (task, target) = match args.command {
        Command::Solve {
            number,
            all,
            target,
        } => {
            let digits = parse_carriage_number(&number).context("Invalid carriage number")?;
            (Task::Solve { digits, all }, target)
        }
        Command::Check {
            number,
            expression,
            target,
        } => {
            let digits = parse_carriage_number(&number).context("Invalid carriage number")?;
            (Task::Check { digits, expression }, target)
        }
        Command::Survey { target } => (Task::Survey, target),
    };

    Ok(CliConfig {
        task,
        solver: SolverConfig { target },
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn run_solve(solver: &MakeTenSolver, digits: &Digits, all: bool) {
    info!(
        "Searching for expressions using digits '{}' that equal {}",
        digits_to_string(digits),
        solver.config().target
    );

    if all {
        let ranked = solver.ranked_solutions(digits);
        if ranked.is_empty() {
            warn!("No matching expression found");
            println!("No solution found.");
        }
        for solution in &ranked {
            println!("{:>4}  {}", score(solution), solution);
        }
        return;
    }

    match solver.find_best(digits) {
        Some(solution) => println!("{}", solution),
        None => {
            warn!("No matching expression found");
            println!("No solution found.");
        }
    }
}

fn run_check(solver: &MakeTenSolver, digits: &Digits, expression: &str) -> Result<()> {
    let report = solver
        .check(digits, expression)
        .context("Could not read expression")?;

    println!("{} = {}", report.expression, report.value);
    if !report.uses_digits {
        println!(
            "Does not use exactly the digits {} once each.",
            digits_to_string(digits)
        );
    }
    if !report.reaches_target {
        println!("Does not make {}.", solver.config().target);
    }
    if report.is_valid() {
        println!("Valid solution!");
    }
    Ok(())
}

fn run_survey(solver: &MakeTenSolver) -> Result<()> {
    let unsolved = solver
        .unsolved(0..=HIGHEST_CARRIAGE_NUMBER)
        .context("Survey failed")?;
    let total = f64::from(HIGHEST_CARRIAGE_NUMBER + 1);
    let share = unsolved.len() as f64 / total * 100.0;

    println!(
        "Unsolved: {:.2}% ({} of {})",
        share,
        unsolved.len(),
        HIGHEST_CARRIAGE_NUMBER + 1
    );
    for digits in &unsolved {
        println!("{}", digits_to_string(digits));
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = MakeTenSolver::new(config.solver);

    match config.task {
        Task::Solve { digits, all } => {
            run_solve(&solver, &digits, all);
            Ok(())
        }
        Task::Check { digits, expression } => run_check(&solver, &digits, &expression),
        Task::Survey => run_survey(&solver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_command() {
        let args = CliArgs::try_parse_from(["make-ten", "solve", "1234"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Warn));
            let config = config_from_args(args);
            assert!(config.is_ok());
            if let Ok(config) = config {
                assert!(matches!(
                    config.task,
                    Task::Solve {
                        digits: [1, 2, 3, 4],
                        all: false
                    }
                ));
                assert_eq!(config.solver.target, 10.0);
            }
        }
    }

    #[test]
    fn test_parse_solve_with_flags() {
        let args = CliArgs::try_parse_from([
            "make-ten", "solve", "0012", "--all", "--target", "24", "-l", "debug",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            if let Ok(config) = config_from_args(args) {
                assert!(matches!(
                    config.task,
                    Task::Solve {
                        digits: [0, 0, 1, 2],
                        all: true
                    }
                ));
                assert_eq!(config.solver.target, 24.0);
            } else {
                panic!("expected a valid configuration");
            }
        }
    }

    #[test]
    fn test_parse_check_command() {
        let args = CliArgs::try_parse_from(["make-ten", "check", "9999", "(9 + 9 * 9) / 9"]);
        assert!(args.is_ok());
        if let Ok(args) = args
            && let Ok(config) = config_from_args(args)
        {
            match config.task {
                Task::Check { digits, expression } => {
                    assert_eq!(digits, [9, 9, 9, 9]);
                    assert_eq!(expression, "(9 + 9 * 9) / 9");
                }
                _ => panic!("expected a check task"),
            }
        }
    }

    #[test]
    fn test_parse_survey_command() {
        let args = CliArgs::try_parse_from(["make-ten", "survey"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = config_from_args(args);
            assert!(matches!(config, Ok(CliConfig { task: Task::Survey, .. })));
        }
    }

    #[test]
    fn test_invalid_carriage_number_is_rejected() {
        let args = CliArgs::try_parse_from(["make-ten", "solve", "12.5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(config_from_args(args).is_err());
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(CliArgs::try_parse_from(["make-ten"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
