use std::io::{self, BufRead, Write};

use calctree::run;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// calctree evaluates integer arithmetic expressions and shows the tree it
/// built to do so.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints only the result, without the tree diagram.
    #[arg(long)]
    no_tree: bool,

    /// Raises log verbosity on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from stdin when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression().unwrap_or_else(|e| {
                                     eprintln!("Failed to read the expression: {e}");
                                     std::process::exit(1);
                                 }),
    };

    match run(&expression) {
        Ok(outcome) => {
            if !args.no_tree {
                print!("{}", outcome.tree);
            }
            println!("Result: {}", outcome.value);
        },
        Err(e) => println!("Compilation error: {e}"),
    }
}

fn read_expression() -> io::Result<String> {
    print!("Expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(level.into())
                                     .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
