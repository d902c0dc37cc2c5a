use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter;
use log::info;

const DEMO_EXPRESSION: &str =
    "-(-----7+++1) + 3 * (10 / (12 / (3 + 1) - 1)) / (2 + 3) - 5 - 3 + (8)";

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(5 + 3) * 12 / 3"
    #[clap(default_value = DEMO_EXPRESSION)]
    expression: String,

    /// Print the expression in postfix notation, and the value of that postfix expression
    #[clap(short, long)]
    postfix: bool,

    /// Print the syntax tree of the expression
    #[clap(short, long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    info!("expression: {}", args.expression);

    if args.tree {
        let tree = interpreter::convert(&args.expression)
            .with_context(|| format!("Could not parse '{}'", args.expression))?;
        print!("{}", tree);
    }

    if args.postfix {
        let postfix = interpreter::to_postfix(&args.expression)
            .with_context(|| format!("Could not convert '{}' to postfix", args.expression))?
            .join(" ");
        let value = interpreter::evaluate_postfix(&postfix)
            .with_context(|| format!("Could not evaluate postfix '{}'", postfix))?;
        println!("{} = {}", postfix, value);
        return Ok(());
    }

    let value = interpreter::evaluate(&args.expression)
        .with_context(|| format!("Could not evaluate '{}'", args.expression))?;
    println!("{}", value);
    Ok(())
}
