//! rsql — render filter expressions as RSQL query strings
//!
//! # Usage
//!
//! ```bash
//! # Encoded form, ready for ?filter=
//! rsql '{"kind":"comparison","selector":"status","comparison":"==","arguments":"active"}'
//!
//! # Readable form from a file
//! rsql --file filter.json --readable
//!
//! # Percent-decode an encoded query
//! rsql decode 'status%3D%3Dactive'
//! ```

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use rsql_builder::ast::operators::comparison;
use rsql_builder::config::RsqlConfig;
use rsql_builder::encoder;
use rsql_builder::prelude::*;
use rsql_builder::transpiler::format_value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rsql")]
#[command(version)]
#[command(about = "Render JSON filter expressions as RSQL query strings", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    rsql '{"kind":"comparison","selector":"age","comparison":"=gt=","arguments":30}'
    rsql --file filter.json --readable
    cat filter.json | rsql --strict
    rsql explain "$(cat filter.json)""#)]
struct Cli {
    /// The expression as JSON (reads stdin when omitted)
    expression: Option<String>,

    /// Read the expression JSON from a file
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Print readable RSQL instead of the URL-encoded form
    #[arg(short, long)]
    readable: bool,

    /// Reject empty selectors, operators and operand lists
    #[arg(short, long)]
    strict: bool,

    /// Configuration file (defaults to ./rsql.toml)
    #[arg(long, env = "RSQL_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tree, readable and encoded forms of an expression
    Explain {
        /// The expression as JSON
        expression: String,
    },
    /// Percent-decode an encoded RSQL query
    Decode {
        /// The encoded query
        encoded: String,
    },
    /// Show the RSQL symbol reference
    Symbols,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Explain { expression }) => explain(expression),
        Some(Commands::Decode { encoded }) => decode(encoded),
        Some(Commands::Symbols) => {
            show_symbols();
            Ok(())
        }
        None => render(&cli),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rsql_builder=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rsql_builder=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(cli: &Cli) -> anyhow::Result<()> {
    let config = RsqlConfig::load(cli.config.as_deref())?;
    let readable = cli.readable || config.readable;
    let strict = cli.strict || config.strict;

    let Some(json) = read_input(cli)? else {
        println!("{}", "rsql - RSQL query builder".cyan().bold());
        println!();
        println!("Usage: rsql <EXPRESSION_JSON> [OPTIONS]");
        println!();
        println!("Try: rsql --help");
        return Ok(());
    };

    let expr = parse_expression(&json)?;
    let out = match (strict, readable) {
        (true, true) => try_build_readable(&expr)?,
        (true, false) => try_build(&expr)?,
        (false, true) => build_readable(&expr),
        (false, false) => build(&expr),
    };
    println!("{}", out);
    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<Option<String>> {
    if let Some(expr) = &cli.expression {
        return Ok(Some(expr.clone()));
    }
    if let Some(path) = &cli.file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(Some(json));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut json = String::new();
    stdin.read_to_string(&mut json)?;
    Ok(Some(json))
}

fn parse_expression(json: &str) -> RsqlResult<Expression> {
    Ok(serde_json::from_str(json)?)
}

fn explain(json: &str) -> anyhow::Result<()> {
    let expr = parse_expression(json)?;

    println!("{}", "RSQL Expression".cyan().bold());
    println!();
    println!("{}", "Tree:".green().bold());
    print_outline(&expr, 1);
    println!(
        "  {} {} nodes, depth {}",
        "Size:".dimmed(),
        expr.node_count(),
        expr.depth()
    );

    println!();
    println!("{}", "Readable:".green().bold());
    println!("  {}", build_readable(&expr).white());
    println!("{}", "Encoded:".green().bold());
    println!("  {}", build(&expr).white());

    if let Err(e) = try_build_readable(&expr) {
        println!();
        println!("{} {}", "⚠ Strict mode would reject this:".yellow(), e);
    }
    Ok(())
}

fn print_outline(expr: &Expression, depth: usize) {
    let pad = "  ".repeat(depth);
    match expr {
        Expression::Comparison(c) => {
            println!(
                "{}• {} {} {}",
                pad,
                c.selector.white(),
                c.comparison.cyan(),
                format_value(&c.arguments).yellow()
            );
        }
        Expression::Logical(l) => {
            let note = if l.operands.len() == 1 { " (collapsed)" } else { "" };
            println!(
                "{}{}{}",
                pad,
                l.operator.to_string().magenta().bold(),
                note.dimmed()
            );
            for child in &l.operands {
                print_outline(child, depth + 1);
            }
        }
    }
}

fn decode(encoded: &str) -> anyhow::Result<()> {
    println!("{}", encoder::decode(encoded)?);
    Ok(())
}

fn show_symbols() {
    println!("{}", "RSQL Symbol Reference".cyan().bold());
    println!();

    println!(
        "{:8} {:18} {}",
        "Symbol".white().bold(),
        "Name".white().bold(),
        "Meaning".white().bold()
    );
    println!("{}", "─".repeat(60).dimmed());

    let logical = [
        (";", "AND", "both sides match"),
        (",", "OR", "either side matches"),
        ("()", "Group", "binds an OR inside an AND"),
        ("''", "Empty", "null or empty string"),
    ];

    for (symbol, name, meaning) in logical.into_iter().chain(comparison::ALL) {
        println!(
            "{:8} {:18} {}",
            symbol.cyan().bold(),
            name.yellow(),
            meaning.dimmed()
        );
    }
}
