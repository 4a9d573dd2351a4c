//! sqltree command-line front end
//!
//! Parses SQL command text and prints what was understood.
//!
//! # Usage
//!
//! ```bash
//! # Summarize each statement
//! sqltree "SELECT * FROM People; DELETE FROM Customers"
//!
//! # JSON dump
//! sqltree "UPDATE People SET Age=32" --format json
//!
//! # Clause tree
//! sqltree explain "SELECT p.Name AS N FROM People AS p"
//!
//! # Arithmetic
//! sqltree eval "5 + 2 * 3"
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use colored::*;
use sqltree::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sqltree")]
#[command(version)]
#[command(about = "Parse SQL-like command text into syntax trees", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqltree 'SELECT * FROM People;SELECT * FROM Customers'
    sqltree 'INSERT INTO People (FirstName) VALUES (\"Jon\")' --format json
    echo 'SELECT 1 + 3' | sqltree
    sqltree eval '-5 * 2'")]
struct Cli {
    /// Command text; read from stdin when omitted
    sql: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Config file with parser limits
    #[arg(short, long, env = "SQLTREE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one statement and show its clause tree
    Explain {
        /// The statement to explain
        sql: String,
    },
    /// Evaluate an arithmetic expression
    Eval {
        /// The expression, e.g. "5 + 2 * 3"
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },
    /// Show the keyword reference
    Keywords,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ParserConfig::load()?,
    };
    let parser = Parser::with_config(config);

    match &cli.command {
        Some(Commands::Explain { sql }) => explain(&parser, sql),
        Some(Commands::Eval { expr }) => eval(&parser, expr, &cli.format),
        Some(Commands::Keywords) => {
            show_keywords();
            Ok(())
        }
        None => {
            let sql = match &cli.sql {
                Some(sql) => sql.clone(),
                None => read_stdin()?,
            };
            summarize(&parser, &sql, cli)
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading command text from stdin")?;
    Ok(buf)
}

fn summarize(parser: &Parser, sql: &str, cli: &Cli) -> Result<()> {
    if cli.verbose {
        println!("{} {}", "Input:".dimmed(), sql.trim().yellow());
    }

    let statements = parser.parse(sql)?;

    if let OutputFormat::Json = cli.format {
        println!("{}", serde_json::to_string_pretty(&statements)?);
        return Ok(());
    }

    if statements.is_empty() {
        println!("{}", "(no statements recognized)".dimmed());
        return Ok(());
    }

    for (i, stmt) in statements.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("[{}]", i + 1).dimmed(),
            stmt.kind().to_string().cyan().bold(),
            stmt.to_sql().white()
        );
        print_metadata(stmt);
    }

    println!();
    println!("{} statement(s) parsed", statements.len().to_string().cyan());
    Ok(())
}

fn print_metadata(stmt: &Statement) {
    if !stmt.table_name().is_empty() {
        println!("    {} {}", "Table:".dimmed(), stmt.table_name().white());
    }

    match stmt {
        Statement::Select(s) => {
            println!("    {} {}", "Columns:".dimmed(), s.column_names().join(", "));
            if !s.column_aliases().is_empty() {
                println!("    {} {}", "Column aliases:".dimmed(), s.column_aliases().join(", "));
            }
            if !s.table_names().is_empty() {
                println!("    {} {}", "Tables:".dimmed(), s.table_names().join(", "));
            }
            if !s.table_aliases().is_empty() {
                println!("    {} {}", "Table aliases:".dimmed(), s.table_aliases().join(", "));
            }
        }
        Statement::Insert(_) | Statement::Update(_) => {
            for (column, value) in stmt.column_names().iter().zip(stmt.values()) {
                println!("    {} = {}", column.white(), value.to_string().yellow());
            }
            if stmt.column_names().is_empty() {
                let values: Vec<String> = stmt.values().iter().map(|v| v.to_string()).collect();
                println!("    {} {}", "Values:".dimmed(), values.join(", ").yellow());
            }
        }
        Statement::Delete(_) => {}
    }
}

fn explain(parser: &Parser, sql: &str) -> Result<()> {
    println!("{}", "Statement Explanation".cyan().bold());
    println!();
    println!("{} {}", "Input:".dimmed(), sql.yellow());
    println!();

    let stmt = parser.parse_statement(sql)?;

    println!("{}", "Parsed Structure:".green().bold());
    println!("  {} {}", "Kind:".dimmed(), stmt.kind().to_string().cyan());
    print_metadata(&stmt);

    println!();
    println!("{}", "Clause Tree:".green().bold());
    for clause in stmt.syntax_nodes() {
        for line in clause.to_string().lines() {
            println!("  {}", line);
        }
    }

    println!();
    println!("{}", "Canonical SQL:".green().bold());
    println!("  {}", stmt.to_sql().white());
    Ok(())
}

fn eval(parser: &Parser, expr: &str, format: &OutputFormat) -> Result<()> {
    let value = parser.parse_expression(expr)?.evaluate()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Text => println!(
            "{} {}",
            value.to_string().white().bold(),
            format!("({})", value.type_name()).dimmed()
        ),
    }
    Ok(())
}

fn show_keywords() {
    println!("{}", "Keyword Reference".cyan().bold());
    println!();

    let keywords = [
        ("SELECT", "Project columns or values", "SELECT a, b FROM t"),
        ("DISTINCT", "Drop duplicate rows", "SELECT DISTINCT a FROM t"),
        ("TOP", "Limit row count", "SELECT TOP(10) * FROM t"),
        ("AS", "Alias a column or table", "SELECT a AS b FROM t AS u"),
        ("FROM", "Source tables", "FROM t, u"),
        ("WHERE", "Filter predicate", "WHERE a >= 1 AND b <> 2"),
        ("NOT", "Negate a predicate", "WHERE NOT a = 1"),
        ("~", "Bitwise NOT", "WHERE ~flags"),
        ("ORDER BY", "Sort columns", "ORDER BY a, t.b DESC"),
        ("INSERT INTO", "Add a row", "INSERT INTO t (a) VALUES (1)"),
        ("DELETE FROM", "Remove rows", "DELETE FROM t"),
        ("UPDATE", "Assign columns", "UPDATE t SET a = 1, b = 'x'"),
    ];

    println!(
        "{:12} {:28} {}",
        "Keyword".white().bold(),
        "Meaning".white().bold(),
        "Example".white().bold()
    );
    println!("{}", "─".repeat(72).dimmed());

    for (keyword, meaning, example) in keywords {
        println!(
            "{:12} {:28} {}",
            keyword.cyan().bold(),
            meaning.white(),
            example.dimmed()
        );
    }
}
