use clap::{Args, Parser as ClapParser, Subcommand};
use restful_sql::{
    CompileOptions,
    cli::{self, CheckMode, CheckOptions, CheckResult, CliError},
    config::DEFAULT_MAX_DEPTH,
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "rsql")]
#[command(about = "Compile JSON [mode, fields, values] queries into SQL boolean expressions")]
#[command(version)]
struct Cli {
    /// Deepest nesting level accepted
    #[arg(long, global = true, env = "RSQL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// The RSQL query (reads from stdin if not provided)
    query: Option<String>,

    /// Read the query from a file
    #[arg(short, long, conflicts_with = "query")]
    input_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a query and print the SQL expression
    Compile(QueryArgs),

    /// Validate a query without printing it
    Check(QueryArgs),

    /// Print the parsed query tree as JSON
    Parse {
        #[command(flatten)]
        input: QueryArgs,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let compile = CompileOptions::default().with_max_depth(cli.max_depth);

    let result = match cli.command {
        Commands::Compile(input) => run(input, CheckMode::Compile, compile, false),
        Commands::Check(input) => run(input, CheckMode::Validate, compile, false),
        Commands::Parse { input, pretty } => run(input, CheckMode::Tree, compile, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = std::env::var("RSQL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(filter))
        .compact()
        .init();
}

fn read_query(args: QueryArgs) -> Result<Option<String>, CliError> {
    if let Some(path) = args.input_file {
        return Ok(Some(fs::read_to_string(path)?));
    }
    match args.query {
        Some(q) => Ok(Some(q)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run(
    input: QueryArgs,
    mode: CheckMode,
    compile: CompileOptions,
    pretty: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(input)?,
        mode,
        compile,
    };

    match cli::execute_check(&options)? {
        CheckResult::Compiled(sql) => println!("{}", sql),
        CheckResult::Valid => println!("Query is valid"),
        CheckResult::Tree(tree) => println!("{}", cli::render_json(&tree, pretty)?),
    }
    Ok(())
}
