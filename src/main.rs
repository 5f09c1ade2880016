use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use rox::ast_printer::AstPrinter;
use rox::{Lox, Status};

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Option<Commands>,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print the token list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parses a Lox program and prints the AST of each statement
    Parse { filename: PathBuf },

    /// Runs input from a file as a Lox program
    Run { filename: PathBuf },

    /// Starts an interactive prompt (the default)
    Repl,
}

/// Reads the contents of a file into a String
fn read_file(filename: &PathBuf) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // Write to file with module and source line
    Builder::new()
        .format(|buf, record| {
            // Strip 'rox::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("rox::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .parse_default_env()
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Print and clear whatever the session collected.
fn report(lox: &mut Lox) {
    for e in lox.take_diagnostics() {
        debug!("Diagnostic: {}", e);
        eprintln!("{}", e);
    }
}

fn run_file(filename: &PathBuf) -> Result<i32> {
    let source = read_file(filename)?;
    let mut lox = Lox::new();

    let status: Status = lox.run(&source);
    report(&mut lox);

    info!("Run finished with {:?}", status);

    Ok(status.exit_code())
}

fn tokenize(filename: &PathBuf, json: bool) -> Result<i32> {
    let source = read_file(filename)?;
    let mut lox = Lox::new();

    let tokens = lox.tokenize(&source);
    let failed = lox.diagnostics().had_error();
    report(&mut lox);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?
        );
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(if failed { Status::CompileError.exit_code() } else { 0 })
}

fn parse(filename: &PathBuf) -> Result<i32> {
    let source = read_file(filename)?;
    let mut lox = Lox::new();

    let statements = lox.parse(&source);

    if lox.diagnostics().had_error() {
        report(&mut lox);
        return Ok(Status::CompileError.exit_code());
    }

    for line in AstPrinter::print(&statements) {
        println!("{}", line);
    }

    Ok(0)
}

fn run_prompt() -> Result<i32> {
    info!("Starting REPL");

    let mut lox = Lox::new();
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Failed to read line")?;

        if read == 0 {
            println!();
            break;
        }

        lox.run(&input);
        report(&mut lox);
    }

    Ok(0)
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let code: i32 = match args.commands.unwrap_or(Commands::Repl) {
        Commands::Tokenize { filename, json } => tokenize(&filename, json)?,
        Commands::Parse { filename } => parse(&filename)?,
        Commands::Run { filename } => run_file(&filename)?,
        Commands::Repl => run_prompt()?,
    };

    if code != 0 {
        debug!("Exiting with code {}", code);
        std::process::exit(code);
    }

    Ok(())
}
