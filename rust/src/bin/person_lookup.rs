//! Query a person record file by CPF, name prefix, or birth date range.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use avlindex::{DirectoryConfig, PersonDirectory, PersonRef, DEFAULT_DATE_FORMAT};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "person_lookup")]
#[command(about = "Indexed lookups over a delimited person record file")]
struct Cli {
    /// Record file, one `cpf;rg;name;dd/mm/yyyy;city` line per person
    file: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// chrono format for birth dates, both in the file and on input
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Fail on the first malformed record instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exact lookup by CPF
    Cpf { cpf: String },
    /// Everyone whose name starts with PREFIX
    Prefix { prefix: String },
    /// Everyone born between FROM and TO, inclusive
    Range { from: String, to: String },
    /// Interactive menu (default)
    Menu,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DirectoryConfig::default()
        .with_delimiter(cli.delimiter)
        .with_date_format(cli.date_format)
        .with_strict(cli.strict);

    let directory = match PersonDirectory::load_from_path(&cli.file, config) {
        Ok(directory) => directory,
        Err(e) => {
            error!(error = %e, "failed to load records");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command.unwrap_or(Command::Menu) {
        Command::Cpf { cpf } => print_one(&mut out, directory.find_by_cpf(&cpf)),
        Command::Prefix { prefix } => {
            print_many(&mut out, &directory.find_by_name_prefix(&prefix))
        }
        Command::Range { from, to } => match directory.find_by_birth_range_str(&from, &to) {
            Ok(people) => print_many(&mut out, &people),
            Err(e) => {
                error!(error = %e, "invalid date range");
                return ExitCode::FAILURE;
            }
        },
        Command::Menu => run_menu(&directory, io::stdin().lock(), &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to write output");
            ExitCode::FAILURE
        }
    }
}

fn print_one<W: Write>(out: &mut W, person: Option<&PersonRef>) -> io::Result<()> {
    writeln!(out, "\nRESULT:")?;
    match person {
        Some(person) => writeln!(out, "{}", person),
        None => writeln!(out, "Person not found!"),
    }
}

fn print_many<W: Write>(out: &mut W, people: &[&PersonRef]) -> io::Result<()> {
    writeln!(out, "\n{} PEOPLE FOUND:", people.len())?;
    for person in people {
        writeln!(out, "{}", person)?;
    }
    Ok(())
}

/// Prompt and read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_menu<R: BufRead, W: Write>(
    directory: &PersonDirectory,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out, "\n--- QUERY MENU ---")?;
        writeln!(out, "1. Find by CPF")?;
        writeln!(out, "2. Find by name prefix")?;
        writeln!(out, "3. Find by birth date range")?;
        writeln!(out, "4. Exit")?;
        let Some(choice) = prompt(&mut input, out, "Choose an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(cpf) = prompt(&mut input, out, "CPF: ")? else {
                    return Ok(());
                };
                print_one(out, directory.find_by_cpf(&cpf))?;
            }
            "2" => {
                let Some(prefix) = prompt(&mut input, out, "Name prefix: ")? else {
                    return Ok(());
                };
                print_many(out, &directory.find_by_name_prefix(&prefix))?;
            }
            "3" => {
                let Some(from) = prompt(&mut input, out, "Start date (DD/MM/YYYY): ")? else {
                    return Ok(());
                };
                let Some(to) = prompt(&mut input, out, "End date (DD/MM/YYYY): ")? else {
                    return Ok(());
                };
                match directory.find_by_birth_range_str(&from, &to) {
                    Ok(people) => print_many(out, &people)?,
                    Err(_) => writeln!(out, "Invalid date format!")?,
                }
            }
            "4" => return Ok(()),
            _ => writeln!(out, "Invalid option!")?,
        }
    }
}
