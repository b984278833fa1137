//! blockscript CLI entry point.

use blockscript_foundation::Value;
use blockscript_parser::ParserConfig;
use blockscript_runtime::{Repl, RuntimeConfig, Session, VariableStore};
use log::LevelFilter;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// What the CLI should do with its input files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    /// Execute statements.
    #[default]
    Run,
    /// Parse only.
    Check,
    /// Print canonical text.
    Format,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    mode: Mode,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    strict: bool,
    run_disabled: bool,
    keep_going: bool,
    bindings: Vec<(String, String, bool)>,
    load_snapshot: Option<PathBuf>,
    save_snapshot: Option<PathBuf>,
    dump_store: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_binding(arg: &str, flag: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("{flag} expects NAME=VALUE, got: {arg}"))?;
    if name.is_empty() {
        return Err(format!("{flag} expects a non-empty NAME: {arg}").into());
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--check" => config.mode = Mode::Check,
            "--fmt" => config.mode = Mode::Format,
            "--strict" => config.strict = true,
            "--run-disabled" => config.run_disabled = true,
            "--keep-going" => config.keep_going = true,
            "--dump" => config.dump_store = true,
            flag @ ("--set" | "--capture") => {
                let value = args
                    .next()
                    .ok_or_else(|| format!("{flag} requires NAME=VALUE"))?;
                let (name, value) = parse_binding(&value, flag)?;
                config.bindings.push((name, value, flag == "--capture"));
            }
            flag @ ("--load-snapshot" | "--snapshot") => {
                let path = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| format!("{flag} requires a path"))?;
                if flag == "--snapshot" {
                    config.save_snapshot = Some(path);
                } else {
                    config.load_snapshot = Some(path);
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("blockscript {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let runtime = RuntimeConfig::default()
        .with_parser(ParserConfig::default().with_strict(config.strict))
        .with_skip_disabled(!config.run_disabled)
        .with_halt_on_error(!config.keep_going);

    let mut store = match &config.load_snapshot {
        Some(path) => VariableStore::from_snapshot(&fs::read(path)?)?,
        None => VariableStore::new(),
    };
    for (name, value, capture) in &config.bindings {
        if *capture {
            store.set_capture(name, value.as_str());
        } else {
            store.set_value(name, value.as_str());
        }
    }
    let mut session = Session::with_config(runtime).with_store(store);

    match config.mode {
        Mode::Check => {
            for file in &config.files {
                let statements = session.check_script(&fs::read_to_string(file)?)?;
                println!("{}: {} statements ok", file.display(), statements.len());
            }
            return Ok(());
        }
        Mode::Format => {
            for file in &config.files {
                print!("{}", session.format_script(&fs::read_to_string(file)?)?);
            }
            return Ok(());
        }
        Mode::Run => {}
    }

    let ran = run_files(&mut session, &config.files, &mut io::stdout());
    if config.dump_store {
        dump_store(session.store());
    }
    if ran.is_err() {
        save_snapshot(config.save_snapshot.as_deref(), &session)?;
        return ran;
    }

    if !config.batch_mode {
        let mut repl = Repl::new()?.with_session(session);
        if !config.files.is_empty() {
            repl = repl.without_banner();
        }
        repl.run()?;
        session = std::mem::take(repl.session_mut());
    }

    save_snapshot(config.save_snapshot.as_deref(), &session)
}

/// Runs each file in order, writing statement log lines to `out`.
///
/// Log lines from statements that ran before a failing line are written
/// before the error is returned.
fn run_files(
    session: &mut Session,
    files: &[PathBuf],
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for file in files {
        let result = session.eval_file(file);
        for line in session.store_mut().take_logs() {
            writeln!(out, "{line}")?;
        }
        let report = result?;
        for err in &report.errors {
            eprintln!("\x1b[33mWarning: {}: {err}\x1b[0m", file.display());
        }
        log::info!(
            "{}: {} executed, {} skipped",
            file.display(),
            report.executed(),
            report.skipped()
        );
    }
    Ok(())
}

fn save_snapshot(path: Option<&Path>, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        fs::write(path, session.store().to_snapshot()?)?;
    }
    Ok(())
}

fn dump_store(store: &VariableStore) {
    println!("\x1b[1;36m=== Variables ===\x1b[0m");
    for (name, value) in store.variables() {
        println!("  {name} = {}", display_value(value));
    }
    println!("\x1b[1;36m=== Captures ===\x1b[0m");
    for (name, value) in store.captures() {
        println!("  {name} = {}", display_value(value));
    }
    println!();
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("{s:?}"),
        Value::List(_) => value.to_string(),
    }
}

fn print_help() {
    println!(
        "\x1b[1mblockscript\x1b[0m - Run, check, and format blockscript statements

\x1b[1mUSAGE:\x1b[0m
    blockscript [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Scripts to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Run files and exit (no REPL)
    -v, --verbose            Debug logging (RUST_LOG overrides)
    --check                  Parse files without running them
    --fmt                    Print files in canonical form
    --strict                 Reject trailing text after a statement
    --run-disabled           Execute statements marked with !
    --keep-going             Report failing lines and continue
    --set NAME=VALUE         Bind a variable before running
    --capture NAME=VALUE     Bind a capture before running
    --load-snapshot PATH     Start from a saved store
    --snapshot PATH          Save the store on exit
    --dump                   Print all bindings after running files

\x1b[1mEXAMPLES:\x1b[0m
    blockscript                          Start interactive REPL
    blockscript -b calc.bs               Run calc.bs and exit
    blockscript --set X=4 -b calc.bs     Run with X bound to 4
    blockscript --fmt calc.bs            Print calc.bs canonically

\x1b[1mSTATEMENTS:\x1b[0m
    [!][#label] SUM|SUBTRACT|MULTIPLY \"a\" \"b\" [-> VAR|CAP \"name\"]
    ## comment"
    );
}
