//! Command-line interface for switchparse
//! This binary runs argument lists through a switch table loaded from TOML, for checking how
//! a table classifies and resolves a command line.
//!
//! Usage:
//!   switchparse classify --switches `<file>` [--format `<format>`] [--no-slash] -- `<args>`...
//!   switchparse resolve --switches `<file>` [--format `<format>`] [--no-slash] -- `<args>`...
//!   switchparse list --switches `<file>`

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fmt::Display;
use tracing_subscriber::prelude::*;

use switchparse::{tokenize, Classifier, Loader, Registry, Settings, SwitchValue};

const FORMATS: [&str; 3] = ["text", "json", "yaml"];

fn main() {
    init_tracing();

    let matches = Command::new("switchparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect how a switch table reads a command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            with_grammar_args(
                Command::new("classify").about("Show how each argument is classified"),
            ),
        )
        .subcommand(
            with_grammar_args(
                Command::new("resolve").about("Show the switches and values a command line resolves to"),
            ),
        )
        .subcommand(
            Command::new("list")
                .about("List the switches of a validated table")
                .arg(switches_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("classify", sub)) => handle_classify_command(sub),
        Some(("resolve", sub)) => handle_resolve_command(sub),
        Some(("list", sub)) => handle_list_command(sub),
        _ => unreachable!(),
    }
}

/// Log to stderr, filtered by `RUST_LOG`
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn switches_arg() -> Arg {
    Arg::new("switches")
        .long("switches")
        .short('s')
        .help("TOML file with a [[switches]] table")
        .required(true)
}

fn with_grammar_args(command: Command) -> Command {
    command
        .arg(switches_arg())
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(FORMATS)
                .default_value("text"),
        )
        .arg(
            Arg::new("no-slash")
                .long("no-slash")
                .help("Only accept '-' as a short switch prefix")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .help("The command line to inspect, after '--'")
                .num_args(0..)
                .last(true),
        )
}

/// Load and validate the switch table named on the command line
fn load(matches: &ArgMatches) -> (Settings, Registry) {
    let path = matches
        .get_one::<String>("switches")
        .unwrap_or_else(|| fail("no switch table given"));
    let mut loader = Loader::new().with_file(path);
    // `list` has no --no-slash flag
    if matches!(matches.try_get_one::<bool>("no-slash"), Ok(Some(true))) {
        loader = loader
            .set_override("syntax.slash_prefix", false)
            .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)));
    }
    let settings = loader
        .build()
        .unwrap_or_else(|e| fail(format!("Error loading {}: {}", path, e)));
    let registry = settings
        .registry()
        .unwrap_or_else(|e| fail(format!("Invalid switch table: {}", e)));
    (settings, registry)
}

fn raw_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn format_of(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text")
}

/// Handle the classify command
fn handle_classify_command(matches: &ArgMatches) {
    let (settings, registry) = load(matches);
    let classifier = Classifier::new(&registry, &settings.syntax);
    let tokens = tokenize(raw_args(matches), &classifier);

    match format_of(matches) {
        "text" => {
            for (index, token) in tokens.iter().enumerate() {
                println!("{:>3}  {}", index, token);
            }
        }
        format => print_serialized(&tokens, format),
    }
}

#[derive(Serialize)]
struct NamedResolution {
    switch: String,
    value: SwitchValue,
}

/// Handle the resolve command
fn handle_resolve_command(matches: &ArgMatches) {
    let (settings, registry) = load(matches);
    let resolved = switchparse::parse_with(raw_args(matches), &registry, &settings.syntax)
        .unwrap_or_else(|e| fail(format!("Parse error: {}", e)));

    let named: Vec<NamedResolution> = resolved
        .into_iter()
        .map(|resolution| NamedResolution {
            switch: registry
                .get(resolution.switch)
                .map(|switch| switch.display_name())
                .unwrap_or_else(|| resolution.switch.to_string()),
            value: resolution.value,
        })
        .collect();

    match format_of(matches) {
        "text" => {
            for entry in &named {
                match &entry.value {
                    SwitchValue::Flag => println!("{}", entry.switch),
                    SwitchValue::Single(value) => println!("{} = {:?}", entry.switch, value),
                    SwitchValue::List(values) => println!("{} = {:?}", entry.switch, values),
                }
            }
        }
        format => print_serialized(&named, format),
    }
}

/// Handle the list command
fn handle_list_command(matches: &ArgMatches) {
    let (_, registry) = load(matches);
    for (_, switch) in registry.iter() {
        match &switch.description {
            Some(description) => println!("{}  {}", switch, description),
            None => println!("{}", switch),
        }
    }
}

fn print_serialized<T: Serialize>(value: &T, format: &str) {
    let output = match format {
        "json" => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        other => Err(format!("unknown format '{}'", other)),
    };
    match output {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => fail(format!("Serialization error: {}", e)),
    }
}

fn fail(message: impl Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
