use clap::{Parser as ClapParser, Subcommand};
use gs1_parser::tools::{ean13_payload, format_result, normalize_scan, read_payloads};
use gs1_parser::{FieldName, Parser, ScanOptions, Terminator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(ClapParser)]
#[command(name = "gs1tool", version, about = "GS1 element-string CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fields of one element string
    Parse {
        payload: String,
        /// End variable-length fields at the group separator (FNC1)
        #[arg(long)]
        gs: bool,
    },
    /// Print every decoded element with its AI and span
    Tokens {
        payload: String,
        #[arg(long)]
        gs: bool,
    },
    /// Parse a file of element strings, one per line
    Batch {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        gs: bool,
    },
    /// Print the EAN-13 payload prepared from one field
    Ean13 {
        payload: String,
        /// Field label, e.g. SKU or LotNumber
        #[arg(long)]
        field: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Parse { payload, gs } => parse_cmd(&payload, gs),
        Command::Tokens { payload, gs } => tokens_cmd(&payload, gs),
        Command::Batch { file, gs } => batch_cmd(&file, gs),
        Command::Ean13 { payload, field } => ean13_cmd(&payload, &field),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn parser_for(gs: bool) -> Parser {
    let options = ScanOptions::from_env();
    if gs {
        Parser::with_options(options.with_terminator(Terminator::GroupSeparator))
    } else {
        Parser::with_options(options)
    }
}

fn parse_cmd(payload: &str, gs: bool) -> bool {
    let result = parser_for(gs).parse(&normalize_scan(payload));
    if result.is_empty() {
        println!("No GS1 fields found");
    } else {
        print!("{}", format_result(&result));
    }
    true
}

fn tokens_cmd(payload: &str, gs: bool) -> bool {
    let tokens = parser_for(gs).tokenize(&normalize_scan(payload));
    println!("Found {} elements", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        println!(
            "  [{}] AI {} -> {} = {:?} (chars {}..{})",
            i, token.ai, token.name, token.value, token.start, token.end
        );
    }
    true
}

fn batch_cmd(file: &Path, gs: bool) -> bool {
    let payloads = match read_payloads(file) {
        Ok(payloads) => payloads,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return false;
        }
    };
    if payloads.is_empty() {
        println!("No element strings found in {}", file.display());
        return true;
    }

    let start = Instant::now();
    let results = parser_for(gs).parse_batch(&payloads);
    let elapsed = start.elapsed();

    let mut empty = 0usize;
    for (payload, result) in payloads.iter().zip(&results) {
        println!("{}", payload);
        if result.is_empty() {
            empty += 1;
            println!("  (no fields)");
            continue;
        }
        for (name, value) in result.iter() {
            println!("  {}: {}", name, value);
        }
    }

    println!(
        "\nParsed {} element strings ({} without fields) in {:.2?}",
        results.len(),
        empty,
        elapsed
    );
    true
}

fn ean13_cmd(payload: &str, field: &str) -> bool {
    let Some(name) = FieldName::from_label(field) else {
        eprintln!("Unknown field {}", field);
        return false;
    };

    let result = Parser::from_env().parse(&normalize_scan(payload));
    let Some(value) = result.get(name) else {
        eprintln!("Field {} not present in payload", name);
        return false;
    };

    match ean13_payload(value) {
        Some(ean) => {
            println!("{}", ean);
            true
        }
        None => {
            eprintln!("Field {} value {:?} cannot be rendered as EAN-13", name, value);
            false
        }
    }
}
