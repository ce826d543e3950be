use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toy_lexer::{
    Emitter, LexerError, ScanEvent, Scanner, ScannerConfig, Symbol, SymbolTable, TableEmitter,
    Token, DEFAULT_MAX_STRING_LEN,
};

#[derive(Parser)]
#[command(name = "toylex")]
#[command(about = "Toy language lexer: prints the token stream of a source file")]
#[command(version)]
struct Cli {
    /// Input source file
    path: PathBuf,

    /// Longest string literal, opening quote included, before it is cut off
    #[arg(long, default_value_t = DEFAULT_MAX_STRING_LEN)]
    max_string_len: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print the symbol table after the tokens
    #[arg(long)]
    symbols: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tokens: &'a [Token],
    diagnostics: &'a [LexerError],
    symbols: Vec<Symbol>,
}

fn main() {
    // Usage errors exit with 1 rather than clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let source = read_source(&cli.path);
    let config = ScannerConfig {
        max_string_len: cli.max_string_len,
    };

    let result = match cli.format {
        Format::Table => cmd_table(&source, config, cli.symbols),
        Format::Json => cmd_json(&source, config),
    };

    // Lexical errors never change the exit status; only a failed write does.
    if let Err(e) = result {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }
}

fn read_source(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn report(err: &LexerError) {
    eprintln!("Error: {err}");
}

fn cmd_table(source: &str, config: ScannerConfig, show_symbols: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut emitter = TableEmitter::new(stdout.lock());
    emitter.write_header()?;

    let mut scanner = Scanner::with_config(source.chars(), config);
    for event in scanner.by_ref() {
        match event {
            ScanEvent::Token(tok) => emitter.emit(&tok)?,
            ScanEvent::Diagnostic(err) => report(&err),
        }
    }

    let mut out = emitter.into_inner();
    if show_symbols {
        write_symbols(&mut out, &scanner.into_symbols())?;
    }
    out.flush()
}

fn write_symbols(out: &mut impl Write, symbols: &SymbolTable) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<20}\t{}", "Symbol", "Code")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for (name, code) in symbols.iter() {
        writeln!(out, "{name:<20}\t{code}")?;
    }
    Ok(())
}

fn cmd_json(source: &str, config: ScannerConfig) -> io::Result<()> {
    let scan = Scanner::with_config(source.chars(), config).collect_scan();
    for err in &scan.diagnostics {
        report(err);
    }

    let json = JsonReport {
        tokens: &scan.tokens,
        diagnostics: &scan.diagnostics,
        symbols: scan.symbols.symbols(),
    };

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &json)?;
    writeln!(out)?;
    out.flush()
}
