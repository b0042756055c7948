use std::{fs, ops::Range, process::ExitCode};

use ariadne::{Color, IndexType, Label, Report, ReportKind, sources};
use clap::Parser;
use foxl::{
    ast::Position,
    check,
    config::Config,
    error::{Diagnostic, DiagnosticKind, Error},
    evaluate,
};
use tracing_subscriber::EnvFilter;

/// foxl checks and evaluates scripts written in the FoxL expression language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells foxl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Stop tokenizing at the first unrecognized character instead of
    /// skipping it.
    #[arg(short, long)]
    stop_on_lex_error: bool,

    /// Only run the static checks and print the symbol table.
    #[arg(short, long)]
    check_only: bool,

    contents: String,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt().with_writer(std::io::stderr)
                                     .with_env_filter(EnvFilter::try_from_default_env()
                                         .unwrap_or_else(|_| EnvFilter::new("warn")))
                                     .try_init();

    let args = Args::parse();

    let (name, script) = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => (args.contents.clone(), script),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        ("<script>".to_string(), args.contents.clone())
    };

    let config = Config::default().with_stop_on_lex_error(args.stop_on_lex_error);

    if args.check_only {
        return match check(&script, &config) {
            Ok(checked) => {
                for (variable, ty) in checked.symbols.iter() {
                    println!("{variable}: {ty}");
                }
                ExitCode::SUCCESS
            },
            Err(diagnostics) => {
                report_all(&name, &script, &diagnostics);
                ExitCode::FAILURE
            },
        };
    }

    match evaluate(&script, &config) {
        Ok(value) => {
            if let Some(v) = value {
                println!("{v}");
            }
            ExitCode::SUCCESS
        },
        Err(Error::Diagnostics(diagnostics)) => {
            report_all(&name, &script, &diagnostics);
            ExitCode::FAILURE
        },
        Err(e @ Error::Runtime(_)) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Prints every diagnostic with the source line it points at.
fn report_all(name: &str, source: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let span = span_of(source, diagnostic.position);
        let printed =
            Report::build(ReportKind::Error, (name.to_string(), span.clone()))
                .with_config(ariadne::Config::new().with_index_type(IndexType::Byte))
                .with_message(&diagnostic.message)
                .with_label(Label::new((name.to_string(), span)).with_message(label_for(&diagnostic.kind))
                                                                   .with_color(Color::Red))
                .finish()
                .eprint(sources([(name.to_string(), source.to_string())]));

        if printed.is_err() {
            eprintln!("{diagnostic}");
        }
    }
}

fn label_for(kind: &DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::UnrecognizedCharacter { .. } => "not part of any token",
        DiagnosticKind::SyntaxError { .. } => "unexpected here",
        DiagnosticKind::UnexpectedEndOfInput { .. } => "input ends here",
        DiagnosticKind::UndefinedVariable { .. } => "never assigned",
        DiagnosticKind::TypeMismatch { .. } => "operands differ in type",
    }
}

/// Converts a line/column position into a one-character byte range.
///
/// Diagnostics without a position point at the end of the source.
fn span_of(source: &str, position: Option<Position>) -> Range<usize> {
    let Some(position) = position else {
        return source.len()..source.len();
    };

    let line_start: usize = source.split_inclusive('\n')
                                  .take(position.line.saturating_sub(1))
                                  .map(str::len)
                                  .sum();
    let start = source[line_start..].char_indices()
                                    .nth(position.column.saturating_sub(1))
                                    .map_or(source.len(), |(offset, _)| line_start + offset);
    let end = source[start..].chars()
                             .next()
                             .map_or(start, |c| start + c.len_utf8());
    start..end
}
