//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling `process::exit`.
//! Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::NamedSource;

use driven_syntax::lexer;
use driven_syntax::parser;

use super::{CliError, CliResult, ExitCode};
use crate::highlight;

/// Read a script from disk with a user-facing error on failure.
fn read_source(file: &Path) -> CliResult<String> {
    fs::read_to_string(file)
        .map_err(|e| CliError::failure(format!("cannot read {}: {e}", file.display())))
}

/// `driven tokens <file> [--json]`
pub fn tokens(file: &Path, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    let tokens = lexer::lex(&source);

    if json {
        let entries: Vec<serde_json::Value> = tokens
            .iter()
            .map(|t| {
                serde_json::json!({
                    "kind": t.kind.name(),
                    "start": t.span.start,
                    "end": t.span.end,
                    "lexeme": t.lexeme,
                })
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| CliError::failure(format!("cannot serialize tokens: {e}")))?;
        println!("{rendered}");
    } else {
        for t in &tokens {
            println!(
                "{:>5}..{:<5} {:<20} {:?}",
                t.span.start,
                t.span.end,
                t.kind.name(),
                t.lexeme
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `driven check <file>`
pub fn check(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    tracing::debug!(file = %file.display(), bytes = source.len(), "checking script");

    match parser::parse(&source) {
        Ok(script) => {
            println!(
                "{}: {} module(s), {} rule(s)",
                file.display(),
                script.modules.len(),
                script.rule_count()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            let count = errors.len();
            for error in errors {
                let report = miette::Report::new(error).with_source_code(NamedSource::new(
                    file.display().to_string(),
                    source.clone(),
                ));
                eprintln!("{report:?}");
            }
            Err(CliError::failure(format!(
                "{}: {count} error(s)",
                file.display()
            )))
        }
    }
}

/// `driven highlight <file>`
pub fn highlight(file: &Path) -> CliResult<ExitCode> {
    let source = read_source(file)?;
    print!("{}", highlight::render_ansi(&source));
    Ok(ExitCode::SUCCESS)
}

/// `driven reference`
pub fn reference() -> CliResult<ExitCode> {
    use driven_core::lang::{expressions, keywords, snippets};

    println!("# driven-script vocabulary\n");

    println!("## Block keywords (case-insensitive)\n");
    println!("| Keyword | Description |");
    println!("| --- | --- |");
    for info in keywords::BLOCK_KEYWORDS {
        println!("| `{}` | {} |", info.canonical, info.description);
    }

    println!("\n## Expression keywords (case-sensitive)\n");
    println!("| Keyword | Description |");
    println!("| --- | --- |");
    for info in expressions::EXPR_KEYWORDS {
        println!("| `{}` | {} |", info.canonical, info.description);
    }

    println!("\n## Snippets\n");
    for snippet in snippets::SNIPPETS {
        println!("### {}\n", snippet.label);
        println!("{}\n", snippet.documentation);
        println!("```\n{}\n```\n", snippet.insert_template);
    }

    Ok(ExitCode::SUCCESS)
}
