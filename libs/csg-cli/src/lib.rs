//! # CSG CLI
//!
//! Shared plumbing for the `csg2irmf` converter and the `csg-repl` REPL.

use anyhow::{bail, Context, Result};
use config::constants::{IrmfOptions, IRMF_EXTENSION};
use csg_ast::Statement;
use csg_eval::{eval_program, Environment};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// REPL prompt.
pub const PROMPT: &str = ">> ";

/// Initialize logging with a default `info` filter.
///
/// Use the `RUST_LOG` environment variable to override it.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// CONVERSION
// =============================================================================

/// `model.csg` → `model.irmf`, next to the input.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(IRMF_EXTENSION)
}

/// Compile CSG source into `.irmf` text.
pub fn convert(source: &str, center: bool, options: &IrmfOptions) -> Result<String> {
    let shader = csg_irmf::compile_source(source, center)?;
    if shader.is_empty() {
        bail!("scene contains no geometry");
    }
    Ok(shader.to_irmf(options))
}

/// Convert one file, writing the result to `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    center: bool,
    options: &IrmfOptions,
) -> Result<()> {
    info!("Processing {} ...", input.display());

    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let irmf = convert(&source, center, options)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    fs::write(output, &irmf).with_context(|| format!("failed to write {}", output.display()))?;

    debug!(bytes = irmf.len(), "wrote shader");
    info!("Wrote {}", output.display());
    Ok(())
}

// =============================================================================
// REPL
// =============================================================================

/// Read lines from `input`, evaluate each one and print the result.
///
/// Bindings persist across lines. Parse errors are printed one per line,
/// indented with a tab. `let` statements and blank lines print nothing.
pub fn run_repl(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();

    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let parsed = csg_parser::parse(&line);

        if !parsed.is_ok() {
            for message in parsed.messages() {
                writeln!(output, "\t{message}")?;
            }
        } else if !matches!(
            parsed.program.statements.last(),
            None | Some(Statement::Let { .. })
        ) {
            let value = eval_program(&parsed.program, &env);
            writeln!(output, "{}", value.inspect())?;
        } else {
            eval_program(&parsed.program, &env);
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl(input: &str) -> String {
        let mut output = Vec::new();
        run_repl(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("models/gear.csg")), PathBuf::from("models/gear.irmf"));
        assert_eq!(output_path(Path::new("gear")), PathBuf::from("gear.irmf"));
    }

    #[test]
    fn test_convert() {
        let irmf = convert("cube(2);", false, &IrmfOptions::default()).unwrap();
        assert!(irmf.starts_with("/*{\n  irmf: \"1.0\","));
        assert!(irmf.ends_with("\tmaterials[0] = cube(vec3(2), false, xyz);\n}\n"));
    }

    #[test]
    fn test_convert_errors() {
        let err = convert("group() {}", false, &IrmfOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "scene contains no geometry");

        let err = convert("cube(", false, &IrmfOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("parse errors:"));
    }

    #[test]
    fn test_convert_file() {
        let dir = std::env::temp_dir().join(format!("csg-cli-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("ball.csg");
        fs::write(&input, "sphere(r = 3);").unwrap();

        let output = output_path(&input);
        convert_file(&input, &output, true, &IrmfOptions::default()).unwrap();
        let irmf = fs::read_to_string(&output).unwrap();
        assert!(irmf.contains("  max: [3.5,3.5,3.5],\n  min: [-3.5,-3.5,-3.5],\n"));

        let missing = dir.join("missing.csg");
        let err = convert_file(&missing, &output_path(&missing), false, &IrmfOptions::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_repl_persists_bindings() {
        assert_eq!(
            repl("let x = 5;\nx * 2\ncube(x);\n"),
            ">> >> 10\n>> cube(5);\n>> \n"
        );
    }

    #[test]
    fn test_repl_reports_parse_errors() {
        assert_eq!(
            repl("let = 1;\n"),
            ">> \texpected next token to be IDENT, got = instead at line 1, column 5\n>> \n"
        );
    }

    #[test]
    fn test_repl_prints_runtime_errors() {
        assert_eq!(repl("foo\n"), ">> ERROR: identifier not found: foo\n>> \n");
    }
}
