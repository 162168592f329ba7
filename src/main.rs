//! autodoc — generate markdown documentation from `@`-tagged comment blocks.
//!
//! Reads every input file, parses its `@filename:`/`@class`/`@function`
//! annotations into records, renders them into one document and writes it
//! to `.DOCS.md.tmp`. A single `y` on stdin moves it to `DOCS.md`;
//! any other answer throws it away.
//!
//! ```text
//! autodoc src/index.ts src/widget.ts
//! autodoc -f json -o api.json 'src/**/*.ts'
//! ```

mod commit;
mod logging;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "autodoc",
    about = "Generate markdown documentation from @-tagged comment blocks"
)]
struct Cli {
    /// Input files (glob patterns supported)
    #[arg(required = true)]
    files: Vec<String>,

    /// Output path. Defaults to DOCS.md (DOCS.json with --format json)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Log parsing details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;
    let input_files = expand_globs(&cli.files)?;

    // Everything is read and rendered before the first byte is written.
    let contents = render_inputs(&input_files, renderer.as_ref())?;

    let out_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("DOCS.{}", renderer.file_extension())));
    let session = commit::Session::for_output(out_path);
    let pending = session.write(&contents)?;
    debug!(
        tmp = %session.tmp_path().display(),
        out = %session.out_path().display(),
        files = input_files.len(),
        "awaiting confirmation"
    );

    let outcome = pending.confirm(io::stdin().lock(), io::stdout())?;
    debug!(?outcome, "done");
    Ok(())
}

/// Read, parse and render every input, in order.
fn render_inputs(paths: &[PathBuf], renderer: &dyn render::Renderer) -> Result<String> {
    let docs = paths
        .iter()
        .map(|path| read_doc(path))
        .collect::<Result<Vec<_>>>()?;
    renderer.render(&docs)
}

/// Read and parse a single annotated source file.
fn read_doc(path: &Path) -> Result<model::FileDoc> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = parser::parse_file(&content);
    debug!(
        file = %path.display(),
        classes = doc.classes.len(),
        functions = doc.functions.len(),
        "parsed"
    );
    Ok(doc)
}

/// Expand glob patterns into file paths, keeping argument order.
///
/// Matches of one pattern are sorted. An existing path is used as-is; a
/// path that does not exist and matches nothing is kept literally, so
/// reading it reports the missing file.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.exists() || !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
            files.push(path.to_path_buf());
            continue;
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn glob_detection() {
        assert!(is_glob("src/*.ts"));
        assert!(is_glob("file?.ts"));
        assert!(!is_glob("src/index.ts"));
    }

    #[test]
    fn missing_literal_path_is_kept() {
        let files = expand_globs(&["does/not/exist.ts".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("does/not/exist.ts")]);
        assert!(read_doc(&files[0])
            .unwrap_err()
            .to_string()
            .contains("failed to read does/not/exist.ts"));
    }

    #[test]
    fn globs_expand_in_argument_order() {
        let dir = TempDir::new().unwrap();
        for name in ["b.ts", "a.ts", "c.js"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let js = dir.path().join("c.js").to_string_lossy().to_string();
        let ts = format!("{}/*.ts", dir.path().display());

        let files = expand_globs(&[js, ts]).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["c.js", "a.ts", "b.ts"]);
    }

    #[test]
    fn unmatched_glob_is_kept_and_fails_to_read() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.nothing", dir.path().display());

        let files = expand_globs(&[pattern.clone()]).unwrap();
        assert_eq!(files, vec![PathBuf::from(&pattern)]);

        let err = render_inputs(&files, &render::markdown::MarkdownRenderer).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn uncommitted_runs_write_identical_temporary_files() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("widget.ts");
        fs::write(
            &source,
            "@filename: widget.ts\n@class\n@name: Widget\n@function\n@name: run\n@args: x\n@function\n@class\n",
        )
        .unwrap();
        let session = commit::Session::for_output(dir.path().join("DOCS.md"));

        let mut runs = Vec::new();
        for _ in 0..2 {
            let contents =
                render_inputs(&[source.clone()], &render::markdown::MarkdownRenderer).unwrap();
            let pending = session.write(&contents).unwrap();
            runs.push(fs::read(session.tmp_path()).unwrap());
            let outcome = pending
                .confirm(io::Cursor::new("n\n"), Vec::new())
                .unwrap();
            assert_eq!(outcome, commit::Outcome::Discarded);
        }

        assert!(!runs[0].is_empty());
        assert_eq!(runs[0], runs[1]);
        assert!(!session.tmp_path().exists());
        assert!(!session.out_path().exists());
    }
}
