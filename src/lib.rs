// src/lib.rs

pub mod cli;
pub mod dag;
pub mod document;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::dag::{BatchScheduler, BatchSequence, sort_pairs};
use crate::document::{derive_output_path, format_for_path, load_from_path, render_document, write_output};
use crate::errors::TaskSortError;
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - input path (argument or interactive prompt)
/// - document loading
/// - the batch scheduler
/// - output rendering / writing
pub async fn run(args: CliArgs) -> Result<()> {
    let input = match args.input {
        Some(ref path) => PathBuf::from(path),
        None => prompt_for_path().await?,
    };
    let fs = RealFileSystem;

    if args.dry_run {
        let doc = load_from_path(&fs, &input)?;
        let scheduler = BatchScheduler::from_pairs(&doc.pairs);
        print!("{}", describe_graph(&scheduler));
        return Ok(());
    }

    let result = if args.stdout {
        sort_document(&fs, &input).and_then(|batches| {
            let format = format_for_path(&input)?;
            render_document(&batches, format)
        })
        .map(|rendered| println!("{rendered}"))
    } else {
        let output = args.output.as_deref().map(Path::new);
        sort_to_file(&fs, &input, output).map(|path| {
            println!();
            println!("Your output file is: {}", path.display());
        })
    };

    match result {
        Ok(()) => Ok(()),
        Err(TaskSortError::CyclicDependency(report)) => {
            eprintln!();
            eprintln!("ERROR:");
            eprintln!("Cyclical dependencies present. The task sequence cannot be sorted");
            eprintln!("  {report}");
            bail!("no output written for {}", input.display())
        }
        Err(e) => Err(e).with_context(|| format!("sorting {}", input.display())),
    }
}

/// Load a dependency document and sort it.
///
/// A cycle comes back as [`TaskSortError::CyclicDependency`].
pub fn sort_document(fs: &dyn FileSystem, input: &Path) -> errors::Result<BatchSequence> {
    let doc = load_from_path(fs, input)?;
    sort_pairs(&doc.pairs).into_result()
}

/// Load, sort and write the task sequence, returning the output path.
///
/// Nothing is written when the document cannot be loaded or contains a cycle.
pub fn sort_to_file(
    fs: &dyn FileSystem,
    input: &Path,
    output: Option<&Path>,
) -> errors::Result<PathBuf> {
    let batches = sort_document(fs, input)?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input)?,
    };
    write_output(fs, &output, &batches)?;

    Ok(output)
}

/// Human-readable dump of the registry and prerequisite lists.
pub fn describe_graph(scheduler: &BatchScheduler) -> String {
    let registry = scheduler.registry();
    let graph = scheduler.graph();

    let mut out = String::new();
    out.push_str("tasksort dry-run\n");
    out.push_str(&format!(
        "tasks ({}), dependencies ({}):\n",
        registry.count(),
        graph.edge_count()
    ));

    for (id, name) in registry.entries() {
        out.push_str(&format!("  {id} {name}\n"));
        let after: Vec<&str> = graph
            .prerequisites_of(id)
            .iter()
            .map(|p| registry.name_of(*p))
            .collect();
        if !after.is_empty() {
            out.push_str(&format!("      after: {}\n", after.join(", ")));
        }
    }

    debug!("dry-run complete (no sorting)");
    out
}

/// Ask for the input path on stdout and read one line from stdin.
async fn prompt_for_path() -> Result<PathBuf> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Input the full path to your JSON file: \n")
        .await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let line = lines
        .next_line()
        .await?
        .context("no input path provided on stdin")?;

    let trimmed = line.trim().trim_matches('"');
    if trimmed.is_empty() {
        bail!("no input path provided on stdin");
    }

    info!(path = %trimmed, "input path read from prompt");
    Ok(PathBuf::from(trimmed))
}
