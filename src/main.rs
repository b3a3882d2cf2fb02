//! vimend - Inserts the end statements Vim script lets you omit

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufReader, Cursor, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use glob::Pattern;
use rayon::prelude::*;
use vimend::process::rewrite_file;
use vimend::{parse_args, CliArgs, Result};
use walkdir::WalkDir;

/// Vim script file extensions to process
const VIM_EXTENSIONS: &[&str] = &["vim"];

/// Default maximum file size in bytes (100 MB)
/// Files larger than this are skipped to prevent memory exhaustion
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn main() -> Result<()> {
    let args = parse_args();

    // Check if we should read from stdin
    let use_stdin =
        args.inputs.is_empty() || (args.inputs.len() == 1 && args.inputs[0].as_os_str() == "-");

    // If no inputs and running interactively, print usage; otherwise read from stdin
    if args.inputs.is_empty() && io::stdin().is_terminal() {
        print_usage();
        return Ok(());
    }

    if use_stdin {
        return process_stdin();
    }

    // Configure thread pool if --jobs specified
    if let Some(jobs) = args.jobs {
        if jobs > 0 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
            {
                eprintln!("Warning: failed to configure thread pool: {e}");
            }
        }
    }

    let files = collect_files(&args);

    if files.is_empty() {
        if !args.silent {
            eprintln!("No Vim script files found to rewrite.");
        }
        return Ok(());
    }

    // Sequential processing keeps stdout output in argument order
    let errors = if args.stdout || args.jobs == Some(1) {
        process_files_sequential(&files, &args)
    } else {
        process_files_parallel(&files, &args)
    };

    if errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Collect all files to process, handling directories and the recursive flag
fn collect_files(args: &CliArgs) -> Vec<PathBuf> {
    let exclude_patterns: Vec<Pattern> = args
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let custom_extensions = &args.vim_extensions;

    let mut files = Vec::new();

    for input in &args.inputs {
        if input.is_file() {
            if !is_excluded(input, &exclude_patterns) {
                files.push(input.clone());
            }
        } else if input.is_dir() {
            if args.recursive {
                // WalkDir detects symlink loops when follow_links(true) and
                // returns errors for them; those entries are skipped.
                for entry in WalkDir::new(input)
                    .follow_links(true)
                    .max_depth(256)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                {
                    let path = entry.path();
                    if path.is_file()
                        && is_vim_file(path, custom_extensions)
                        && !is_excluded(path, &exclude_patterns)
                    {
                        files.push(path.to_path_buf());
                    }
                }
            } else if let Ok(entries) = std::fs::read_dir(input) {
                for entry in entries.filter_map(std::result::Result::ok) {
                    let path = entry.path();
                    if path.is_file()
                        && is_vim_file(&path, custom_extensions)
                        && !is_excluded(&path, &exclude_patterns)
                    {
                        files.push(path);
                    }
                }
            }
        }
    }

    files
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        if pattern.matches(&path_str) {
            return true;
        }

        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Check if a file has a Vim script extension.
/// Checks against both default extensions and any custom extensions provided.
fn is_vim_file(path: &Path, custom_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            if VIM_EXTENSIONS.contains(&ext) {
                return true;
            }
            for custom in custom_extensions {
                let custom_ext = custom.strip_prefix('.').unwrap_or(custom);
                if ext == custom_ext {
                    return true;
                }
            }
            false
        })
}

/// Process files sequentially (for stdout output). Returns the error count.
fn process_files_sequential(files: &[PathBuf], args: &CliArgs) -> usize {
    let mut errors = 0;
    for path in files {
        if let Err(e) = process_single_file(path, args) {
            errors += 1;
            eprintln!("Error rewriting {}: {}", path.display(), e);
        }
    }
    errors
}

/// Process files in parallel using Rayon. Returns the error count.
fn process_files_parallel(files: &[PathBuf], args: &CliArgs) -> usize {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match process_single_file(path, args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error rewriting {}: {}", path.display(), e);
            }
        }
    });

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    if !args.silent {
        if errors == 0 {
            eprintln!("Rewrote {success} files successfully.");
        } else {
            eprintln!("Rewrote {success} files, {errors} errors.");
        }
    }

    errors
}

/// Process a single file
fn process_single_file(path: &PathBuf, args: &CliArgs) -> Result<()> {
    // Check file size BEFORE reading to prevent memory exhaustion
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();
    if file_size > DEFAULT_MAX_FILE_SIZE {
        if !args.silent {
            let size_mb = file_size / (1024 * 1024);
            let limit_mb = DEFAULT_MAX_FILE_SIZE / (1024 * 1024);
            eprintln!(
                "Skipping {} ({} MB exceeds limit of {} MB)",
                path.display(),
                size_mb,
                limit_mb
            );
        }
        return Ok(());
    }

    let mut file_contents = Vec::new();
    File::open(path)?.read_to_end(&mut file_contents)?;

    if !args.silent && !args.stdout {
        eprintln!("Rewriting: {}", path.display());
    }

    let reader = BufReader::new(Cursor::new(&file_contents));
    let mut output = Vec::new();
    rewrite_file(reader, &mut output)?;

    if args.stdout {
        io::stdout().write_all(&output)?;
    } else {
        std::fs::write(path, &output)?;
    }

    Ok(())
}

/// Process input from stdin, output to stdout
fn process_stdin() -> Result<()> {
    let stdin = io::stdin();
    let mut output = Vec::new();
    rewrite_file(stdin.lock(), &mut output)?;
    io::stdout().write_all(&output)?;
    Ok(())
}

fn print_usage() {
    println!(
        "vimend v{} - Vim script end-statement inserter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Inserts the end statements (endif, endfunction, endwhile, endfor,");
    println!("endtry, enddef, augroup end) that Vim script lets you omit when a");
    println!("block's end is unambiguous from the next line's indentation.");
    println!();
    println!("Usage:");
    println!("  vimend [OPTIONS] <FILE>...");
    println!("  vimend [OPTIONS] -r <DIRECTORY>");
    println!("  vimend [OPTIONS] -              # Read from stdin");
    println!("  cat script.vim | vimend         # Pipe input");
    println!();
    println!("Examples:");
    println!("  vimend script.vim               # Rewrite single file in-place");
    println!("  vimend *.vim                    # Rewrite multiple files");
    println!("  vimend -r plugin/               # Recursively rewrite directory");
    println!("  vimend --stdout script.vim      # Output to stdout");
    println!("  vimend - < script.vim           # Read from stdin, write to stdout");
    println!();
    println!("Options:");
    println!("  -s, --stdout                    Output to stdout instead of in-place");
    println!("  -r, --recursive                 Process directories recursively");
    println!("  -e, --exclude <PATTERN>         Exclude files/dirs matching pattern (repeatable)");
    println!("  -x, --vim <EXT>                 Additional Vim script extension (repeatable)");
    println!("  -j, --jobs <NUM>                Parallel jobs (0=auto, 1=sequential)");
    println!("  -S, --silent                    Silent mode");
    println!("  -h, --help                      Print help");
    println!();
    println!("Output always uses \\n line endings; \\r is stripped from input");
    println!("(Vim rejects stray carriage returns, see :help :source_crnl).");
}
