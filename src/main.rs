//! CLI entry point for tree-scribe

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{LevelFilter, debug};
use tree_scribe::{
    ColorScheme, ExclusionSet, Renderer, ScanError, TreeWalker, WalkerConfig, export_markdown,
    print_json, print_report,
};

#[derive(Parser, Debug)]
#[command(name = "tree-scribe")]
#[command(about = "Generate and optionally export a directory tree structure")]
#[command(version)]
struct Args {
    /// Path to the root directory
    directory: PathBuf,

    /// Export the directory structure to directory_structure.md inside the root
    #[arg(short = 'm', long = "export-md")]
    export_md: bool,

    /// Limit the depth of directory traversal (0 = root's children only)
    #[arg(short = 'd', long = "depth", value_name = "N")]
    depth: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable colorful output (ignored with --export-md and --json)
    #[arg(short, long)]
    color: bool,

    /// Show file sizes and line counts
    #[arg(short, long)]
    size: bool,

    /// Do not skip the default excluded directories (.git, node_modules, ...)
    #[arg(short, long)]
    all: bool,

    /// Also exclude directories matching NAME or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Print the result as JSON instead of the tree report
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> tree_scribe::Result<()> {
    if !args.directory.is_dir() {
        return Err(ScanError::InvalidRoot(args.directory.clone()));
    }

    let mut exclude = if args.all {
        ExclusionSet::empty()
    } else {
        ExclusionSet::default()
    };
    for pattern in &args.ignore {
        exclude.add(pattern);
    }

    let config = WalkerConfig {
        max_depth: args.depth,
        show_size: args.size,
        exclude,
    };

    // Exported and machine-readable output is always plain
    let scheme = ColorScheme::from_flag(args.color && !args.export_md && !args.json);
    debug!("walking '{}' with {:?}", args.directory.display(), config);

    let walker = TreeWalker::new(config).with_renderer(Renderer::new(scheme));
    let result = walker.walk(&args.directory);

    if args.json {
        print_json(&args.directory, &result)?;
    } else {
        print_report(&result)?;
    }

    if args.export_md {
        export_markdown(&args.directory, &result.tree)?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("tree-scribe: {}", e);
        process::exit(1);
    }
}
