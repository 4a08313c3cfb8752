use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use loppers_files::{
    concatenate_files, find_files, get_tree, ConcatOptions, DiscoveryConfig,
};
use loppers_skeleton::{language_for_path, SkeletonExtractor};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

/// Write to `output` when given, otherwise to stdout
fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Written to {}", path.display());
            Ok(())
        }
        None => print_stdout(text),
    }
}

#[derive(Parser)]
#[command(name = "loppers")]
#[command(about = "Extract source file skeletons using tree-sitter queries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract skeleton from a file or stdin
    #[command(after_help = "Examples:\n  \
        loppers extract file.py\n  \
        cat file.py | loppers extract -l python")]
    Extract(ExtractArgs),

    /// Concatenate discovered files, reducing sources to skeletons
    Concatenate(ConcatenateArgs),

    /// Show directory tree of discovered files
    Tree(TreeArgs),

    /// List discovered files
    Files(FilesArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// File to extract (omit to read stdin)
    file: Option<PathBuf>,

    /// Language (auto-detected from the extension when FILE is given)
    #[arg(short, long)]
    language: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output JSON with extraction counters
    #[arg(long)]
    json: bool,
}

/// Flags shared by the directory-based commands
#[derive(Args)]
struct DiscoveryArgs {
    /// Root directory to process
    root: PathBuf,

    /// Only look at the root's immediate files
    #[arg(long)]
    no_recursive: bool,

    /// Extra ignore pattern in gitignore syntax (repeatable)
    #[arg(short = 'I', long = "ignore-pattern")]
    ignore_patterns: Vec<String>,

    /// Disable built-in ignore patterns
    #[arg(long)]
    no_default_ignore: bool,

    /// Don't read the root .gitignore
    #[arg(long)]
    no_gitignore: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DiscoveryArgs {
    fn config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            recursive: !self.no_recursive,
            ignore_patterns: self.ignore_patterns.clone(),
            use_default_ignore: !self.no_default_ignore,
            respect_gitignore: !self.no_gitignore,
        }
    }
}

#[derive(Args)]
struct ConcatenateArgs {
    #[command(flatten)]
    discovery: DiscoveryArgs,

    /// Include original files without skeleton extraction
    #[arg(long)]
    no_extract: bool,
}

#[derive(Args)]
struct TreeArgs {
    #[command(flatten)]
    discovery: DiscoveryArgs,

    /// Collapse chains of single-child directories (e.g. main/java/com/example)
    #[arg(long)]
    collapse_single_dirs: bool,
}

#[derive(Args)]
struct FilesArgs {
    #[command(flatten)]
    discovery: DiscoveryArgs,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ExtractOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    language: &'static str,
    skeleton: String,
    captures: usize,
    removed_lines: usize,
    degraded: bool,
}

#[derive(Serialize)]
struct FilesOutput {
    root: String,
    count: usize,
    files: Vec<String>,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Concatenate(args) => run_concatenate(args),
        Commands::Tree(args) => run_tree(args),
        Commands::Files(args) => run_files(args),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let (source, language) = match &args.file {
        Some(path) => {
            if !path.is_file() {
                bail!("File not found: {}", path.display());
            }
            let source = fs::read_to_string(path)
                .with_context(|| format!("Could not read file as text: {}", path.display()))?;
            let language = match &args.language {
                Some(language) => language.clone(),
                None => match language_for_path(path) {
                    Some(language) => language.to_string(),
                    None => bail!(
                        "Could not auto-detect language from {}",
                        path.display()
                    ),
                },
            };
            (source, language)
        }
        None => {
            let Some(language) = args.language.clone() else {
                bail!("Language required when reading from stdin (use -l/--language)");
            };
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            (source, language)
        }
    };

    let mut extractor = SkeletonExtractor::new(&language)?;
    let skeleton = extractor.extract_with_report(&source)?;

    if args.json {
        let output = ExtractOutput {
            file: args.file.as_ref().map(|p| p.display().to_string()),
            language: skeleton.language,
            skeleton: skeleton.text,
            captures: skeleton.captures,
            removed_lines: skeleton.removed_lines,
            degraded: skeleton.degraded,
        };
        emit(&serde_json::to_string_pretty(&output)?, args.output.as_deref())
    } else {
        emit(&skeleton.text, args.output.as_deref())
    }
}

fn run_concatenate(args: ConcatenateArgs) -> Result<()> {
    let root = &args.discovery.root;
    let files = find_files(root, &args.discovery.config())?;
    if files.is_empty() {
        bail!("No files found under {}", root.display());
    }

    let options = ConcatOptions {
        extract: !args.no_extract,
        ignore_not_found: true,
    };
    let bundle = concatenate_files(root, &files, &options)
        .with_context(|| format!("Failed to concatenate files under {}", root.display()))?;

    emit(&bundle, args.discovery.output.as_deref())
}

fn run_tree(args: TreeArgs) -> Result<()> {
    let tree = get_tree(
        &args.discovery.root,
        &args.discovery.config(),
        args.collapse_single_dirs,
    )?;
    emit(&tree, args.discovery.output.as_deref())
}

fn run_files(args: FilesArgs) -> Result<()> {
    let root = &args.discovery.root;
    let files = find_files(root, &args.discovery.config())?;

    if args.json {
        let output = FilesOutput {
            root: root.display().to_string(),
            count: files.len(),
            files,
        };
        return emit(
            &serde_json::to_string_pretty(&output)?,
            args.discovery.output.as_deref(),
        );
    }

    if files.is_empty() {
        log::warn!("No files found under {}", root.display());
        return Ok(());
    }
    emit(&files.join("\n"), args.discovery.output.as_deref())
}
