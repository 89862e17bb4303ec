use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use i18n_inspector::{
    run_scan, transform_file, BuildHook, I18nInspector, InspectorConfig, MarkerFormatter, Mode,
    ScanQuery, SimpleFormatter,
};
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::process;

/// i18n inspector - tag translated Vue template output with its source location
#[derive(Parser, Debug)]
#[command(name = "i18n-inspector")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// JSON config file (defaults to ./i18n-inspector.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite components, annotating translated interpolations
    Transform {
        /// Component files to rewrite
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Write rewritten files here instead of printing them
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Project root marker paths are made relative to (default: current directory)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Print the transform result as JSON (code, map, markers)
        #[arg(long, conflicts_with = "out_dir")]
        json: bool,
    },
    /// List the markers every component under a directory would receive
    Scan {
        /// Directory to scan
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Additional directory names to skip (comma separated)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Also scan files ignored by .gitignore
        #[arg(long)]
        no_ignore: bool,

        /// Machine-readable output: file:line:column:key
        #[arg(long)]
        simple: bool,
    },
    /// Print the browser overlay script
    Client,
    /// Print an HTML document with the overlay script tag injected
    Inject {
        /// HTML entry document
        #[arg(value_name = "HTML_FILE")]
        html: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Transform {
            files,
            out_dir,
            root,
            json,
        } => {
            let root = match root {
                Some(root) => root,
                None => match config.root.clone() {
                    Some(root) => root,
                    None => env::current_dir().context("Failed to read current directory")?,
                },
            };
            run_transform(config.with_root(root), &files, out_dir.as_deref(), json)
        }
        Commands::Scan {
            dir,
            exclude,
            no_ignore,
            simple,
        } => {
            let query = ScanQuery::new()
                .with_base_dir(dir.clone())
                .with_exclusions(exclude)
                .with_respect_gitignore(!no_ignore);
            let report = run_scan(query, &config)
                .with_context(|| format!("Failed to scan {}", dir.display()))?;

            if simple {
                print!("{}", SimpleFormatter::new().format(&report));
            } else {
                print!("{}", MarkerFormatter::new().format(&report, &dir));
            }
            Ok(())
        }
        Commands::Client => {
            let plugin = I18nInspector::new(&config, Mode::Serve)?;
            print!("{}", plugin.client().render());
            Ok(())
        }
        Commands::Inject { html } => {
            let plugin = I18nInspector::new(&config, Mode::Serve)?;
            let document = fs::read_to_string(&html)
                .with_context(|| format!("Failed to read {}", html.display()))?;
            let output = plugin.transform_index_html(&document).unwrap_or(document);
            print!("{}", output);
            Ok(())
        }
    }
}

/// Explicit config file, else ./i18n-inspector.json, else defaults
fn load_config(path: Option<&Path>) -> Result<InspectorConfig> {
    match path {
        Some(path) => InspectorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            Ok(InspectorConfig::discover(&cwd)?)
        }
    }
}

fn run_transform(
    config: InspectorConfig,
    files: &[PathBuf],
    out_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let plugin = I18nInspector::new(&config, Mode::Build)?;
    let root = config.root.clone().unwrap_or_else(|| PathBuf::from("."));

    for file in files {
        let output = transform_file(file, &plugin)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        let Some(output) = output else {
            eprintln!("{} {}", "unchanged".dimmed(), file.display());
            continue;
        };

        if json {
            println!("{}", SimpleFormatter::new().format_transform(&output));
        } else if let Some(out_dir) = out_dir {
            let target = out_dir.join(output_relative_path(file, &root));
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&target, &output.code)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            eprintln!(
                "{} {} ({} marker(s))",
                "wrote".green(),
                target.display(),
                output.markers.len()
            );
        } else {
            print!("{}", output.code);
        }
    }

    Ok(())
}

/// Where a transformed file lands under the output directory.
///
/// The result never climbs out of the output directory: paths with `..`
/// or that sit outside `root` fall back to the bare file name.
fn output_relative_path(file: &Path, root: &Path) -> PathBuf {
    let relative = match file.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) if file.is_relative() => file,
        Err(_) => Path::new(""),
    };

    let stays_inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if stays_inside && relative.file_name().is_some() {
        return relative.to_path_buf();
    }
    file.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("component.vue"))
}
