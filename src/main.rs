use clap::{Parser, Subcommand};
use site_theme::{ThemeDocument, catalog, compile, config, generate, output, parse, preview};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "site-theme")]
#[command(about = "Parse, format and compile site theme stylesheets")]
#[command(long_about = "\
Parse, format and compile site theme stylesheets

A theme is a CSS file of custom properties. Defaults live in :root, and the
header, nav, article, form and button regions may override them:

  :root {
    --color-bg: #ffffff;
    --color-text: #9a9996;
  }

  header {
    --color-text: #ff0000;
  }

  button,
  .button,
  input[type=\"submit\"] {
    --color-bg: #000000;
  }

  /* body_classes: dark-mode, wide */

Themes directory:

  themes/
  ├── config.toml            # Build config (optional)
  ├── 010-classic.scss       # Numbered = compiled by default, in order
  ├── 020-ocean-breeze.css
  └── draft-neon.scss        # Unnumbered = compiled only when named

Run 'site-theme gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Themes directory
    #[arg(long, default_value = "themes", global = true)]
    themes: PathBuf,

    /// Log debug information to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the themes in the themes directory
    List,
    /// Summarize a theme file, or print it as JSON
    Parse {
        /// Theme file, or '-' for stdin
        file: PathBuf,
        /// Print the parsed document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print canonical CSS for a JSON theme document
    Generate {
        /// JSON document, or '-' for stdin
        file: PathBuf,
    },
    /// Rewrite a theme file in canonical form
    Format {
        /// Theme file, or '-' for stdin
        file: PathBuf,
        /// Overwrite the file instead of printing
        #[arg(long)]
        write: bool,
    },
    /// Concatenate the configured themes into one stylesheet
    Compile {
        /// Output path (overrides compile.output)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render an HTML preview page for a theme
    Preview {
        /// Theme name (with or without number prefix)
        name: String,
        /// Output path (default: <name>-preview.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate the themes directory and config without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List => {
            let entries = catalog::scan(&cli.themes)?;
            output::print_catalog(&entries);
        }
        Command::Parse { file, json } => {
            let doc = parse(&read_input(&file)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                output::print_document(&doc);
            }
        }
        Command::Generate { file } => {
            let doc: ThemeDocument = serde_json::from_str(&read_input(&file)?)?;
            print!("{}", generate(&doc));
        }
        Command::Format { file, write } => {
            let css = generate(&parse(&read_input(&file)?));
            if write && !is_stdin(&file) {
                fs::write(&file, &css)?;
                println!("Formatted {}", file.display());
            } else {
                print!("{}", css);
            }
        }
        Command::Compile { output: out } => {
            let build_config = config::load_config(&cli.themes)?;
            let result = compile::compile(&cli.themes, &build_config)?;
            let out = out.unwrap_or_else(|| PathBuf::from(&build_config.compile.output));
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, &result.css)?;
            output::print_compile_output(&result, &out);
        }
        Command::Preview { name, output: out } => {
            let build_config = config::load_config(&cli.themes)?;
            let entries = catalog::scan(&cli.themes)?;
            let entry = catalog::find(&entries, &name, &cli.themes)?;
            let doc = compile::load_theme(&entry.path)?;
            let html = preview::render_preview(&doc, &build_config.preview.title);
            let out = out.unwrap_or_else(|| PathBuf::from(format!("{}-preview.html", entry.name)));
            fs::write(&out, html.into_string())?;
            println!("{} \u{2192} {}", entry.title, out.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.themes.display());
            let build_config = config::load_config(&cli.themes)?;
            let entries = catalog::scan(&cli.themes)?;
            let result = compile::compile_entries(&entries, &cli.themes, &build_config)?;
            output::print_catalog(&entries);
            for theme in result.themes.iter().filter(|t| t.document.root.is_empty()) {
                println!("warning: {} has no :root variables", theme.entry.name);
            }
            println!("==> Themes are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber: warnings only unless `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}
