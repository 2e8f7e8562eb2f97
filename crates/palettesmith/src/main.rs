use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use palettesmith::commands::catalog::{run as catalog, CatalogArgs};
use palettesmith::commands::check::{run as check, CheckArgs};
use palettesmith::commands::classify::{run as classify, ClassifyArgs};
use palettesmith::commands::css::{run as css, CssArgs};
use palettesmith::commands::export::{run as export, ExportArgs, Format};
use palettesmith::commands::generate::{run as generate, GenerateArgs};
use palettesmith::commands::harmony::{
    run as harmony, HarmonyArgs, HarmonyKind, DEFAULT_ANALOGOUS_COUNT,
};
use palettesmith::commands::name::{run as name, NameArgs};
use palettesmith::Error;

#[derive(Parser, Debug, Clone)]
#[command(about = "Palettesmith, a report theme generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    /// Show more diagnostics. Repeat for more detail.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    // RUST_LOG still wins over the flag.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate a Power BI theme from a palette file
    Generate {
        palette: PathBuf,
        out: PathBuf,
        /// Include per-visual styles
        #[arg(long)]
        visuals: bool,
        /// Also write semantic.tokens.json
        #[arg(long)]
        semantic: bool,
        /// Also write theme.vars.css
        #[arg(long)]
        css: bool,
        /// Style overrides to merge into the visual styles
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Directory for the side files. Defaults to the theme's directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Write data colors as uppercase hex
        #[arg(long)]
        uppercase: bool,
    },
    /// Print the CSS variables for a palette file
    Css { palette: PathBuf },
    /// Print the tags for a list of colors
    Classify {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print a generated name for a list of colors
    Name {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Check a theme file before uploading it
    Check { theme: PathBuf },
    /// Build a color harmony from a base color
    Harmony {
        base: String,
        #[arg(long, value_enum, default_value_t)]
        kind: HarmonyKind,
        #[arg(long, default_value_t = DEFAULT_ANALOGOUS_COUNT)]
        count: usize,
    },
    /// Export a palette as a downloadable bundle
    Export {
        palette: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        format: Format,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// List palettes from a feed, or the built-in presets
    Catalog {
        #[arg(long)]
        feed: Option<PathBuf>,
        #[arg(long, default_value = "all")]
        category: String,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();
    init_logging(args.verbose);

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Generate {
            palette,
            out,
            visuals,
            semantic,
            css,
            mapping,
            out_dir,
            uppercase,
        }) => generate(GenerateArgs {
            palette: &palette,
            out: &out,
            out_dir: out_dir.as_deref(),
            mapping: mapping.as_deref(),
            visuals,
            semantic,
            css,
            uppercase,
            stdout: &mut stdout,
        }),
        Some(Commands::Css { palette }) => css(CssArgs {
            palette: &palette,
            stdout: &mut stdout,
        }),
        Some(Commands::Classify { colors }) => classify(ClassifyArgs {
            colors: &colors,
            stdout: &mut stdout,
        }),
        Some(Commands::Name { colors }) => name(NameArgs {
            colors: &colors,
            stdout: &mut stdout,
        }),
        Some(Commands::Check { theme }) => check(CheckArgs {
            theme: &theme,
            stdout: &mut stdout,
        }),
        Some(Commands::Harmony { base, kind, count }) => harmony(HarmonyArgs {
            base: &base,
            kind,
            count,
            stdout: &mut stdout,
        }),
        Some(Commands::Export {
            palette,
            format,
            out_dir,
        }) => export(ExportArgs {
            palette: &palette,
            format,
            out_dir: &out_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Catalog { feed, category }) => catalog(CatalogArgs {
            feed: feed.as_deref(),
            category: &category,
            stdout: &mut stdout,
        }),
        None => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => {}
        // Already listed by the command.
        Err(Error::FailedChecks(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
