mod logging;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use design_patterns::{catalog, CatalogConfig, Category, DemoEntry};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run the SOLID and design pattern examples.")]
struct CommandLine {
    /// TOML file with gateway settings (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available examples
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Run one or more examples by name
    #[command(alias = "r")]
    Run {
        names: Vec<String>,

        /// Run every example in catalog order
        #[arg(long, conflicts_with = "names")]
        all: bool,
    },
    /// Print the effective configuration with secrets redacted
    ShowConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Solid,
    Creational,
    Structural,
    Behavioral,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Solid => Category::Solid,
            CategoryArg::Creational => Category::Creational,
            CategoryArg::Structural => Category::Structural,
            CategoryArg::Behavioral => Category::Behavioral,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CatalogConfig> {
    match path {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CatalogConfig::default()),
    }
}

fn header(entry: &DemoEntry) {
    let title = format!("⟦ {} · {} ⟧", entry.name, entry.category);
    println!("{}", title.to_uppercase().bright_green().bold());
}

fn list(category: Option<Category>) {
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    for category in categories {
        println!("{}", category.as_str().to_uppercase().bold());
        for entry in catalog::by_category(category) {
            println!("  {:<26} {}", entry.name.cyan(), entry.summary.dimmed());
        }
    }
}

fn run(names: &[String], all: bool, config: &CatalogConfig) -> Result<()> {
    let entries: Vec<&DemoEntry> = if all {
        catalog().iter().collect()
    } else {
        if names.is_empty() {
            bail!("no example named; pass one or more names or --all");
        }
        names
            .iter()
            .map(|name| catalog::find(name))
            .collect::<Result<_, _>>()
            .context("see `patterns list` for the available examples")?
    };

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        header(entry);
        for line in &entry.execute(config) {
            println!("{line}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = CommandLine::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!("configuration ready");

    match cli.command {
        Commands::List { category } => {
            list(category.map(Category::from));
            Ok(())
        }
        Commands::Run { names, all } => run(&names, all, &config),
        Commands::ShowConfig => {
            println!("{config}");
            Ok(())
        }
    }
}
