use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sitegen::Config;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Generate a static HTML site from a tree of Markdown documents")]
struct Cli {
    /// Project root containing the content, static and template sources
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output directory (overrides sitegen.toml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log each generated page and copied asset
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::load(&cli.root.join("sitegen.toml")).rooted(&cli.root);
    if let Some(output) = cli.output {
        config.output = output;
    }

    if let Err(e) = sitegen::generate_site(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Site generated in {}", config.output.display());
}
