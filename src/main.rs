use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vibecheck::config::VibecheckConfig;
use vibecheck::error::VibecheckError;
use vibecheck::posts::load_posts;
use vibecheck::report::{render, ReportOptions};
use vibecheck::{analyze, parse_date};

#[derive(Parser, Debug)]
#[command(
    name = "vibecheck",
    about = "Social media mood analyzer with contact timing recommendations"
)]
struct Cli {
    /// Path to a JSON file with social media posts
    #[arg(long, required_unless_present = "print_config")]
    input: Option<PathBuf>,
    /// Target date for analysis (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    /// Show detailed analysis
    #[arg(long)]
    verbose: bool,
    /// Analyze optimal contact timing
    #[arg(long)]
    contact: bool,
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, _) = VibecheckConfig::load(cli.config).map_err(|err| err.to_string())?;

    if cli.print_config {
        let payload = config
            .to_toml()
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        print!("{}", payload);
        return Ok(());
    }

    let input = cli
        .input
        .ok_or_else(|| "missing --input path".to_string())?;
    let target = cli
        .date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(|err: VibecheckError| err.to_string())?;
    let posts = load_posts(&input).map_err(|err| err.to_string())?;

    let analysis = analyze(&posts, target, &config);
    let options = ReportOptions {
        contact: cli.contact,
        verbose: cli.verbose,
    };
    print!("{}", render(&analysis, &options));

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vibecheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
