use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use setlist_builder::catalog::suggest;
use setlist_builder::{
    BuildRequest, Config, GenreFilter, GenreGroup, MinSec, SetlistApiClient, SetlistBuilder,
    SongGenre, SongMood, SongQuery,
};

#[derive(Parser)]
#[command(name = "setlist-builder")]
#[command(about = "Build multi-set setlists from a song catalog server")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a setlist split across one to three sets
    Build {
        /// Song title to search for
        #[arg(long, default_value = "")]
        title: String,

        /// Artist to search for
        #[arg(long, default_value = "")]
        artist: String,

        /// Genre or genre group (see `genres`)
        #[arg(long)]
        genre: Option<String>,

        /// Mood (see `moods`)
        #[arg(long)]
        mood: Option<String>,

        /// Number of sets to build
        #[arg(long, default_value_t = 1)]
        sets: usize,

        /// Duration per set as M:SS, repeat once per set
        #[arg(short, long = "duration", value_name = "M:SS", default_value = "10:00")]
        durations: Vec<String>,

        /// Let the server repeat songs to fill the time
        #[arg(long)]
        allow_reuse: bool,

        /// Setlist server base URL (or set SETLIST_API_URL env var)
        #[arg(long)]
        api_url: Option<String>,

        /// Also write the result as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List genres and genre groups
    Genres,

    /// List moods and the moods related to each
    Moods,

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            title,
            artist,
            genre,
            mood,
            sets,
            durations,
            allow_reuse,
            api_url,
            output,
        } => {
            let query = SongQuery::default()
                .with_title(title)
                .with_artist(artist)
                .with_genre(parse_genre(genre.as_deref())?)
                .with_mood(parse_mood(mood.as_deref())?)
                .allow_reuse(allow_reuse);

            let request = BuildRequest {
                query,
                set_count: sets,
                durations: durations.iter().map(|d| MinSec::parse(d)).collect(),
            };

            build(request, api_url, output).await?;
        }
        Commands::Genres => list_genres(),
        Commands::Moods => list_moods(),
        Commands::Setup => show_setup_guide(),
    }

    Ok(())
}

async fn build(request: BuildRequest, api_url: Option<String>, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "Setlist Builder".cyan().bold());
    println!("{}", "=".repeat(50));

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = api_url {
        config = config.with_api_url(url);
    }

    let missing = config.get_missing_config();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Please copy .env.example to .env and fill in your settings.".yellow()
        );
        std::process::exit(1);
    }

    let client = SetlistApiClient::new(&config).context("Failed to create setlist API client")?;
    let builder = SetlistBuilder::new(client).with_progress(true);

    let report = builder
        .build(&request)
        .await
        .context("Failed to build setlist")?;

    report.print();

    if let Some(path) = output {
        report
            .save(&path)
            .with_context(|| format!("Failed to save setlist to {}", path.display()))?;
        println!("\n{} {}", "Saved to".green(), path.display());
    }

    println!("\n{}", "Done.".green());

    Ok(())
}

fn parse_genre(raw: Option<&str>) -> Result<Option<GenreFilter>> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };

    match GenreFilter::resolve(raw) {
        Some(filter) => Ok(Some(filter)),
        None => match suggest(raw, GenreFilter::known_names()) {
            Some(name) => bail!("Unknown genre '{}'. Did you mean {}?", raw, name),
            None => bail!("Unknown genre '{}'. Run `setlist-builder genres` for the list.", raw),
        },
    }
}

fn parse_mood(raw: Option<&str>) -> Result<Option<SongMood>> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<SongMood>() {
        Ok(mood) => Ok(Some(mood)),
        Err(()) => match suggest(raw, SongMood::ALL.iter().map(|m| m.as_str())) {
            Some(name) => bail!("Unknown mood '{}'. Did you mean {}?", raw, name),
            None => bail!("Unknown mood '{}'. Run `setlist-builder moods` for the list.", raw),
        },
    }
}

fn list_genres() {
    println!("{}", "Genre Groups".cyan().bold());
    println!("{}", "=".repeat(50));
    for group in GenreGroup::ALL {
        let members: Vec<&str> = group.members().iter().map(|g| g.as_str()).collect();
        println!("{:18} {}", group.as_str().green(), members.join(", "));
    }

    println!("\n{}", "Genres".cyan().bold());
    println!("{}", "=".repeat(50));
    let names: Vec<&str> = SongGenre::ALL.iter().map(|g| g.as_str()).collect();
    for row in names.chunks(6) {
        println!("  {}", row.join(", "));
    }
}

fn list_moods() {
    println!("{}", "Moods".cyan().bold());
    println!("{}", "=".repeat(50));
    for mood in SongMood::ALL {
        let related: Vec<&str> = mood.related().iter().map(|m| m.as_str()).collect();
        println!("{:12} {}", mood.as_str().green(), related.join(", ").dimmed());
    }
}

fn show_setup_guide() {
    println!("{}", "Setlist Builder Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Server".yellow());
    println!("   - Start the setlist server (defaults to http://localhost:8080)");
    println!("   - Make sure POST /api/setlist is reachable from this machine");

    println!("\n{}", "2. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     SETLIST_API_URL=http://localhost:8080");
    println!("     SETLIST_API_TIMEOUT_SECS=30");

    println!("\n{}", "3. Usage".yellow());
    println!("   - setlist-builder genres                              (list genres)");
    println!("   - setlist-builder moods                               (list moods)");
    println!("   - setlist-builder build --artist \"Queen\" -d 20:00     (one 20 minute set)");
    println!("   - setlist-builder build --title Gig --sets 2 -d 15:00 -d 12:30");
    println!("   - setlist-builder build --artist Queen -o gig.json    (save as JSON)");

    println!("\n{}", "Limits".yellow());
    println!("   - Up to 3 sets, minutes and seconds each clamped to 0-59");
    println!("   - Combined duration must be between 0:01 and 59:59");

    println!("\n{}", "Ready to build!".green());
}
