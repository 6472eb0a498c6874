//! RegAI CLI
//!
//! Thin wrapper around regai-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Request a regenerative plan
//! regai plan --location Nairobi --size 2 --crops maize --soil loamy
//!
//! # Render plan text the way the desktop results panel does
//! regai format plan.md
//!
//! # Resolve a navigation fragment
//! regai view '#dashboard'
//!
//! # Reference data
//! regai catalog crops
//!
//! # Companion endpoint calls
//! regai weather Nakuru
//! regai tips --crop beans --soil clay
//! regai chat "When should I plant maize?"
//! regai health
//!
//! # Account operations against the configured identity backend
//! regai auth register --email farmer@example.com --password shamba123
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use regai_core::catalog::{self, CROPS, EXPERIENCE_LEVELS, GOALS, REGIONS, SOILS};
use regai_core::router::authenticate;
use regai_core::{
    default_data_dir, format_plan, humanize_auth_error, AdvisorClient, AdvisorConfig,
    CredentialMode, NamedView, PlanReply, PlanRequest, PlanTrust, PLAN_FAILURE_ALERT,
};

/// RegAI - Regenerative Agriculture Advisor
#[derive(Parser)]
#[command(name = "regai")]
#[command(version = "0.1.0")]
#[command(about = "RegAI - Regenerative Agriculture Advisor")]
#[command(
    long_about = "Personalized regenerative farming plans for Kenyan smallholder farmers, from the command line."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding config.json (default: ~/.regai)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Advisor endpoint, overrides config and REGAI_ENDPOINT
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a regenerative farm plan
    Plan {
        /// County or town
        #[arg(short, long)]
        location: String,
        /// Farm size in acres
        #[arg(short, long)]
        size: String,
        /// Crops grown, comma separated
        #[arg(short, long)]
        crops: String,
        /// Soil type (see `regai catalog soils`)
        #[arg(long)]
        soil: String,
        #[arg(long, default_value = "beginner")]
        experience: String,
        #[arg(long, default_value = "improve_soil")]
        goals: String,
        /// Print the rendered HTML instead of the raw plan text
        #[arg(long)]
        html: bool,
    },

    /// Render plan text to HTML (reads stdin when no file is given)
    Format {
        file: Option<PathBuf>,
        /// Skip HTML escaping of the input
        #[arg(long)]
        verbatim: bool,
    },

    /// Resolve a URL or fragment to the named view it shows
    View {
        /// e.g. `#dashboard` or `regai://app/#chatbot`
        target: Option<String>,
    },

    /// Show reference data
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
    },

    /// Current weather for a county
    Weather { county: String },

    /// Short tips for a crop and soil
    Tips {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        soil: String,
    },

    /// Ask the advisor a question
    Chat { message: String },

    /// Check the advisor endpoint
    Health,

    /// Account operations
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
    Crops,
    Soils,
    Regions,
    Options,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in to an existing account
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AdvisorConfig> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let mut config = AdvisorConfig::resolve(&data_dir)
        .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    Ok(config)
}

fn print_catalog(kind: CatalogKind) {
    match kind {
        CatalogKind::Crops => {
            for crop in CROPS {
                println!("{} ({})", crop.label(), crop.key);
                println!("  Seasons:    {}", crop.planting_seasons.join(", "));
                println!("  Companions: {}", crop.companion_crops.join(", "));
                println!("  Cover:      {}", crop.cover_crops.join(", "));
                println!("  Soil pH:    {}", crop.soil_ph);
                println!("  Rainfall:   {}", crop.rainfall_needs);
            }
        }
        CatalogKind::Soils => {
            for soil in SOILS {
                println!("{:<14} {}", soil.key, soil.description);
            }
        }
        CatalogKind::Regions => {
            for region in REGIONS {
                println!("{}: {}", region.label(), region.counties.join(", "));
            }
            println!();
            println!("{} counties", catalog::counties().len());
        }
        CatalogKind::Options => {
            println!("Experience:");
            for (key, label) in EXPERIENCE_LEVELS {
                println!("  {:<14} {}", key, label);
            }
            println!("Goals:");
            for (key, label) in GOALS {
                println!("  {:<22} {}", key, label);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match &cli.command {
        Commands::Plan {
            location,
            size,
            crops,
            soil,
            experience,
            goals,
            html,
        } => {
            let config = load_config(&cli)?;
            let client = AdvisorClient::new(&config.endpoint)?;
            let request = PlanRequest {
                location: location.clone(),
                size: size.clone(),
                crops: crops.clone(),
                soil_type: soil.clone(),
                experience: experience.clone(),
                goals: goals.clone(),
            };

            match client.generate_plan(&request).await {
                Ok(PlanReply::Ready { weather, plan }) => {
                    println!(
                        "Weather: {}°C, {}% humidity, {}",
                        regai_core::plan::js_number(weather.temperature),
                        regai_core::plan::js_number(weather.humidity),
                        weather.description
                    );
                    println!();
                    if *html {
                        println!("{}", format_plan(&plan, config.plan_trust));
                    } else {
                        println!("{}", plan);
                    }
                }
                Ok(PlanReply::Rejected { message }) => {
                    eprintln!("{}", PLAN_FAILURE_ALERT);
                    anyhow::bail!("Plan request rejected: {}", message);
                }
                Err(e) => {
                    eprintln!("{}", PLAN_FAILURE_ALERT);
                    return Err(e.into());
                }
            }
        }

        Commands::Format { file, verbatim } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let trust = if *verbatim {
                PlanTrust::Verbatim
            } else {
                PlanTrust::Escaped
            };
            println!("{}", format_plan(&text, trust));
        }

        Commands::View { target } => {
            let view = match target.as_deref() {
                Some(t) if t.contains("://") => NamedView::from_url(t),
                other => NamedView::from_fragment(other),
            };
            println!("{}", view);
        }

        Commands::Catalog { kind } => print_catalog(*kind),

        Commands::Weather { county } => {
            let config = load_config(&cli)?;
            let weather = AdvisorClient::new(&config.endpoint)?.weather(county).await?;
            println!("{}", county);
            println!("  Temperature: {}°C", regai_core::plan::js_number(weather.temperature));
            println!("  Humidity:    {}%", regai_core::plan::js_number(weather.humidity));
            println!("  Conditions:  {}", weather.description);
            if let Some(rain) = weather.rainfall {
                println!("  Rainfall:    {} mm", regai_core::plan::js_number(rain));
            }
            if let Some(region) = catalog::region_of(county) {
                println!("  Region:      {}", region.label());
            }
        }

        Commands::Tips { crop, soil } => {
            let config = load_config(&cli)?;
            let tips = AdvisorClient::new(&config.endpoint)?
                .quick_tips(crop, soil)
                .await?;
            println!("{}", tips);
        }

        Commands::Chat { message } => {
            let config = load_config(&cli)?;
            let reply = AdvisorClient::new(&config.endpoint)?.chat(message).await?;
            println!("{}", reply);
        }

        Commands::Health => {
            let config = load_config(&cli)?;
            let health = AdvisorClient::new(&config.endpoint)?.health().await?;
            println!("Endpoint: {}", config.endpoint);
            println!("Status:   {}", health.status);
            println!("Checked:  {}", health.timestamp);
            println!(
                "Advisor:  {}",
                if health.gemini_available { "available" } else { "unavailable" }
            );
            println!(
                "Weather:  {}",
                if health.weather_available { "available" } else { "unavailable" }
            );
        }

        Commands::Auth { action } => {
            let config = load_config(&cli)?;
            let provider = config.build_identity();
            let (mode, email, password) = match action {
                AuthAction::Register { email, password } => {
                    (CredentialMode::Register, email, password)
                }
                AuthAction::SignIn { email, password } => (CredentialMode::SignIn, email, password),
            };

            match authenticate(provider.as_ref(), mode, email, password).await {
                Ok(session) => {
                    println!("{} via {}", mode.title(), provider.name());
                    if let Some(identity) = session.identity {
                        println!("  Email: {}", identity.email_address);
                        if let Some(user_id) = identity.user_id {
                            println!("  User:  {}", user_id);
                        }
                    }
                }
                Err(e) => {
                    anyhow::bail!("Authentication failed: {}", humanize_auth_error(&e.message))
                }
            }
        }
    }

    Ok(())
}
