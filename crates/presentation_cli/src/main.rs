//! madtrans CLI
//!
//! Answers EMT Madrid transit queries from the command line, or relays
//! chat-framework messages read from stdin.

#![allow(clippy::print_stdout)]

mod relay;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{HandlerRegistry, LocaleResolver, QueryService, UserProfileStore};
use clap::{Parser, Subcommand};
use domain::{MessageFields, Query, QueryKind};
use infrastructure::{AppConfig, EmtApiAdapter, FileUserProfileStore, InMemoryUserProfileStore};
use tokio::io::BufReader;
use tracing::{debug, info};

use crate::relay::RelayDefaults;

/// madtrans CLI
#[derive(Parser)]
#[command(name = "madtrans")]
#[command(author, version, about = "EMT Madrid transit queries", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./madtrans.toml if present)
    #[arg(short, long, env = "MADTRANS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Identity the reply is addressed to; prints a JSON relay message
    #[arg(long, global = true)]
    sender: Option<String>,

    /// Channel hint passed back as `relayto`
    #[arg(long, global = true)]
    src: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Service calendar between two dates (dd/mm/yyyy or dd-mm-yyyy)
    Calendar {
        /// First day
        #[arg(long)]
        sdate: String,

        /// Last day
        #[arg(long)]
        edate: String,
    },

    /// Lines and their terminals on a date
    LineList {
        /// Date of service
        #[arg(long)]
        date: String,

        /// Line ids, space or pipe separated (default: all lines)
        #[arg(long, default_value = "")]
        lines: String,
    },

    /// Stops and the lines serving them
    StopList {
        /// Stop ids (default: all stops)
        stops: Vec<String>,
    },

    /// Stops along a line's route
    RouteStops {
        /// Date of service
        #[arg(long)]
        date: String,

        /// Line id
        #[arg(long)]
        line: String,
    },

    /// First and last services of a line
    LineSchedule {
        /// Date of service
        #[arg(long)]
        date: String,

        /// Line id
        #[arg(long)]
        line: String,
    },

    /// Real-time arrivals at a stop
    StopArrivals {
        /// Stop id
        stop: String,
    },

    /// Frequencies and incidents of a line
    LineDetail {
        /// Date of service
        #[arg(long)]
        date: String,

        /// Line id
        #[arg(long)]
        line: String,
    },

    /// Stops within a radius of a stop
    NearbyStops {
        /// Stop id
        stop: String,

        /// Radius in meters
        #[arg(short, long, default_value = "250")]
        radius: u32,
    },

    /// Read JSON message fields from stdin, one object per line, and write
    /// one JSON relay message per reply
    Relay,
}

impl Commands {
    /// Query kind and message fields of a one-shot command
    fn query_fields(self) -> Option<(QueryKind, MessageFields)> {
        let (kind, pairs): (QueryKind, Vec<(&str, String)>) = match self {
            Self::Calendar { sdate, edate } => {
                (QueryKind::Calendar, vec![("sdate", sdate), ("edate", edate)])
            },
            Self::LineList { date, lines } => {
                (QueryKind::LineList, vec![("date", date), ("lines", lines)])
            },
            Self::StopList { stops } => (QueryKind::StopList, vec![("stops", stops.join(" "))]),
            Self::RouteStops { date, line } => {
                (QueryKind::RouteStops, vec![("date", date), ("line", line)])
            },
            Self::LineSchedule { date, line } => {
                (QueryKind::LineSchedule, vec![("date", date), ("line", line)])
            },
            Self::StopArrivals { stop } => (QueryKind::StopArrivals, vec![("stop", stop)]),
            Self::LineDetail { date, line } => {
                (QueryKind::LineDetail, vec![("date", date), ("line", line)])
            },
            Self::NearbyStops { stop, radius } => (
                QueryKind::NearbyStops,
                vec![("stop", stop), ("radius", radius.to_string())],
            ),
            Self::Relay => return None,
        };

        let fields = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Some((kind, fields))
    }
}

/// Wire the query service from configuration
fn build_service(config: &AppConfig) -> anyhow::Result<QueryService> {
    let api = EmtApiAdapter::from_config(&config.emt).with_context(|| {
        format!(
            "cannot set up the EMT client (credentials: {})",
            config.emt.credentials_path.display()
        )
    })?;

    let profiles: Arc<dyn UserProfileStore> = match &config.users.profiles_path {
        Some(path) => Arc::new(FileUserProfileStore::load(path)?),
        None => {
            debug!("No profile file configured, every sender gets the default locale");
            Arc::new(InMemoryUserProfileStore::new())
        },
    };

    Ok(QueryService::new(
        Arc::new(api),
        LocaleResolver::new(profiles, config.locale.default.clone()),
        HandlerRegistry::new()?,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;
    infrastructure::init_logging(&config.logging, cli.verbose)?;
    info!(base_url = %config.emt.base_url, locale = %config.locale.default, "madtrans starting");

    let service = build_service(&config)?;

    let Some((kind, mut fields)) = cli.command.query_fields() else {
        let defaults = RelayDefaults {
            sender: cli.sender,
            src: cli.src,
        };
        let stdin = BufReader::new(tokio::io::stdin());
        relay::run(&service, stdin, tokio::io::stdout(), &defaults).await?;
        return Ok(());
    };

    if let Some(sender) = cli.sender {
        fields.insert("sender".to_string(), sender);
    }
    if let Some(src) = cli.src {
        fields.insert("src".to_string(), src);
    }
    let query = Query::from_kind_fields(kind, &fields)?;

    if query.sender.is_some() {
        if let Some(reply) = service.handle(query).await? {
            println!("{}", serde_json::to_string(&reply)?);
        }
    } else {
        let reply = service.answer(&query.params, None).await?;
        print!("{reply}");
    }

    Ok(())
}
