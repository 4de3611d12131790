//! `quaver` command line tool.
//!
//! Prints library/environment diagnostics and runs a few one-shot
//! lookups against the Quaver API, printing the JSON response.

mod diagnostics;

use clap::{Parser, Subcommand};
use quaver_client::{ClientConfig, MapKey, Quaver, UserQuery};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quaver", about = "Tools for helping with quaver-client")]
struct Args {
    /// Show the library version and environment
    #[arg(short, long)]
    version: bool,

    /// Override the API base URL
    #[arg(long, env = "QUAVER_API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a user by name or numeric ID
    User {
        user: String,
        /// Fetch the full profile
        #[arg(long)]
        full: bool,
    },
    /// Fetch one or more mapsets by ID
    Mapset {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Fetch a map by ID or content hash
    Map { key: String },
    /// Server-wide statistics
    Stats,
}

fn user_query(raw: &str) -> UserQuery {
    match raw.parse::<u64>() {
        Ok(id) => UserQuery::Id(id),
        Err(_) => UserQuery::Name(raw.to_string()),
    }
}

fn map_key(raw: &str) -> MapKey {
    match raw.parse::<u64>() {
        Ok(id) => MapKey::Id(id),
        Err(_) => MapKey::Hash(raw.to_string()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env loaded: {e}");
    }

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    if args.version {
        println!("{}", diagnostics::version_report(&config));
        return Ok(());
    }

    let Some(command) = args.command else {
        use clap::CommandFactory;
        Args::command().print_help()?;
        return Ok(());
    };

    let quaver = Quaver::with_config(config, None);
    let body = quaver
        .scope(|q| async move {
            match command {
                Command::User { user, full } => q.get_users(user_query(&user), full).await,
                Command::Mapset { ids } => q.get_mapset_data(ids).await,
                Command::Map { key } => q.get_map(map_key(&key)).await,
                Command::Stats => q.get_server_stats().await,
            }
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_arguments_become_ids() {
        assert_eq!(user_query("42"), UserQuery::Id(42));
        assert_eq!(user_query("alice"), UserQuery::Name("alice".into()));
        assert_eq!(map_key("7"), MapKey::Id(7));
        assert_eq!(
            map_key("d41d8cd98f00b204e9800998ecf8427e"),
            MapKey::Hash("d41d8cd98f00b204e9800998ecf8427e".into())
        );
    }

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["quaver", "mapset", "1", "2"]).unwrap();
        assert!(!args.version);
        assert!(matches!(args.command, Some(Command::Mapset { ids }) if ids == [1, 2]));

        let args = Args::try_parse_from(["quaver", "-v"]).unwrap();
        assert!(args.version);
        assert!(args.command.is_none());
    }
}
