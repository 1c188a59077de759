use pokedex_engine::mcp_interface::{
    handle_evolution_command, handle_load_more_command, handle_lookup_pokemon_command,
    handle_search_command,
};
use pokedex_engine::{Aggregator, EngineConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage:
  pokedex-engine                          list the first window of Pokémon
  pokedex-engine search <ids> [versions]  e.g. search \"1, 4, pikachu\" red,blue
  pokedex-engine lookup <pokemon>         full record plus evolution chain
  pokedex-engine evolution <species>      evolution chain only";

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for the answers
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(2);
        }
    };
    info!(base_url = %config.base_url, language = %config.language, "Starting pokedex engine");

    let aggregator = match Aggregator::with_http(config) {
        Ok(aggregator) => aggregator,
        Err(e) => {
            eprintln!("Error creating catalog client: {}", e);
            std::process::exit(2);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.first().map(String::as_str) {
        None => match aggregator.cursor() {
            Ok(mut cursor) => handle_load_more_command(&aggregator, &mut cursor, "").await,
            Err(e) => format!("Error: {}", e),
        },
        Some("search") if args.len() >= 2 => {
            let versions = args.get(2).map(String::as_str).unwrap_or("");
            handle_search_command(&aggregator, &args[1], versions).await
        }
        Some("lookup") if args.len() == 2 => handle_lookup_pokemon_command(&aggregator, &args[1]).await,
        Some("evolution") if args.len() == 2 => handle_evolution_command(&aggregator, &args[1]).await,
        Some(_) => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    println!("{}", output);
}
