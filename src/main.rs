use std::fs;
use std::io::Read;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_kill_scanner::config::{Args, Secrets};
use league_kill_scanner::models::types::Resolution;
use league_kill_scanner::services::api::AccountClient;
use league_kill_scanner::services::resolver::Resolver;
use league_kill_scanner::utils::storage::PuuidStorage;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let secrets = Secrets::from_env().expect("Failed to load secrets");

    let riot_ids = match read_riot_ids(&args) {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("Lecture des Riot IDs impossible: {}", e);
            process::exit(1);
        }
    };

    if riot_ids.is_empty() {
        eprintln!("Aucun Riot ID fourni.");
        process::exit(1);
    }

    info!(
        region = %secrets.region,
        platform = %secrets.platform,
        min_kills = args.min_kills,
        time_limit = args.time_limit,
        after_date = %args.after_date,
        "Paramètres de scan chargés"
    );

    let resolver = Resolver::new(
        AccountClient::new(&secrets.region),
        PuuidStorage::new(&args.cache_file),
    );

    println!("Analyse de {} Riot IDs...", riot_ids.len());
    for (idx, riot_id) in riot_ids.iter().enumerate() {
        match resolver.resolve(riot_id, &secrets.riot_api_key).await {
            Resolution::Found(puuid) => {
                println!("[{}] {} — PUUID: {}", idx + 1, riot_id, puuid)
            }
            Resolution::NotFound => {
                println!("[{}] {} — Riot ID introuvable.", idx + 1, riot_id)
            }
            Resolution::Transient => {
                println!("[{}] {} — Erreur API ou cooldown.", idx + 1, riot_id)
            }
        }
    }
}

fn read_riot_ids(args: &Args) -> std::io::Result<Vec<String>> {
    let contents = match &args.riot_ids {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
