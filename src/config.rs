use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug)]
pub struct Secrets {
    pub riot_api_key: String,
    pub region: String,
    pub platform: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let riot_api_key =
            env::var("RIOT_API_KEY").map_err(|_| "RIOT_API_KEY non défini".to_string())?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "europe".to_string());
        let platform = env::var("RIOT_PLATFORM").unwrap_or_else(|_| "euw1".to_string());

        Ok(Self {
            riot_api_key,
            region,
            platform,
        })
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "league-kill-scanner",
    about = "Résout des Riot IDs en PUUIDs via l'API account-v1"
)]
pub struct Args {
    /// Fichier contenant un Riot ID par ligne (stdin par défaut)
    #[arg(long)]
    pub riot_ids: Option<PathBuf>,

    /// Fichier de cache des PUUIDs
    #[arg(long, default_value = "puuid_cache.json")]
    pub cache_file: PathBuf,

    /// Nombre minimum de kills (réservé au scan de matchs)
    #[arg(long, default_value_t = 3)]
    pub min_kills: u32,

    /// Fenêtre de temps en minutes (réservé au scan de matchs)
    #[arg(long, default_value_t = 3)]
    pub time_limit: u32,

    /// Ne considérer que les matchs après cette date (réservé au scan de matchs)
    #[arg(long, default_value = "2024-01-01")]
    pub after_date: NaiveDate,
}
