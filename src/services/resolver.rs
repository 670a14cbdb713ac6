use std::str::FromStr;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::models::types::{Resolution, RiotId};
use crate::services::api::{AccountClient, LookupStatus};
use crate::utils::storage::PuuidStorage;

const MAX_ATTEMPTS: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_millis(500);

pub struct Resolver {
    client: AccountClient,
    storage: PuuidStorage,
}

impl Resolver {
    pub fn new(client: AccountClient, storage: PuuidStorage) -> Self {
        Self { client, storage }
    }

    /// Résout un Riot ID en PUUID, cache d'abord, API ensuite.
    /// Seules les réponses 200 sont mises en cache; un 404 ou une erreur
    /// transitoire re-consultera l'API au prochain appel.
    pub async fn resolve(&self, raw_id: &str, api_key: &str) -> Resolution {
        let riot_id = match RiotId::from_str(raw_id) {
            Ok(id) => id,
            Err(_) => return Resolution::NotFound,
        };

        // Le cache est rechargé depuis le disque à chaque appel.
        let mut cache = self.storage.load();
        if let Some(puuid) = cache.get(raw_id) {
            debug!(riot_id = raw_id, "PUUID servi depuis le cache");
            return Resolution::Found(puuid.clone());
        }

        for attempt in 1..=MAX_ATTEMPTS {
            match self.client.fetch_account(api_key, &riot_id).await {
                Ok(LookupStatus::Found(puuid)) => {
                    cache.insert(raw_id.to_string(), puuid.clone());
                    if let Err(e) = self.storage.save(&cache) {
                        warn!(error = %e, "écriture du cache PUUID échouée");
                    }
                    return Resolution::Found(puuid);
                }
                Ok(LookupStatus::NotFound) => return Resolution::NotFound,
                Ok(LookupStatus::Retryable(status)) => {
                    debug!(riot_id = raw_id, %status, attempt, "réponse non exploitable de l'API");
                }
                Err(e) => {
                    debug!(riot_id = raw_id, error = %e, attempt, "requête vers l'API échouée");
                }
            }

            if attempt < MAX_ATTEMPTS {
                sleep(RETRY_DELAY).await;
            }
        }

        Resolution::Transient
    }
}
