use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::models::types::RiotId;

#[derive(Debug, Deserialize)]
struct AccountDto {
    puuid: String,
}

/// Issue d'une seule tentative de résolution.
#[derive(Debug)]
pub enum LookupStatus {
    Found(String),
    NotFound,
    Retryable(StatusCode),
}

pub struct AccountClient {
    client: Client,
    base_url: String,
}

impl AccountClient {
    pub fn new(region: &str) -> Self {
        Self::with_base_url(format!("https://{}.api.riotgames.com", region))
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn fetch_account(
        &self,
        api_key: &str,
        riot_id: &RiotId,
    ) -> Result<LookupStatus, reqwest::Error> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.base_url,
            urlencoding::encode(&riot_id.game_name),
            urlencoding::encode(&riot_id.tag_line),
        );

        let response = self
            .client
            .get(&url)
            .header("X-Riot-Token", api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let account: AccountDto = response.json().await?;
                Ok(LookupStatus::Found(account.puuid))
            }
            StatusCode::NOT_FOUND => Ok(LookupStatus::NotFound),
            status => Ok(LookupStatus::Retryable(status)),
        }
    }
}
