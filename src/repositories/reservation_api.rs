use anyhow::Context;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::errors::FetchError;
use crate::models::reservation::Reservation;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReservationApiRepo {
    client: Client,
    endpoint: String,
}

impl ReservationApiRepo {
    pub fn new(
        endpoint: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single GET against the collection endpoint. No retry and no timeout.
    pub async fn fetch_reservations(
        &self,
    ) -> Result<Vec<Reservation>, FetchError> {
        debug!("Requesting reservations from: {}", self.endpoint);
        let response = self.client
            .get(&self.endpoint)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Rejected(status));
        }

        let body = response.bytes().await?;
        let reservations = decode_reservations(&body)?;
        info!("Retrieved {} reservations from: {}", reservations.len(), self.endpoint);

        Ok(reservations)
    }
}

/// The body must be a JSON array; items that are not reservations are logged and left out.
pub fn decode_reservations(
    body: &[u8],
) -> Result<Vec<Reservation>, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_slice(body)?;

    let reservations = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value::<Reservation>(item) {
            Ok(reservation) => Some(reservation),
            Err(e) => {
                warn!("Skipping reservation at position {} due to: {}", position, e);
                None
            }
        })
        .collect();

    Ok(reservations)
}
