//! Typed HTTP client for the catalog API.
//!
//! Each method issues exactly one request and awaits it to completion.
//! There is no retry, timeout, or caching at this layer.

use bestiary_types::{
    CreateCreatureRequest, CreateSpeciesRequest, Creature, CreatureId, CreatureWithSpecies,
    ErrorBody, HealthStatus, Species, UpdateSpeciesLoreRequest,
};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Base URL the browser client targets by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const FETCH_CREATURES_FAILED: &str = "Failed to fetch creatures";
const FETCH_CREATURE_FAILED: &str = "Failed to fetch creature";
const CREATE_CREATURE_FAILED: &str = "Failed to create creature";
const FETCH_SPECIES_FAILED: &str = "Failed to fetch species";
const CREATE_SPECIES_FAILED: &str = "Failed to create species";
const UPDATE_SPECIES_FAILED: &str = "Failed to update species";
const HEALTH_FAILED: &str = "Health check failed";

/// Client for the catalog HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not
    /// parse or cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Create a client that reuses an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    /// The server base URL.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /creatures`.
    pub async fn list_creatures(&self) -> Result<Vec<CreatureWithSpecies>, ClientError> {
        let url = self.endpoint(&["creatures"])?;
        let response = self.http.get(url).send().await?;
        read_json(response, FETCH_CREATURES_FAILED).await
    }

    /// `GET /creatures/{id}`.
    pub async fn get_creature(&self, id: CreatureId) -> Result<CreatureWithSpecies, ClientError> {
        let url = self.endpoint(&["creatures", &id.to_string()])?;
        let response = self.http.get(url).send().await?;
        read_json(response, FETCH_CREATURE_FAILED).await
    }

    /// `POST /creatures`. Returns the stored record without its species.
    pub async fn create_creature(
        &self,
        name: &str,
        species_name: &str,
    ) -> Result<Creature, ClientError> {
        let url = self.endpoint(&["creatures"])?;
        let body = CreateCreatureRequest::new(name, species_name);
        let response = self.http.post(url).json(&body).send().await?;
        read_json(response, CREATE_CREATURE_FAILED).await
    }

    /// `GET /creatures/species`.
    pub async fn list_species(&self) -> Result<Vec<Species>, ClientError> {
        let url = self.endpoint(&["creatures", "species"])?;
        let response = self.http.get(url).send().await?;
        read_json(response, FETCH_SPECIES_FAILED).await
    }

    /// `POST /creatures/species`.
    pub async fn create_species(
        &self,
        name: &str,
        lore: Option<&str>,
    ) -> Result<Species, ClientError> {
        let url = self.endpoint(&["creatures", "species"])?;
        let body = CreateSpeciesRequest::new(name, lore.map(str::to_owned));
        let response = self.http.post(url).json(&body).send().await?;
        read_json(response, CREATE_SPECIES_FAILED).await
    }

    /// `PATCH /creatures/species/{name}`.
    ///
    /// The name travels as a single percent-encoded path segment, so names
    /// containing `/`, `?` or spaces address the right species.
    pub async fn update_species_lore(
        &self,
        name: &str,
        lore: &str,
    ) -> Result<Species, ClientError> {
        let url = self.endpoint(&["creatures", "species", name])?;
        let body = UpdateSpeciesLoreRequest::new(lore);
        let response = self.http.patch(url).json(&body).send().await?;
        read_json(response, UPDATE_SPECIES_FAILED).await
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint(&["health"])?;
        let response = self.http.get(url).send().await?;
        read_json(response, HEALTH_FAILED).await
    }

    /// Append `segments` to the base URL, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let Ok(mut path) = url.path_segments_mut() else {
                return Err(ClientError::InvalidBaseUrl(self.base_url.to_string()));
            };
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

/// Decode a success body as `T`, or turn a failure status into
/// [`ClientError::Api`].
async fn read_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ClientError::Decode);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| fallback.to_owned());

    tracing::debug!(status = status.as_u16(), error = %message, "catalog request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
