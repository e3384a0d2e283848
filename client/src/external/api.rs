//! Farm backend REST client
//!
//! The backend owns every record; this client only lists collections and
//! forwards the drafts the dashboard submits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{
    Animal, AnimalDraft, BulkRelocation, BulkReproductiveEvent, DashboardSummary, ExpenseDraft,
    HarvestDraft, LotContract, LotDraft, LotId, RainfallDraft, RemovalDraft, SaleDraft, Silo,
    SiloDraft, SiloSaleDraft, WeighingDraft,
};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// Paths relative to the API base URL
pub mod endpoints {
    pub const LOTS: &str = "/liquidaciones";
    pub const CREATE_LOT: &str = "/nuevo_contrato";
    pub const EDIT_LOT: &str = "/editar_lote";
    pub const DELETE_LOT: &str = "/eliminar_lote";
    pub const CREATE_HARVEST: &str = "/nueva_cosecha";
    pub const ANIMALS: &str = "/animales";
    pub const CREATE_ANIMAL: &str = "/nuevo_animal";
    pub const CREATE_WEIGHING: &str = "/nuevo_pesaje";
    pub const CREATE_EXPENSE: &str = "/nuevo_gasto";
    pub const REGISTER_SALE: &str = "/registrar_venta";
    pub const REGISTER_REMOVAL: &str = "/registrar_baja";
    pub const RELOCATE_ANIMALS: &str = "/mover_animales";
    pub const BULK_REPRODUCTIVE_EVENT: &str = "/evento_reproductivo_masivo";
    pub const SILOS: &str = "/silos";
    pub const CREATE_SILO: &str = "/nuevo_silo";
    pub const SELL_FROM_SILO: &str = "/vender_silo";
    pub const CREATE_RAINFALL: &str = "/nueva_lluvia";
    pub const SUMMARY: &str = "/dashboard/full";
    pub const EXPORT_REPORT: &str = "/exportar_excel";

    /// Served at the server root, outside the `/api` prefix
    pub const FACTORY_RESET: &str = "/reset";
    pub const API_PREFIX: &str = "/api";
}

/// Operations offered by the farm backend
#[async_trait]
pub trait DataService: Send + Sync {
    async fn list_lots(&self) -> ClientResult<Vec<LotContract>>;
    async fn list_animals(&self) -> ClientResult<Vec<Animal>>;
    async fn list_silos(&self) -> ClientResult<Vec<Silo>>;
    async fn summary(&self) -> ClientResult<DashboardSummary>;

    async fn create_lot(&self, draft: &LotDraft) -> ClientResult<()>;
    async fn edit_lot(&self, id: LotId, draft: &LotDraft) -> ClientResult<()>;
    async fn delete_lot(&self, id: LotId) -> ClientResult<()>;
    async fn create_harvest(&self, draft: &HarvestDraft) -> ClientResult<()>;
    async fn create_rainfall(&self, draft: &RainfallDraft) -> ClientResult<()>;

    async fn create_animal(&self, draft: &AnimalDraft) -> ClientResult<()>;
    async fn create_weighing(&self, draft: &WeighingDraft) -> ClientResult<()>;
    async fn create_expense(&self, draft: &ExpenseDraft) -> ClientResult<()>;
    async fn register_sale(&self, draft: &SaleDraft) -> ClientResult<()>;
    async fn register_removal(&self, draft: &RemovalDraft) -> ClientResult<()>;
    async fn relocate_animals(&self, body: &BulkRelocation) -> ClientResult<()>;
    async fn apply_reproductive_event(&self, body: &BulkReproductiveEvent) -> ClientResult<()>;

    async fn create_silo(&self, draft: &SiloDraft) -> ClientResult<()>;
    async fn sell_from_silo(&self, draft: &SiloSaleDraft) -> ClientResult<()>;

    /// Spreadsheet with the consolidated report
    async fn export_report(&self) -> ClientResult<Vec<u8>>;
    async fn factory_reset(&self) -> ClientResult<()>;
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of [`DataService`]
#[derive(Clone)]
pub struct HttpDataService {
    client: Client,
    base_url: String,
}

impl HttpDataService {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Server root: the base URL without its `/api` suffix
    pub fn root_url(&self) -> &str {
        self.base_url
            .strip_suffix(endpoints::API_PREFIX)
            .unwrap_or(&self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, format!("{}{}", self.base_url, path))
    }

    fn request_url(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!(%method, %url, "backend request");
        self.client.request(method, url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &'static str) -> ClientResult<T> {
        let response = check(self.request(Method::GET, path).send().await?).await?;
        response.json().await.map_err(|e| ClientError::Decode {
            what,
            reason: e.to_string(),
        })
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        check(self.request(method, path).json(body).send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Api`], keeping the backend's
/// message when the body carries one
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty());
    tracing::debug!(status = status.as_u16(), %body, "backend rejected request");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DataService for HttpDataService {
    async fn list_lots(&self) -> ClientResult<Vec<LotContract>> {
        self.get_json(endpoints::LOTS, "lots").await
    }

    async fn list_animals(&self) -> ClientResult<Vec<Animal>> {
        self.get_json(endpoints::ANIMALS, "animals").await
    }

    async fn list_silos(&self) -> ClientResult<Vec<Silo>> {
        self.get_json(endpoints::SILOS, "silos").await
    }

    async fn summary(&self) -> ClientResult<DashboardSummary> {
        self.get_json(endpoints::SUMMARY, "summary").await
    }

    async fn create_lot(&self, draft: &LotDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_LOT, draft).await
    }

    async fn edit_lot(&self, id: LotId, draft: &LotDraft) -> ClientResult<()> {
        let path = format!("{}/{}", endpoints::EDIT_LOT, id);
        self.send_json(Method::PUT, &path, draft).await
    }

    async fn delete_lot(&self, id: LotId) -> ClientResult<()> {
        let path = format!("{}/{}", endpoints::DELETE_LOT, id);
        check(self.request(Method::DELETE, &path).send().await?).await?;
        Ok(())
    }

    async fn create_harvest(&self, draft: &HarvestDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_HARVEST, draft).await
    }

    async fn create_rainfall(&self, draft: &RainfallDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_RAINFALL, draft).await
    }

    async fn create_animal(&self, draft: &AnimalDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_ANIMAL, draft).await
    }

    async fn create_weighing(&self, draft: &WeighingDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_WEIGHING, draft).await
    }

    async fn create_expense(&self, draft: &ExpenseDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_EXPENSE, draft).await
    }

    async fn register_sale(&self, draft: &SaleDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::REGISTER_SALE, draft).await
    }

    async fn register_removal(&self, draft: &RemovalDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::REGISTER_REMOVAL, draft).await
    }

    async fn relocate_animals(&self, body: &BulkRelocation) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::RELOCATE_ANIMALS, body).await
    }

    async fn apply_reproductive_event(&self, body: &BulkReproductiveEvent) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::BULK_REPRODUCTIVE_EVENT, body)
            .await
    }

    async fn create_silo(&self, draft: &SiloDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::CREATE_SILO, draft).await
    }

    async fn sell_from_silo(&self, draft: &SiloSaleDraft) -> ClientResult<()> {
        self.send_json(Method::POST, endpoints::SELL_FROM_SILO, draft).await
    }

    async fn export_report(&self) -> ClientResult<Vec<u8>> {
        let response = check(self.request(Method::GET, endpoints::EXPORT_REPORT).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn factory_reset(&self) -> ClientResult<()> {
        let url = format!("{}{}", self.root_url(), endpoints::FACTORY_RESET);
        check(self.request_url(Method::GET, url).send().await?).await?;
        Ok(())
    }
}
