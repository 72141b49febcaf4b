// ============================================================================
// QUERY CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El token de sesión
// vive en una celda compartida con el Session Store: aquí solo se lee.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, OrderListResponse};
use crate::services::query::{ApiError, QueryParams};

/// Cliente HTTP con credencial adjunta
#[derive(Clone)]
pub struct QueryClient {
    base_url: String,
    credential: Rc<RefCell<Option<String>>>,
}

impl QueryClient {
    /// Crear cliente compartiendo la celda de credencial del Session Store
    pub fn new(credential: Rc<RefCell<Option<String>>>) -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            credential,
        }
    }

    /// Adjuntar el bearer token actual si hay sesión; omitirlo si no
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.credential.borrow().as_deref() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ------------------------------------------------------------------
    // Endpoints
    // ------------------------------------------------------------------

    /// Listar órdenes de servicio con los filtros/página actuales
    pub async fn list_orders(&self, params: &QueryParams) -> Result<OrderListResponse, ApiError> {
        let url = format!(
            "{}/ordens-servico/{}",
            self.base_url,
            params.to_query_string()
        );

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    /// Intercambio de credenciales: devuelve el token de acceso
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login/", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    /// Borrar una orden por id (sin body)
    pub async fn delete_order(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/ordens-servico/{}/", self.base_url, id);

        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }

        Ok(())
    }
}
