use gloo_net::http::Request;

use crate::models::location::LocationEntity;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// La URL base se inyecta al construir; el cliente no lee
    /// configuración global por su cuenta.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Listar sucursales
    pub async fn get_branches(&self) -> Result<Vec<LocationEntity>, String> {
        self.get_locations("branches").await
    }

    /// Listar puntos raíz
    pub async fn get_roots(&self) -> Result<Vec<LocationEntity>, String> {
        self.get_locations("roots").await
    }

    async fn get_locations(&self, endpoint: &str) -> Result<Vec<LocationEntity>, String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        // El body debe decodificar como array de LocationEntity;
        // cualquier otra forma es un error de parseo, no datos vacíos.
        response
            .json::<Vec<LocationEntity>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
