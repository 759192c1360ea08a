// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todas las llamadas llevan el token bearer si existe.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    CurrentUser, InterestArea, LoginRequest, LoginResponse, Material, Mentor, Mentored,
    MentorshipSession, NewReview, Review, SessionStatus,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: CONFIG.backend_url().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Login con email/senha → token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 [AUTH] Login para: {}", email);

        let response = Request::post(&self.url("/auth/login"))
            .json(&request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Usuario autenticado (id + rol)
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get_json("/auth/me").await
    }

    // ------------------------------------------------------------------------
    // Sesiones y avaliações
    // ------------------------------------------------------------------------

    /// Historial de sesiones del usuario actual
    pub async fn session_history(&self) -> Result<Vec<MentorshipSession>, ApiError> {
        let sessions: Vec<MentorshipSession> = self.get_json("/sessions/history").await?;
        log::info!("📋 [SESSIONS] {} sesiones en el historial", sessions.len());
        Ok(sessions)
    }

    /// Avaliações creadas por el usuario actual
    pub async fn created_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get_json("/avaliacoes/criadas").await
    }

    /// Avaliações recibidas por el usuario actual
    pub async fn received_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get_json("/avaliacoes/minhas").await
    }

    /// Crear avaliação
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        log::info!("⭐ [REVIEW] Enviando avaliação para sesión {}", review.session_id);
        let response = self
            .authorized(Request::post(&self.url("/avaliacoes")))
            .json(review)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Solicitar cambio de estado de una sesión
    pub async fn update_session_status(
        &self,
        session_id: i64,
        new_status: SessionStatus,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/sessions/{}/status", session_id));
        log::info!("🔄 [STATUS] Sesión {} → {}", session_id, new_status.code());

        let response = self
            .authorized(Request::patch(&url))
            .query([("newStatus", new_status.code())])
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await
    }

    // ------------------------------------------------------------------------
    // Búsquedas
    // ------------------------------------------------------------------------

    /// Buscar mentores por área (opcional) + especializaciones
    pub async fn search_mentors(
        &self,
        interest_area: Option<InterestArea>,
        specializations: &[String],
    ) -> Result<Vec<Mentor>, ApiError> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(area) = interest_area {
            params.push(("interestArea", area.code()));
        }
        for specialization in specializations {
            params.push(("specializations", specialization.as_str()));
        }

        let response = self
            .authorized(Request::get(&self.url("/mentored/mentors/search")))
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    /// Buscar mentorados de un área
    pub async fn search_mentoreds(&self, interest_area: InterestArea) -> Result<Vec<Mentored>, ApiError> {
        let response = self
            .authorized(Request::get(&self.url("/mentor/mentoreds/search")))
            .query([("interestArea", interest_area.code())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    // ------------------------------------------------------------------------
    // Materiales
    // ------------------------------------------------------------------------

    pub async fn materials(&self) -> Result<Vec<Material>, ApiError> {
        self.get_json("/materials").await
    }

    pub async fn suggested_materials(&self) -> Result<Vec<Material>, ApiError> {
        self.get_json("/materials/sugestoes").await
    }

    /// Crear material (multipart: `material` JSON + `arquivo` opcional)
    pub async fn create_material(&self, material: &Material, file: Option<&File>) -> Result<Material, ApiError> {
        let form = material_form_data(material, file)?;
        let response = self
            .authorized(Request::post(&self.url("/materials")))
            .body(form)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn update_material(
        &self,
        id: i64,
        material: &Material,
        file: Option<&File>,
    ) -> Result<Material, ApiError> {
        let form = material_form_data(material, file)?;
        let response = self
            .authorized(Request::put(&self.url(&format!("/materials/{}", id))))
            .body(form)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn delete_material(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::delete(&self.url(&format!("/materials/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorized(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

/// Respuesta no-2xx → ApiError::Http con el cuerpo decodificado
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    log::warn!("⚠️ HTTP {} {}: {}", status, status_text, body);
    Err(ApiError::from_http(status, &status_text, &body))
}

async fn ensure_ok(response: Response) -> Result<(), ApiError> {
    check_status(response).await.map(|_| ())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn material_form_data(material: &Material, file: Option<&File>) -> Result<FormData, ApiError> {
    let js_err = |e: JsValue| ApiError::Serialization(format!("{:?}", e));

    let json = serde_json::to_string(material).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;

    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob("material", &blob).map_err(js_err)?;
    if let Some(file) = file {
        form.append_with_blob_and_filename("arquivo", file, &file.name()).map_err(js_err)?;
    }
    Ok(form)
}
