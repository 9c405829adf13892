//! JSON REST handlers for assets.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use assethub_app::ports::AssetRepository;
use assethub_domain::asset::{AssetSubmission, RegisteredAsset};
use assethub_domain::id::AssetId;

use crate::correlation::CorrelationId;
use crate::error::ApiError;
use crate::state::AppState;

/// Message returned alongside a newly registered asset.
pub const REGISTERED_MESSAGE: &str = "Asset registered successfully";

/// Envelope for a successful registration.
#[derive(Serialize)]
pub struct RegisteredBody {
    pub status: &'static str,
    pub message: &'static str,
    pub asset: RegisteredAsset,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RegisteredAsset>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RegisteredAsset>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RegisteredBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/assets`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: AssetRepository + Send + Sync + 'static,
{
    let assets = state.asset_service.list_assets().await?;
    Ok(ListResponse::Ok(Json(assets)))
}

/// `GET /api/assets/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: AssetRepository + Send + Sync + 'static,
{
    let asset_id = AssetId::from_str(&id).map_err(|_| ApiError::InvalidId(id))?;
    let asset = state.asset_service.get_asset(asset_id).await?;
    Ok(GetResponse::Ok(Json(asset)))
}

/// `POST /api/assets`
///
/// Body extraction failures are mapped to the error envelope instead of
/// axum's plain-text rejection.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Extension(correlation_id): Extension<CorrelationId>,
    body: Result<Json<AssetSubmission>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: AssetRepository + Send + Sync + 'static,
{
    let Json(submission) = body?;
    tracing::debug!(correlation_id = %correlation_id.0, "asset submission received");
    let asset = state.asset_service.submit(submission).await?;
    Ok(CreateResponse::Created(Json(RegisteredBody {
        status: "success",
        message: REGISTERED_MESSAGE,
        asset,
    })))
}
