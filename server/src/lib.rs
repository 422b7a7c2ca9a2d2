//! Shared types and HTTP API for the Keymint license server.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use keymint_license::{LicenseRecord, LicenseSigner};

/// Successful issuance: the composite license token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IssueResponse {
    pub license: String,
}

/// The issuer's trust anchor, for clients that want to pin it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IssuerResponse {
    pub subject: String,
    /// Base64 DER certificate, identical to the fourth token segment.
    pub certificate: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

async fn issue_handler(
    State(signer): State<Arc<LicenseSigner>>,
    payload: Result<Json<LicenseRecord>, JsonRejection>,
) -> Response {
    let Json(record) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            // Malformed body: client error carrying the parse message,
            // before any identifier is generated.
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match signer.issue(record) {
        Ok(token) => {
            let id = token.split('-').next().unwrap_or_default();
            info!("issued license {id}");
            (StatusCode::OK, Json(IssueResponse { license: token })).into_response()
        }
        Err(err) => {
            // Repeated signing failures indicate a provisioning problem;
            // surface each one rather than retrying.
            error!("license issue failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn issuer_handler(State(signer): State<Arc<LicenseSigner>>) -> Json<IssuerResponse> {
    Json(IssuerResponse {
        subject: signer.issuer_subject(),
        certificate: STANDARD.encode(signer.certificate_der()),
    })
}

/// Build the HTTP API router around a shared signer.
pub fn build_router(signer: Arc<LicenseSigner>) -> Router {
    // License front-ends run in browsers on arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/licenses", post(issue_handler))
        .route("/api/v1/issuer", get(issuer_handler))
        .layer(cors)
        .with_state(signer)
}
