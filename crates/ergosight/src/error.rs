use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assistant::ChatError;
use crate::workflows::catalog::CatalogError;
use crate::workflows::scenario::ScenarioError;
use crate::workflows::upload::UploadError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Scenario(ScenarioError),
    Chat(ChatError),
    Upload(UploadError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::UnknownVehicle { .. })
            | AppError::Catalog(CatalogError::UnknownAssistant { .. }) => StatusCode::NOT_FOUND,
            AppError::Catalog(CatalogError::UnknownProfile(_))
            | AppError::Scenario(_)
            | AppError::Chat(_)
            | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "{}", err),
            AppError::Scenario(err) => write!(f, "scenario error: {}", err),
            AppError::Chat(err) => write!(f, "chat error: {}", err),
            AppError::Upload(err) => write!(f, "upload error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Scenario(err) => Some(err),
            AppError::Chat(err) => Some(err),
            AppError::Upload(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        Self::Scenario(value)
    }
}

impl From<ChatError> for AppError {
    fn from(value: ChatError) -> Self {
        Self::Chat(value)
    }
}

impl From<UploadError> for AppError {
    fn from(value: UploadError) -> Self {
        Self::Upload(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::UnknownProfile;

    #[test]
    fn lookup_errors_map_to_not_found() {
        let err = AppError::from(CatalogError::UnknownVehicle {
            id: "nexon".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "unknown vehicle 'nexon'");
    }

    #[test]
    fn input_errors_map_to_bad_request() {
        let profile = AppError::from(CatalogError::from(UnknownProfile("P99".to_string())));
        assert_eq!(profile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::from(ChatError::EmptyQuery).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(ScenarioError::UnknownParameter {
                name: "wheelbase".to_string()
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_map_to_server_error() {
        let err = AppError::from(std::io::Error::other("disk gone"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
