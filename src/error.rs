//! Error taxonomy for the API client and controllers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token in the session store.
    #[error("Token não encontrado")]
    MissingToken,

    /// Credentials rejected by the backend.
    #[error("{0}")]
    Auth(String),

    /// Client-side validation failure, raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response; `message` is the parsed server message when the
    /// body carried one, else a generic per-operation message.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure (connection refused, DNS, aborted request).
    #[error("Falha de rede: {0}")]
    Network(String),
}

impl ApiError {
    /// User-facing message, surfaced in alerts and inline errors.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_carries_parsed_message() {
        let err = ApiError::Server { status: 400, message: "Quadro não encontrado".into() };
        assert_eq!(err.message(), "Quadro não encontrado");
    }

    #[test]
    fn missing_token_message_matches_contract() {
        assert_eq!(ApiError::MissingToken.message(), "Token não encontrado");
    }
}
