// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{target} not found")]
    NotFound { target: String },

    #[error("Conflict while modifying {target}: {source}")]
    Conflict {
        target: String,
        #[source]
        source: kube::Error,
    },

    #[error("Kubernetes API error for {target}: {source}")]
    StoreUnavailable {
        target: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// Wrap a store error with the coordinates of the operation that hit it.
    pub fn from_kube(err: kube::Error, target: impl Into<String>) -> Self {
        let target = target.into();
        let code = match &err {
            kube::Error::Api(resp) => Some(resp.code),
            _ => None,
        };

        match code {
            Some(404) => GatewayError::NotFound { target },
            Some(409) => GatewayError::Conflict {
                target,
                source: err,
            },
            _ => GatewayError::StoreUnavailable {
                target,
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
