use std::sync::{PoisonError, RwLock};

use serenity::async_trait;

use crate::error::{lifecycle::LifecycleError, AppError};

/// Pooled HTTP client whose lifetime is bounded by the bot's.
#[async_trait]
pub trait HttpSession: Send + Sync {
    /// Returns a handle to the pooled client.
    fn client(&self) -> Result<reqwest::Client, AppError>;

    /// Drops the pool. Later calls to `client` fail.
    async fn close(&self) -> Result<(), AppError>;
}

/// `HttpSession` over a `reqwest::Client`.
pub struct ReqwestSession {
    client: RwLock<Option<reqwest::Client>>,
}

impl ReqwestSession {
    /// Opens the session.
    ///
    /// Proxy settings are taken from the environment (`HTTP_PROXY`,
    /// `HTTPS_PROXY`, `NO_PROXY`), which reqwest honors unless told otherwise.
    pub fn open() -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client: RwLock::new(Some(client)),
        })
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    fn client(&self) -> Result<reqwest::Client, AppError> {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| LifecycleError::SessionClosed.into())
    }

    async fn close(&self) -> Result<(), AppError> {
        let client = self
            .client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match client {
            Some(_) => Ok(()),
            None => Err(LifecycleError::SessionClosed.into()),
        }
    }
}
