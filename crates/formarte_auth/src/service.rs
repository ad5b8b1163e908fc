// --- File: crates/formarte_auth/src/service.rs ---
//! Account pages behind one directory lock.
//!
//! Every accepted submission waits `auth.simulated_delay_ms` before it is
//! answered; rejected forms answer at once.

use std::sync::Arc;
use std::time::Duration;

use formarte_config::AppConfig;
use formarte_storage::SharedStore;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::directory::AccountDirectory;
use crate::error::AuthError;
use crate::forgot::ForgotPasswordFlow;
use crate::models::{
    ForgotPasswordRequest, LoginRequest, PublicUser, RegisterRequest, ResetPasswordRequest,
    ResetStepResponse,
};
use crate::validation::{validate_login, validate_registration};

pub struct AuthService {
    directory: RwLock<AccountDirectory>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(config: Arc<AppConfig>, directory: AccountDirectory) -> Self {
        Self {
            directory: RwLock::new(directory),
            config,
        }
    }

    pub async fn load(config: Arc<AppConfig>, kv: SharedStore) -> Self {
        let directory = AccountDirectory::load(kv, config.storage.users_key.clone()).await;
        Self::new(config, directory)
    }

    async fn simulate_latency(&self) {
        let delay = Duration::from_millis(self.config.auth.simulated_delay_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AuthError> {
        validate_registration(
            &request.name,
            &request.email,
            &request.password,
            &self.config.auth,
        )?;
        self.simulate_latency().await;

        let mut directory = self.directory.write().await;
        let account = directory
            .register(&request.name, &request.email, &request.password)
            .await?;
        Ok(PublicUser::from(&account))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<PublicUser, AuthError> {
        validate_login(&request.email, &request.password, &self.config.auth)?;
        self.simulate_latency().await;

        let directory = self.directory.read().await;
        match directory.authenticate(&request.email, &request.password) {
            Ok(account) => {
                info!("Login for {}", account.email);
                Ok(PublicUser::from(account))
            }
            Err(e) => {
                warn!("Rejected login for {}", request.email.trim());
                Err(e)
            }
        }
    }

    /// Step 1: accept the e-mail. Nothing is sent and the account is not
    /// looked up yet.
    pub async fn request_password_reset(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ResetStepResponse, AuthError> {
        let mut flow = ForgotPasswordFlow::new();
        flow.request(&request.email, &self.config.auth)?;
        self.simulate_latency().await;
        info!("Password reset requested for {}", flow.email());
        Ok(ResetStepResponse {
            step: flow.step(),
            email: flow.email().to_string(),
            message: None,
        })
    }

    /// Step 2: set the new password.
    ///
    /// An unknown account is answered with `step = request` and the
    /// not-found message rather than an error status.
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<ResetStepResponse, AuthError> {
        let mut flow = ForgotPasswordFlow::new();
        flow.request(&request.email, &self.config.auth)?;
        flow.check_new_password(&request.password, &request.confirm_password, &self.config.auth)?;
        self.simulate_latency().await;

        let result = {
            let mut directory = self.directory.write().await;
            directory.reset_password(flow.email(), &request.password).await
        };
        let message = match flow.complete(result) {
            Ok(()) => Some("Tu contraseña ha sido cambiada exitosamente.".to_string()),
            Err(AuthError::AccountNotFound) => Some(AuthError::AccountNotFound.to_string()),
            Err(e) => return Err(e),
        };
        Ok(ResetStepResponse {
            step: flow.step(),
            email: flow.email().to_string(),
            message,
        })
    }

    pub async fn account_count(&self) -> usize {
        self.directory.read().await.len()
    }
}
