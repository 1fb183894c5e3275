use anyhow::Context as _;

use autoleilao_auth_types::identity::JwtSecret;
use autoleilao_auth_types::token::issue_admin_token;

use crate::domain::repository::AdminRepository;
use crate::error::CatalogServiceError;
use crate::infra::password::{hash_password, verify_password};

/// Shortest password accepted by [`ChangePasswordUseCase`].
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
    pub username: String,
    pub expires_at: u64,
}

pub struct LoginUseCase<A: AdminRepository> {
    pub admins: A,
    pub jwt_secret: JwtSecret,
}

impl<A: AdminRepository> LoginUseCase<A> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, CatalogServiceError> {
        // Unknown user and wrong password are indistinguishable to the caller.
        let admin = self
            .admins
            .find_by_username(&input.username)
            .await?
            .ok_or(CatalogServiceError::InvalidCredentials)?;

        if !verify_password(input.password, admin.password_hash).await? {
            return Err(CatalogServiceError::InvalidCredentials);
        }

        let (token, expires_at) = issue_admin_token(&admin.username, self.jwt_secret.as_str())
            .context("sign admin token")?;

        tracing::info!(username = %admin.username, "admin signed in");
        Ok(LoginOutput {
            token,
            username: admin.username,
            expires_at,
        })
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> ChangePasswordUseCase<A> {
    pub async fn execute(
        &self,
        username: &str,
        input: ChangePasswordInput,
    ) -> Result<(), CatalogServiceError> {
        if input.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CatalogServiceError::PasswordTooShort);
        }

        let admin = self
            .admins
            .find_by_username(username)
            .await?
            .ok_or(CatalogServiceError::InvalidCredentials)?;

        if !verify_password(input.current_password, admin.password_hash).await? {
            return Err(CatalogServiceError::InvalidCredentials);
        }

        let new_hash = hash_password(input.new_password).await?;
        self.admins
            .update_password_hash(&admin.id, &new_hash)
            .await?;

        tracing::info!(username = %admin.username, "admin password changed");
        Ok(())
    }
}
