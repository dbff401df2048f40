//! Credential checks, registration, and session resolution.

use std::sync::Arc;

use tracing::{info, warn};

use shopwave_auth::jwt::{IssuedToken, JwtDecoder, JwtEncoder};
use shopwave_auth::password::{PasswordHasher, PasswordPolicy};
use shopwave_core::error::AppError;
use shopwave_core::result::AppResult;
use shopwave_database::{AddressStore, UserStore};
use shopwave_entity::user::{CreateUser, User, UserProfile, UserRole};

/// Outcome of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    /// Sanitized projection of the signed-in user.
    pub user: UserProfile,
    /// Freshly signed session token.
    pub token: IssuedToken,
}

/// Handles sign-in, sign-up, and session resolution.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Address store, used to assemble user projections.
    addresses: Arc<dyn AddressStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password strength policy.
    policy: Arc<PasswordPolicy>,
    /// Session token issuer.
    encoder: Arc<JwtEncoder>,
    /// Session token verifier.
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        addresses: Arc<dyn AddressStore>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            addresses,
            hasher,
            policy,
            encoder,
            decoder,
        }
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown email and wrong password surface the same generic message so
    /// the response does not leak which field was wrong.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignedIn> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!(email = %email, "Sign-in failed: unknown email");
            return Err(AppError::authentication("Invalid email or password"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Sign-in failed: wrong password");
            return Err(AppError::authentication("Invalid email or password"));
        }

        let token = self.encoder.issue(&user)?;
        let profile = self.load_profile(&user).await?;

        info!(user_id = %user.id, role = %user.role, "User signed in");

        Ok(SignedIn {
            user: profile,
            token,
        })
    }

    /// Registers a new buyer account. Does not sign the user in.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        self.policy.validate(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Buyer,
                image_url: None,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Resolves the current user from a cookie token.
    ///
    /// A missing, invalid, or expired token and a vanished user all yield
    /// `Ok(None)`; an absent session is not an error.
    pub async fn current_user(&self, token: Option<&str>) -> AppResult<Option<UserProfile>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        let Some(user) = self.users.find_by_id(claims.sub).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_profile(&user).await?))
    }

    /// Signs a fresh session token for an already-verified user.
    ///
    /// Used to rotate the cookie after the signed role changes.
    pub fn issue_token(&self, user: &User) -> AppResult<IssuedToken> {
        self.encoder.issue(user)
    }

    async fn load_profile(&self, user: &User) -> AppResult<UserProfile> {
        let addresses = self.addresses.list_for_user(user.id).await?;
        Ok(UserProfile::from_user(user, addresses))
    }
}
