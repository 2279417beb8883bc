// ============================================================================
// AUTH SERVICE - Bearer token helper (login state, expiry, profile)
// ============================================================================

use std::rc::Rc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::AppError;
use crate::models::{Profile, TokenClaims};
use crate::services::storage_service::TokenStore;

/// Decodes the payload segment of a JWT; the signature is the server's business
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::InvalidToken("expected three segments".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::InvalidToken(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidToken(e.to_string()))
}

/// Undecodable tokens count as expired
pub fn is_token_expired(token: &str, now: i64) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.exp < now,
        Err(e) => {
            log::warn!("⚠️ [AUTH] {}", e);
            true
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    store: Rc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn get_token(&self) -> Option<String> {
        self.store.load_token()
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in_at(chrono::Utc::now().timestamp())
    }

    pub fn logged_in_at(&self, now: i64) -> bool {
        match self.get_token() {
            Some(token) if !token.is_empty() => !is_token_expired(&token, now),
            _ => false,
        }
    }

    /// Token only if it is still valid
    pub fn valid_token(&self) -> Option<String> {
        if self.logged_in() {
            self.get_token()
        } else {
            None
        }
    }

    pub fn get_profile(&self) -> Option<Profile> {
        let token = self.get_token()?;
        decode_claims(&token).ok().map(|claims| claims.data)
    }

    pub fn login(&self, token: &str) -> Result<(), AppError> {
        self.store.store_token(token)?;
        log::info!("✅ [AUTH] Logged in");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.store.clear_token()?;
        log::info!("👋 [AUTH] Logged out");
        Ok(())
    }
}
