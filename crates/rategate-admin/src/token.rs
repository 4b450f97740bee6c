//! Anti-forgery tokens for the settings save flow.
//!
//! Each rendered settings form carries a one-time token; the save handler
//! consumes it before touching the store. Tokens are short-lived and valid
//! exactly once, so a replayed or cross-site submission fails the check.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Issues and verifies one-time form tokens.
pub struct FormTokenStore {
    tokens: DashMap<String, Instant>,
    ttl: Duration,
}

impl FormTokenStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            tokens: DashMap::new(),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Issues a fresh token to embed in a settings form.
    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), Instant::now());
        tracing::debug!("form token issued, store size: {}", self.tokens.len());
        token
    }

    /// Consumes `token`, returning `true` iff it was issued, unexpired, and
    /// not yet used. The token is removed either way.
    pub fn consume(&self, token: &str) -> bool {
        match self.tokens.remove(token) {
            Some((_, issued_at)) => {
                if issued_at.elapsed() > self.ttl {
                    tracing::debug!("form token expired");
                    return false;
                }
                true
            }
            None => {
                tracing::debug!("unknown form token");
                false
            }
        }
    }

    /// Drops tokens past their TTL.
    pub fn cleanup_expired(&self) {
        let ttl = self.ttl;
        self.tokens.retain(|_, issued_at| issued_at.elapsed() <= ttl);
    }

    /// Number of outstanding tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens are outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
