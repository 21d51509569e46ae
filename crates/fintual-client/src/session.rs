//! Session state for authenticated endpoints
//!
//! The token obtained from `POST /access_tokens` is sent back as the
//! `user_token` query parameter, together with `user_email`.

use fintual_core::{Error, Result};
use std::fmt;
use tokio::sync::RwLock;

/// Query key carrying the account email on authenticated requests
pub const USER_EMAIL_PARAM: &str = "user_email";

/// Query key carrying the access token on authenticated requests
pub const USER_TOKEN_PARAM: &str = "user_token";

/// Credentials issued by the access token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
  user_email: String,
  access_token: String,
}

impl Session {
  /// Build a session from an email and a previously issued token
  pub fn new(user_email: impl Into<String>, access_token: impl Into<String>) -> Self {
    Self { user_email: user_email.into(), access_token: access_token.into() }
  }

  /// Email of the authenticated account
  pub fn user_email(&self) -> &str {
    &self.user_email
  }

  /// Access token
  pub fn access_token(&self) -> &str {
    &self.access_token
  }
}

impl fmt::Debug for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("user_email", &self.user_email)
      .field("access_token", &"***")
      .finish()
  }
}

/// Holder for the current session, shared by the client and its endpoints
#[derive(Debug, Default)]
pub struct SessionStore {
  current: RwLock<Option<Session>>,
}

impl SessionStore {
  /// Replace any existing session
  pub async fn set(&self, session: Session) {
    *self.current.write().await = Some(session);
  }

  /// Forget the current session
  pub async fn clear(&self) {
    *self.current.write().await = None;
  }

  /// The current session, or `Error::Unauthenticated`
  pub async fn current(&self) -> Result<Session> {
    self.current.read().await.clone().ok_or(Error::Unauthenticated)
  }

  /// Whether a session is held
  pub async fn is_authenticated(&self) -> bool {
    self.current.read().await.is_some()
  }

  /// Append `user_email` and `user_token` to `query`.
  ///
  /// Fails with `Error::Unauthenticated` when no session is held, before any
  /// request is built.
  pub async fn authorize(&self, mut query: Vec<(String, String)>) -> Result<Vec<(String, String)>> {
    let session = self.current().await?;
    query.push((USER_EMAIL_PARAM.to_string(), session.user_email));
    query.push((USER_TOKEN_PARAM.to_string(), session.access_token));
    Ok(query)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  #[tokio::test]
  async fn test_empty_store_is_unauthenticated() {
    let store = SessionStore::default();
    assert!(!store.is_authenticated().await);
    assert!(matches!(store.current().await, Err(Error::Unauthenticated)));
    assert!(matches!(store.authorize(Vec::new()).await, Err(Error::Unauthenticated)));
  }

  #[tokio::test]
  async fn test_authorize_appends_credentials() {
    let store = SessionStore::default();
    store.set(Session::new("ana@example.com", "abc123")).await;

    let query = store.authorize(vec![("date".to_string(), "2020-01-01".to_string())]).await.unwrap();
    assert_eq!(
      query,
      vec![
        ("date".to_string(), "2020-01-01".to_string()),
        ("user_email".to_string(), "ana@example.com".to_string()),
        ("user_token".to_string(), "abc123".to_string()),
      ]
    );
  }

  #[tokio::test]
  async fn test_set_overwrites_and_clear_forgets() {
    let store = SessionStore::default();
    store.set(Session::new("ana@example.com", "first")).await;
    store.set(Session::new("ana@example.com", "second")).await;
    assert_eq!(store.current().await.unwrap().access_token(), "second");

    store.clear().await;
    assert!(!store.is_authenticated().await);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_concurrent_reauthentication_never_mixes_credentials() {
    let store = Arc::new(SessionStore::default());
    store.set(Session::new("ana@example.com", "token-ana")).await;

    let writer = {
      let store = Arc::clone(&store);
      tokio::spawn(async move {
        for i in 0..200 {
          let session = if i % 2 == 0 {
            Session::new("bea@example.com", "token-bea")
          } else {
            Session::new("ana@example.com", "token-ana")
          };
          store.set(session).await;
        }
      })
    };

    let readers: Vec<_> = (0..4)
      .map(|_| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
          for _ in 0..200 {
            let query = store.authorize(Vec::new()).await.unwrap();
            let email = &query[0].1;
            let token = &query[1].1;
            let expected = if email == "ana@example.com" { "token-ana" } else { "token-bea" };
            assert_eq!(token, expected);
          }
        })
      })
      .collect();

    let (written, _) = tokio::join!(writer, async {
      for reader in readers {
        reader.await.unwrap();
      }
    });
    written.unwrap();
    assert!(store.is_authenticated().await);
  }

  #[test]
  fn test_debug_hides_token() {
    let printed = format!("{:?}", Session::new("ana@example.com", "abc123"));
    assert!(!printed.contains("abc123"));
  }
}
