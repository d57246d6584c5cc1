//! Data shapes of the authentication flow, shared with The Hub web app.
//!
//! These are passive records. No validation lives here; the consuming
//! application owns that. Field names and nullability follow the JSON the
//! authentication provider emits, so keep the serde attributes in sync
//! whenever the provider contract changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated account as the authentication provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,

    /// Not every account carries a role. The field is absent from the JSON
    /// entirely in that case, not `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// A login session. Created on login, replaced on refresh, dropped on
/// logout. All of that happens in the web app; this crate only describes
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,

    /// Unix timestamp in seconds.
    pub expires_at: i64,

    pub user: User,
}

/// The view model of the auth UI: whatever is currently known about the
/// user plus the in-flight and error states. Never persisted.
///
/// The nullable fields serialize as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupCredentials {
    pub email: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The envelope of every auth operation. Nothing here forbids `error` and
/// `user` from being set at the same time; the provider's responses
/// genuinely take that shape sometimes, so the type keeps it representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use expect_test::expect;

    fn user(role: Option<&str>) -> User {
        User {
            id: "4e4bd2ab-63b7-4d85-b212-4ea162d55dc8".to_owned(),
            email: "syd@thehubdeals.com".to_owned(),
            role: role.map(str::to_owned),
            created_at: Utc.with_ymd_and_hms(2026, 8, 23, 10, 30, 0).unwrap(),
        }
    }

    fn session() -> Session {
        Session {
            access_token: "access-123".to_owned(),
            refresh_token: "refresh-456".to_owned(),
            expires_at: 1787654321,
            user: user(Some("admin")),
        }
    }

    #[test]
    fn session_round_trips() {
        let session = session();

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(session, parsed);
    }

    #[test]
    fn role_is_omitted_when_absent() {
        expect![[r#"
            {
              "id": "4e4bd2ab-63b7-4d85-b212-4ea162d55dc8",
              "email": "syd@thehubdeals.com",
              "created_at": "2026-08-23T10:30:00Z"
            }"#]]
        .assert_eq(&serde_json::to_string_pretty(&user(None)).unwrap());

        expect![[r#"
            {
              "id": "4e4bd2ab-63b7-4d85-b212-4ea162d55dc8",
              "email": "syd@thehubdeals.com",
              "role": "admin",
              "created_at": "2026-08-23T10:30:00Z"
            }"#]]
        .assert_eq(&serde_json::to_string_pretty(&user(Some("admin"))).unwrap());
    }

    #[test]
    fn auth_state_spells_out_the_nulls() {
        let state = AuthState {
            user: None,
            session: None,
            loading: false,
            error: None,
        };

        expect![[r#"{"user":null,"session":null,"loading":false,"error":null}"#]]
            .assert_eq(&serde_json::to_string(&state).unwrap());
    }

    #[test]
    fn signup_name_is_optional() {
        let credentials: SignupCredentials =
            serde_json::from_str(r#"{"email":"syd@thehubdeals.com","password":"hunter2"}"#)
                .unwrap();

        assert_eq!(credentials.name, None);
        assert!(!serde_json::to_string(&credentials).unwrap().contains("name"));
    }

    #[test]
    fn response_error_and_user_may_coexist() {
        let json = r#"{
            "user": {
                "id": "4e4bd2ab-63b7-4d85-b212-4ea162d55dc8",
                "email": "syd@thehubdeals.com",
                "created_at": "2026-08-23T10:30:00Z"
            },
            "session": null,
            "error": "session expired"
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();

        assert!(response.user.is_some());
        assert_eq!(response.error.as_deref(), Some("session expired"));
    }

    #[test]
    fn response_defaults_to_all_none() {
        let response: AuthResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(
            response,
            AuthResponse {
                user: None,
                session: None,
                error: None,
            }
        );
    }
}
