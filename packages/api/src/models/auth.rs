use serde::{Deserialize, Serialize};
use store::{Role, Session, SessionUser};

use super::id;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub userid: String,
    pub passwd: String,
}

/// Reply of `POST /login`.
///
/// Only `token` is guaranteed. Newer backends also send the profile; when
/// they do not, the login id stands in for the name and the user is treated
/// as a student.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userID", default, deserialize_with = "id::text::deserialize_opt")]
    pub user_id: Option<String>,
    #[serde(rename = "userName", default)]
    pub name: Option<String>,
    #[serde(rename = "userType", default, deserialize_with = "id::role::deserialize_opt")]
    pub role: Option<Role>,
}

impl LoginResponse {
    /// Turn the reply into a session for the account that logged in as
    /// `login_id`.
    pub fn into_session(self, login_id: &str) -> Session {
        let role = self.role.unwrap_or(Role::Student);
        let id = self.user_id.unwrap_or_else(|| login_id.to_string());
        let name = self.name.unwrap_or_else(|| id.clone());
        Session {
            token: self.token,
            user: SessionUser { id, name, role },
        }
    }
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub userid: String,
    pub name: String,
    pub passwd: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_login_reply() {
        let reply: LoginResponse = serde_json::from_str(
            r#"{"token": "t", "userID": 12000001, "userName": "Kim", "userType": 2}"#,
        )
        .unwrap();
        let session = reply.into_session("kim");
        assert_eq!(session.token, "t");
        assert_eq!(session.user.id, "12000001");
        assert_eq!(session.user.name, "Kim");
        assert_eq!(session.role(), Role::Professor);
    }

    #[test]
    fn test_token_only_login_reply() {
        let reply: LoginResponse = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        let session = reply.into_session("2019203001");
        assert_eq!(session.user.id, "2019203001");
        assert_eq!(session.user.name, "2019203001");
        assert_eq!(session.role(), Role::Student);
    }

    #[test]
    fn test_login_reply_role_forms() {
        for (json, role) in [
            (r#"{"token": "t", "userType": 2}"#, Role::Professor),
            (r#"{"token": "t", "userType": "2"}"#, Role::Professor),
            (r#"{"token": "t", "userType": "professor"}"#, Role::Professor),
            (r#"{"token": "t", "userType": "admin"}"#, Role::Admin),
            (r#"{"token": "t", "userType": "guest"}"#, Role::Student),
            (r#"{"token": "t", "userType": null}"#, Role::Student),
        ] {
            let reply: LoginResponse = serde_json::from_str(json).unwrap();
            assert_eq!(reply.into_session("u1").role(), role, "{json}");
        }
    }

    #[test]
    fn test_missing_token_rejected() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"userID": 1}"#).is_err());
    }
}
