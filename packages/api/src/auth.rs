//! Login and signup. These are the only calls made without a bearer token.

use store::{Role, Session};

use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::{LoginRequest, LoginResponse, SignupRequest};

/// Exchange id and password for a session. Nothing is persisted here; see
/// [`crate::session::SessionManager::login`].
pub async fn login(client: &ApiClient, user_id: &str, password: &str) -> Result<Session, ApiError> {
    let user_id = user_id.trim();
    let request = LoginRequest {
        userid: user_id.to_string(),
        passwd: password.to_string(),
    };
    let response = client.post_public("/login", &request, Call::Login).await?;
    let reply: LoginResponse = ApiClient::decode(response).await?;
    if reply.token.trim().is_empty() {
        return Err(ApiError::Decode("login reply carried an empty token".to_string()));
    }
    let session = reply.into_session(user_id);
    tracing::info!("Signed in as {} ({})", session.user.id, session.user.role);
    Ok(session)
}

/// Input of the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Registration {
    /// First problem with the form, if any.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.user_id.trim().is_empty()
            || self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err("Please fill in all fields");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email");
        }
        Ok(())
    }

    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            userid: self.user_id.trim().to_string(),
            name: self.name.trim().to_string(),
            passwd: self.password.clone(),
            email: self.email.trim().to_string(),
            user_type: self.role.code(),
        }
    }
}

/// Create an account. Does not sign in.
pub async fn signup(client: &ApiClient, registration: &Registration) -> Result<(), ApiError> {
    registration
        .validate()
        .map_err(|message| ApiError::Failed {
            status: 400,
            message: message.to_string(),
        })?;
    client
        .post_public(
            "/signup",
            &registration.to_request(),
            Call::Other("Failed to create an account"),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Registration {
        Registration {
            user_id: "2019203001".to_string(),
            name: "Hong".to_string(),
            email: "hong@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            role: Role::Student,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(form().validate().is_ok());
        let request = form().to_request();
        assert_eq!(request.user_type, 1);
    }

    #[test]
    fn test_registration_errors() {
        let mut f = form();
        f.confirm_password = "other".to_string();
        assert_eq!(f.validate(), Err("Passwords do not match"));

        let mut f = form();
        f.name = "  ".to_string();
        assert_eq!(f.validate(), Err("Please fill in all fields"));

        let mut f = form();
        f.email = "hong".to_string();
        assert_eq!(f.validate(), Err("Please enter a valid email"));
    }
}
