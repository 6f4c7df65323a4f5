// Data structures (User, request and response bodies)

use serde::{Deserialize, Serialize};
use std::fmt;

// Stored user document
//
// The password is kept exactly as submitted. Hashing would change the stored
// document shape and the login comparison, so it is not done here.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for User {
    fn from(req: RegisterRequest) -> Self {
        User::new(req.name, req.email, req.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub user: String,
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_document_shape() {
        let user = User::new("Ana", "ana@x.com", "p1");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Ana", "email": "ana@x.com", "password": "p1" })
        );
    }

    #[test]
    fn test_user_debug_redacts_password() {
        let user = User::new("Ana", "ana@x.com", "hunter2");
        let debug = format!("{:?}", user);
        assert!(debug.contains("ana@x.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_user_ignores_extra_document_fields() {
        let user: User = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "name": "Ana",
            "email": "ana@x.com",
            "password": "p1"
        }))
        .unwrap();
        assert_eq!(user, User::new("Ana", "ana@x.com", "p1"));
    }

    #[test]
    fn test_register_request_into_user() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@x.com","password":"p1"}"#,
        )
        .unwrap();
        let user: User = req.into();
        assert_eq!(user.password, "p1");
    }

    #[test]
    fn test_chat_request_requires_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"text":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            user: "Ana".to_string(),
            reply: "hello".to_string(),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, r#"{"user":"Ana","reply":"hello"}"#);
    }
}
