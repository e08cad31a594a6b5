//! Authentication payloads and responses

use serde::{Deserialize, Serialize};

/// Credentials for `POST /authentication/sign-in`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInPayload {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /authentication/sign-up`
///
/// `phone_number` carries the wire format produced by
/// [`cl_shared::phone::clean_phone_number`], not the display mask.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpPayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
}

/// Response returned by sign-in and token refresh
///
/// The access token is opaque to the client; the companion refresh token
/// never appears in the body, it travels as an HTTP-only cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_wire_name() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"tok-1"}"#).unwrap();
        assert_eq!(response.access_token, "tok-1");
    }

    #[test]
    fn test_sign_up_payload_serializes_camel_case() {
        let payload = SignUpPayload {
            email: "student@courselane.app".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            phone_number: "+77471234567".to_string(),
            password: "Secure1!pass".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Anna");
        assert_eq!(json["phoneNumber"], "+77471234567");
    }
}
