use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub nick_name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_uses_camel_case_keys() {
        let req = RegisterRequest {
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            nick_name: "alice".into(),
            email: "a@b.com".into(),
            password: "secret123".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["firstName"], "Alice");
        assert_eq!(value["nickName"], "alice");
        assert!(value.get("confirmPassword").is_none());
    }
}
