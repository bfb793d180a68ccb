use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },
    #[error("Invalid data received: {0}")]
    Decode(String),
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP error! status: {status}"),
    }
}

impl ApiError {
    /// Builds a status error, taking the message from a `detail` member of the
    /// error body when the server sent one.
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let detail = body
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .filter(|detail| !detail.is_empty())
            .map(str::to_string);
        ApiError::Status { status, detail }
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_is_the_message() {
        let body = json!({"detail": "email taken"});
        let err = ApiError::from_status(400, Some(&body));
        assert_eq!(err.message(), "email taken");
    }

    #[test]
    fn generic_status_message() {
        assert_eq!(
            ApiError::from_status(502, None).message(),
            "HTTP error! status: 502"
        );
        let body = json!({"email": ["user with this email already exists."]});
        assert_eq!(
            ApiError::from_status(400, Some(&body)).message(),
            "HTTP error! status: 400"
        );
    }
}
