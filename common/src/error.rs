use thiserror::Error;

/// Everything that can go wrong in a storefront view.
///
/// The `Display` text of each variant is the message shown to the user, so
/// variants carry an already localized string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Local form check failed. No request was issued.
    #[error("{0}")]
    Validation(String),

    /// Reading products failed. Shown inline.
    #[error("{0}")]
    Fetch(String),

    /// Creating or updating a product failed. The form keeps its values.
    #[error("{0}")]
    Submit(String),

    /// Deleting a product failed. Shown as a blocking alert.
    #[error("{0}")]
    Delete(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub const LIST_FETCH_FAILED: &str = "Có lỗi xảy ra khi tải danh sách sản phẩm";
pub const PRODUCT_FETCH_FAILED: &str = "Có lỗi xảy ra khi tải thông tin sản phẩm";
pub const SUBMIT_FAILED: &str = "Có lỗi xảy ra khi lưu sản phẩm";
pub const DELETE_FAILED: &str = "Có lỗi xảy ra khi xóa sản phẩm";

/// Picks the message to show for a rejected create/update request.
///
/// The backend answers either with a JSON object carrying a `message` field
/// or with a plain text body. An empty body falls back to a generic message.
pub fn submit_error_message(body: &str) -> String {
    let body = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return match value.get("message").and_then(|m| m.as_str()) {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            _ => SUBMIT_FAILED.to_string(),
        };
    }
    if body.is_empty() {
        SUBMIT_FAILED.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_message_wins() {
        assert_eq!(
            submit_error_message(r#"{"message":"Tên sản phẩm đã tồn tại"}"#),
            "Tên sản phẩm đã tồn tại"
        );
    }

    #[test]
    fn plain_body_is_used_as_is() {
        assert_eq!(submit_error_message("  File too large \n"), "File too large");
    }

    #[test]
    fn empty_or_unhelpful_bodies_fall_back() {
        assert_eq!(submit_error_message(""), SUBMIT_FAILED);
        assert_eq!(submit_error_message(r#"{"status":500}"#), SUBMIT_FAILED);
        assert_eq!(submit_error_message(r#"{"message":""}"#), SUBMIT_FAILED);
    }

    #[test]
    fn display_is_the_user_message() {
        let err = StoreError::Delete(DELETE_FAILED.to_string());
        assert_eq!(err.to_string(), DELETE_FAILED);
    }
}
