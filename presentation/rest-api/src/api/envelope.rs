use poem_openapi::Object;

/// Success envelope for operations that return no payload.
#[derive(Debug, Clone, Object)]
pub struct EmptyEnvelope {
    pub status: bool,
    pub message: String,
    pub data: serde_json::Value,
}

impl EmptyEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: serde_json::json!({}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_empty_object_as_data() {
        let envelope = EmptyEnvelope::new("Cart cleared successfully");

        assert!(envelope.status);
        assert_eq!(envelope.data, serde_json::json!({}));
    }
}
