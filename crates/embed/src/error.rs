use thiserror::Error;

/// Errors raised on the remote-encoder path.
///
/// None of these reach the scoring layer: [`SkillEncoder`](crate::SkillEncoder)
/// converts every failure into the deterministic hash fallback. They are
/// public so callers probing the backend directly can tell configuration
/// problems from transport problems.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Configuration is inconsistent (e.g., unknown mode or zero dimension).
    #[error("invalid embed config: {0}")]
    InvalidConfig(String),
    /// The embedding service rejected or failed the request.
    #[error("embedding api error: {0}")]
    Api(String),
    /// The embedding service answered with a body we could not interpret.
    #[error("embedding response decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_detail() {
        let err = EmbedError::Api("status 503".into());
        assert!(err.to_string().contains("embedding api error"));
        assert!(err.to_string().contains("status 503"));
    }

    #[test]
    fn invalid_config_display() {
        let err = EmbedError::InvalidConfig("mode must be one of: api, hash".into());
        assert!(err.to_string().contains("invalid embed config"));
    }

    #[test]
    fn decode_display() {
        let err = EmbedError::Decode("expected an array of numbers".into());
        assert!(err.to_string().contains("decode"));
    }
}
