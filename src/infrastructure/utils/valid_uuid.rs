use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path segment into a UUID, mapping failure to a 400.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid UUID format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_uuid() {
        assert!(valid_uuid("b2c5e6a0-9f3d-4c1e-8a7b-123456789abc").is_ok());
    }

    #[test]
    fn rejects_malformed_id() {
        assert!(matches!(valid_uuid("not-a-uuid"), Err(AppError::InvalidInput(_))));
    }
}
