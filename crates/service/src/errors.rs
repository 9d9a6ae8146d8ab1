use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i32) -> Self { Self::NotFound { entity, id } }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 2001,
            ServiceError::NotFound { .. } => 2004,
            ServiceError::Db(_) => 2100,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let e = ServiceError::not_found("car type", 7);
        assert_eq!(e.to_string(), "car type not found");
        assert_eq!(e.code(), 2004);
    }

    #[test]
    fn model_errors_keep_their_category() {
        let v: ServiceError = ModelError::Validation("driver name required".into()).into();
        assert!(matches!(v, ServiceError::Validation(ref m) if m == "driver name required"));
        let d: ServiceError = ModelError::Db("boom".into()).into();
        assert!(matches!(d, ServiceError::Db(_)));
    }
}
