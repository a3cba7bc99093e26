use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source_path", "data/input.csv").is_ok());
        assert!(validate_path("source_path", "/tmp/input.csv").is_ok());
        assert!(validate_path("source_path", "").is_err());
        assert!(validate_path("source_path", "   ").is_err());
        assert!(validate_path("source_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("out.csv".to_string());
        assert_eq!(
            validate_required_field("destination_path", &present).unwrap(),
            "out.csv"
        );

        let absent: Option<String> = None;
        let err = validate_required_field("destination_path", &absent).unwrap_err();
        assert!(matches!(err, EtlError::MissingConfigError { field } if field == "destination_path"));
    }
}
