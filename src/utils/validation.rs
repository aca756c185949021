use crate::utils::error::{Result, SkillError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SkillError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("AZUREMAPS_ENDPOINT", "https://example.com").is_ok());
        assert!(validate_url("AZUREMAPS_ENDPOINT", "http://example.com").is_ok());
        assert!(validate_url("AZUREMAPS_ENDPOINT", "").is_err());
        assert!(validate_url("AZUREMAPS_ENDPOINT", "invalid-url").is_err());
        assert!(validate_url("AZUREMAPS_ENDPOINT", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.max_concurrency", 4, 1, 64).is_ok());
        assert!(validate_range("server.max_concurrency", 0, 1, 64).is_err());
        assert!(validate_range("server.max_concurrency", 65, 1, 64).is_err());
    }

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("data.acronyms_path", "data/acronyms.json").is_ok());
        assert!(validate_path("data.acronyms_path", "").is_err());
        assert!(validate_path("data.acronyms_path", "bad\0path").is_err());
        assert!(validate_non_empty_string("server.listen_addr", "   ").is_err());
    }
}
