//! Results export configuration

use serde::Deserialize;

use crate::adapters::export::DEFAULT_PDF_TIMEOUT_SECS;
use crate::domain::analysis::DEFAULT_RESULTS_TITLE;

use super::error::ValidationError;

/// Upper bound on the PDF conversion timeout
const MAX_PDF_TIMEOUT_SECS: u64 = 300;

/// Results export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Path to the pandoc executable (PATH lookup when unset)
    pub pandoc_path: Option<String>,

    /// PDF conversion timeout in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Title written into results documents
    #[serde(default = "default_results_title")]
    pub results_title: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > MAX_PDF_TIMEOUT_SECS {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        if self.results_title.trim().is_empty() {
            return Err(ValidationError::EmptyResultsTitle);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
            results_title: default_results_title(),
        }
    }
}

fn default_pdf_timeout() -> u64 {
    DEFAULT_PDF_TIMEOUT_SECS
}

fn default_results_title() -> String {
    DEFAULT_RESULTS_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.pandoc_path, None);
        assert_eq!(config.pdf_timeout_secs, 30);
        assert_eq!(config.results_title, "Results");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = ExportConfig::default();

        config.pdf_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPdfTimeout));

        config.pdf_timeout_secs = 301;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPdfTimeout));

        config.pdf_timeout_secs = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let config = ExportConfig {
            results_title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyResultsTitle));
    }
}
