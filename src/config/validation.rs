//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the entire configuration.
///
/// Empty target or extension lists yield [`Error::MissingConfig`], which the
/// binary treats as "nothing to do" rather than a failure.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_target_urls(&config.target_urls)?;
    validate_extensions(&config.allowed_extensions)?;
    validate_delay(config.request_delay_seconds)?;

    Ok(())
}

/// Validate the list of pages to scan.
pub fn validate_target_urls(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        return Err(Error::MissingConfig(
            "target_urls (at least one page URL required)".to_string(),
        ));
    }

    Ok(())
}

/// Validate the extension allow-list.
pub fn validate_extensions(extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::MissingConfig(
            "allowed_extensions (at least one extension required)".to_string(),
        ));
    }

    // An empty suffix would match every link on the page
    if extensions.iter().any(|ext| ext.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            field: "allowed_extensions".to_string(),
            message: "Extensions cannot be empty or whitespace-only".to_string(),
        });
    }

    Ok(())
}

/// Validate the inter-request delay.
pub fn validate_delay(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::ConfigValidation {
            field: "request_delay_seconds".to_string(),
            message: format!("Delay must be a non-negative number (got {})", seconds),
        });
    }

    Ok(())
}

/// Collect non-fatal problems worth telling the operator about.
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if !config.organization_rule.is_known() {
        warnings.push(format!(
            "Unknown organization rule '{}'. Files will stay in '{}'.",
            config.organization_rule,
            config.download_base_folder.display()
        ));
    }

    for target in &config.target_urls {
        match Url::parse(target) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => warnings.push(format!(
                "Target URL '{}' uses unsupported scheme '{}'",
                target,
                url.scheme()
            )),
            Err(e) => warnings.push(format!("Target URL '{}' is invalid: {}", target, e)),
        }
    }

    for ext in &config.allowed_extensions {
        if !ext.starts_with('.') {
            warnings.push(format!(
                "Extension '{}' has no leading dot and will match any URL ending in it",
                ext
            ));
        }
    }

    warnings
}
