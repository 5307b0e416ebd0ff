//! Disk usage prober
//!
//! Asks the OS for the usage percentage of a mount path by running
//! `df --output=pcent <path>` and stripping everything that is not a digit
//! from its output. Keeping df as the source (rather than statvfs) preserves
//! the exact value an operator would see from the shell, rounding included.

use crate::error::{BuildwatchError, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Source of usage-percentage measurements for the sampler loop
#[async_trait]
pub trait UsageProbe {
    async fn usage_percent(&self) -> Result<u8>;
}

/// Probes a filesystem path for its current usage percentage
#[derive(Debug, Clone)]
pub struct DiskProber {
    mount_path: String,
}

impl DiskProber {
    pub fn new(mount_path: impl Into<String>) -> Self {
        Self {
            mount_path: mount_path.into(),
        }
    }

    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }
}

#[async_trait]
impl UsageProbe for DiskProber {
    /// Measure current usage of the mount path as an integer percentage.
    ///
    /// Errors if the path does not exist, df exits non-zero, or its output
    /// contains no parseable percentage. Errors are not handled here; the
    /// sampler loop treats them as fatal.
    async fn usage_percent(&self) -> Result<u8> {
        let output = Command::new("df")
            .arg("--output=pcent")
            .arg(&self.mount_path)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildwatchError::Probe(format!(
                "df failed for {}: {}",
                self.mount_path,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let percent = parse_usage_percent(&stdout)?;
        debug!("Disk usage of {}: {}%", self.mount_path, percent);
        Ok(percent)
    }
}

/// Extract the usage percentage from df output by stripping non-digits.
///
/// df prints a header line and a value like ` 42%`; after stripping, only
/// the digits remain. No digits at all, or a value above 100, is an error.
pub fn parse_usage_percent(raw: &str) -> Result<u8> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(BuildwatchError::Probe(format!(
            "no percentage found in df output {:?}",
            raw
        )));
    }

    let percent: u32 = digits
        .parse()
        .map_err(|_| BuildwatchError::Probe(format!("percentage out of range in {:?}", raw)))?;

    if percent > 100 {
        return Err(BuildwatchError::Probe(format!(
            "percentage {} out of range in {:?}",
            percent, raw
        )));
    }

    Ok(percent as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_percent() {
        assert_eq!(parse_usage_percent(" 42%\n").unwrap(), 42);
    }

    #[test]
    fn test_parse_with_header() {
        assert_eq!(parse_usage_percent("Use%\n 55%\n").unwrap(), 55);
    }

    #[test]
    fn test_parse_full_disk() {
        assert_eq!(parse_usage_percent("100%").unwrap(), 100);
    }

    #[test]
    fn test_parse_no_digits() {
        assert!(parse_usage_percent("no numbers here\n").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(parse_usage_percent("999%").is_err());
    }

    #[tokio::test]
    async fn test_probe_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let prober = DiskProber::new(missing.to_string_lossy());
        assert!(prober.usage_percent().await.is_err());
    }

    #[tokio::test]
    async fn test_probe_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let prober = DiskProber::new(dir.path().to_string_lossy());
        let percent = prober.usage_percent().await.unwrap();
        assert!(percent <= 100);
    }
}
