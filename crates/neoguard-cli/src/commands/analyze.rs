//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use neoguard_api::MediaClient;
use std::fs;
use std::path::Path;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    client: &MediaClient,
    formatter: &Formatter,
) -> Result<()> {
    if args.file.is_some() && args.url.is_some() {
        return Err(CliError::InvalidInput(
            "Specify a file or --url, not both".to_string(),
        ));
    }

    let result = if let Some(url) = args.url {
        client.analyze_url(url).await?
    } else if let Some(path) = args.file {
        let (filename, content) = read_media_file(&path)?;
        client.analyze_file(filename, content).await?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either a file path or --url".to_string(),
        ));
    };

    println!("{}", formatter.format_result(&result)?);

    Ok(())
}

/// Read a media file and split off the filename the service will see.
pub(crate) fn read_media_file(path: &str) -> Result<(String, Vec<u8>)> {
    let content = fs::read(path)?;
    let filename = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid file path '{}'", path)))?;

    Ok((filename.to_string(), content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_media_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"fake image bytes").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let (filename, content) = read_media_file(&path).unwrap();

        assert_eq!(content, b"fake image bytes");
        assert!(path.ends_with(&filename));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_media_file("/nonexistent/photo.png");
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
