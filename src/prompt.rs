use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

const TEMPLATE_RELATIVE_PATH: &str = "assets/prompt.md";
const TEMPLATE_PATH_ENV: &str = "CHATCLIP_PROMPT_PATH";

/// Resolves the location of the bundled prompt template.
///
/// `CHATCLIP_PROMPT_PATH` overrides the default, which sits next to the
/// installed executable.
pub fn template_path() -> PathBuf {
    if let Ok(path) = env::var(TEMPLATE_PATH_ENV) {
        return PathBuf::from(path);
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_RELATIVE_PATH)))
        .unwrap_or_else(|| PathBuf::from(TEMPLATE_RELATIVE_PATH))
}

/// Reads the template verbatim. No transformation, no templating.
pub async fn load_template(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read prompt template: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn template_is_read_verbatim() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("prompt.md");
        std::fs::write(&path, "You are a helpful assistant.\n")?;

        let text = load_template(&path).await?;
        assert_eq!(text, "You are a helpful assistant.\n");
        Ok(())
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(load_template(&temp.path().join("gone.md")).await.is_err());
    }
}
