use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use tokio::fs;

use crate::utils::{extension_tag, project_name, relative_path};

/// Serializes a single file into a labeled, fenced block.
///
/// The content is decoded as UTF-8 with replacement characters for malformed
/// sequences; binary files get no special treatment. Read failures propagate
/// to the caller.
pub async fn serialize_file(path: &Path, project_root: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let rel_path = relative_path(path, project_root);
    let project = project_name(project_root);
    let extension = extension_tag(path);

    debug!("Serializing file: {}", rel_path.display());

    Ok(format!(
        "\n===============================\n\
         Project Name: '{project}'\n\
         File Path: '{path}'\n\
         File Content:\n\
         ```{extension}\n\
         {content}\n\
         ```\n\
         ===============================\n",
        project = project,
        path = rel_path.display(),
        extension = extension,
        content = content,
    ))
}

/// Builds the header block that precedes a directory's serialized files.
pub fn directory_header(dir: &Path, project_root: &Path) -> String {
    let rel_path = relative_path(dir, project_root);
    let project = project_name(project_root);

    format!(
        "\n===============================\n\
         Project Name: '{project}'\n\
         Directory Path: '{path}'\n\
         ===============================\n",
        project = project,
        path = rel_path.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn block_has_expected_shape() -> Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("myproject");
        fs::create_dir(&root)?;
        fs::write(root.join("hello.rs"), "fn main() {}")?;

        let block = serialize_file(&root.join("hello.rs"), &root).await?;

        assert_eq!(
            block,
            "\n===============================\n\
             Project Name: 'myproject'\n\
             File Path: 'hello.rs'\n\
             File Content:\n\
             ```rs\n\
             fn main() {}\n\
             ```\n\
             ===============================\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn fenced_body_round_trips() -> Result<()> {
        let temp = tempdir()?;
        let content = "line one\nline two\n\tindented";
        fs::write(temp.path().join("a.txt"), content)?;

        let block = serialize_file(&temp.path().join("a.txt"), temp.path()).await?;

        let start = block.find("```txt\n").unwrap() + "```txt\n".len();
        let end = block.rfind("\n```\n").unwrap();
        assert_eq!(&block[start..end], content);
        Ok(())
    }

    #[tokio::test]
    async fn extensionless_file_gets_empty_tag() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("Makefile"), "all:\n\ttrue")?;

        let block = serialize_file(&temp.path().join("Makefile"), temp.path()).await?;

        assert!(block.contains("File Content:\n```\nall:"));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_utf8_degrades_to_replacement_characters() -> Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("mixed.txt"), [b'o', b'k', 0xFF, b'!'])?;

        let block = serialize_file(&temp.path().join("mixed.txt"), temp.path()).await?;

        assert!(block.contains("ok\u{FFFD}!"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_propagates_error() {
        let temp = tempdir().unwrap();
        let result = serialize_file(&temp.path().join("absent.rs"), temp.path()).await;
        assert!(result.is_err());
    }

    #[test]
    fn header_uses_relative_directory_path() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("proj");
        std::fs::create_dir_all(root.join("src/inner")).unwrap();

        let header = directory_header(&root.join("src/inner"), &root);

        assert!(header.contains("Project Name: 'proj'"));
        assert!(header.contains("Directory Path: 'src/inner'"));
        assert!(!header.contains("File Content"));
    }
}
