//! Export command implementation

use anyhow::{Context, Result};
use lectern_client::ContentClient;
use lectern_core::to_safe_filename;
use std::path::Path;

/// Export a book's chapters as text files named after their titles
pub async fn export(client: &ContentClient, id: &str, output_dir: &str) -> Result<()> {
    let book = client
        .get_book(id)
        .await
        .with_context(|| format!("Failed to fetch book {}", id))?;

    let dir = Path::new(output_dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir))?;

    for chapter in &book.chapters {
        // Sanitization can leave nothing usable (e.g. an all-punctuation
        // title), so fall back to the chapter number.
        let mut name = to_safe_filename(&chapter.title);
        if name.is_empty() {
            name = format!("chapter-{}", chapter.num);
        }

        let path = dir.join(format!("{}.txt", name));
        let mut content = String::new();
        content.push_str(&chapter.title);
        content.push_str("\n\n");
        for paragraph in &chapter.paragraphs {
            content.push_str(paragraph);
            content.push('\n');
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "exported chapter");
    }

    println!("Exported {} chapters to {}", book.chapters.len(), output_dir);
    Ok(())
}
