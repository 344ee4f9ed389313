//! Show command implementation

use anyhow::{bail, Context, Result};
use lectern_client::{ClientError, ContentClient};
use lectern_core::{SelectedImages, Slot, ViewMode};
use serde::Serialize;

/// Combined JSON output for a book and its reconciled selections
#[derive(Serialize)]
struct ShowOutput {
    book: lectern_core::Book,
    selected_images: SelectedImages,
}

/// Parse a view mode argument
fn parse_mode(mode: &str) -> Result<ViewMode> {
    Ok(match mode {
        "image" => ViewMode::Image,
        "text" => ViewMode::Text,
        "image+text" => ViewMode::ImageAndText,
        other => bail!("Unknown mode \"{}\" (expected image, text, or image+text)", other),
    })
}

/// Show a book's summarized content with its image selections
pub async fn show(client: &ContentClient, id: &str, mode: &str, json: bool) -> Result<()> {
    let mode = parse_mode(mode)?;

    let book = match client.get_book(id).await {
        Ok(book) => book,
        Err(ClientError::NotFound { id }) => bail!("No book with id {}", id),
        Err(e) => return Err(e).context("Failed to fetch the book"),
    };

    // The selection record is fetched independently and may predate the
    // current ingest of the book, so reconcile before indexing into it.
    let selected = client
        .get_selected_images(id)
        .await
        .context("Failed to fetch the selection record")?
        .reconcile(&book);

    if json {
        let output = ShowOutput {
            book,
            selected_images: selected,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", book.title);
    println!("{}", book.book_summary);
    if mode.shows_images() {
        print_selection(selected.selection(Slot::Book)?);
    }

    for (c, chapter) in book.chapters.iter().enumerate() {
        println!();
        println!("{}. {}", chapter.num, chapter.title);
        println!("{}", chapter.chapter_summary);
        if mode.shows_images() {
            print_selection(selected.selection(Slot::Chapter { chapter: c })?);
        }

        for (p, paragraph) in chapter.paragraphs.iter().enumerate() {
            if mode.shows_text() {
                println!("  {}", paragraph);
            }
            if mode.shows_images() {
                let slot = Slot::Paragraph {
                    chapter: c,
                    paragraph: p,
                };
                if let Some(image) = selected.selection(slot)? {
                    println!("  [image #{}]", image);
                }
            }
        }
    }

    Ok(())
}

fn print_selection(selection: Option<u32>) {
    match selection {
        Some(image) => println!("[image #{}]", image),
        None => println!("[no image selected]"),
    }
}
