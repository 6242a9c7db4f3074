use super::error::ContentError;
use super::model::{ContentLibrary, Tip, Website};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of a content file:
///
/// ```toml
/// contact = "me@example.com"
///
/// [[tips]]
/// id = "1"
/// title = "Active Recall"
/// content = """
/// ## Active Recall
/// - Flashcards: Use [Anki](https://apps.ankiweb.net/).
/// """
///
/// [[websites]]
/// id = "1"
/// title = "Quizlet"
/// url = "https://quizlet.com"
/// icon = "💡"
/// ```
#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    contact: Option<String>,
    #[serde(default)]
    tips: Vec<Tip>,
    #[serde(default)]
    websites: Vec<Website>,
}

pub fn load_content(path: &Path) -> Result<ContentLibrary, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let library = parse_content(&text)?;
    tracing::info!(
        path = %path.display(),
        tips = library.tips().len(),
        websites = library.websites().len(),
        "content loaded"
    );
    Ok(library)
}

pub fn parse_content(text: &str) -> Result<ContentLibrary, ContentError> {
    let file: ContentFile = toml::from_str(text)?;
    ContentLibrary::new(file.tips, file.websites, file.contact)
}
