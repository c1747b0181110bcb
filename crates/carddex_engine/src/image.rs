use url::Url;

use crate::error::ExtractError;
use crate::page::CardPage;

/// Bare filename of a card image. Never carries a directory component,
/// so records stay portable across image-storage locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    filename: String,
}

impl ImageReference {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn into_filename(self) -> String {
        self.filename
    }
}

/// Locates the card image and derives its reference.
///
/// The `src` is joined against the page URL (the site uses relative
/// paths) and the filename is the final path segment, extension and all,
/// so re-scraping the same page reproduces the same name.
pub fn resolve_image(page: &CardPage) -> Result<(Url, ImageReference), ExtractError> {
    let src = page.image_src().ok_or_else(|| ExtractError::MissingField {
        url: page.url().to_string(),
        field: "card image",
    })?;

    let image_url = page
        .url()
        .join(&src)
        .map_err(|_| ExtractError::InvalidField {
            url: page.url().to_string(),
            field: "card image",
            value: src.clone(),
        })?;

    let filename = image_url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ExtractError::InvalidField {
            url: page.url().to_string(),
            field: "card image",
            value: image_url.to_string(),
        })?;

    Ok((image_url, ImageReference { filename }))
}
