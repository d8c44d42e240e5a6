use std::fmt;

use crate::{
    access::gate::AccessGate,
    config::AppConfig,
    form::state::FormState,
    form::urls::{Endpoint, TransformUrls, build_urls},
    foundation::core::{Dimensions, PLACEHOLDER_URL},
    foundation::error::IkResult,
    page::query::QueryParams,
    probe::metadata::MetadataProbe,
};

/// What the "Image detail" line shows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ImageDetail {
    /// Header decoded.
    Dimensions {
        /// Origin image size.
        dimensions: Dimensions,
    },
    /// Inline, non-fatal probe failure.
    Error {
        /// Single-line message with the cause appended.
        message: String,
    },
    /// The caller chose not to probe.
    NotProbed,
}

/// Result of one top-to-bottom evaluation of the form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PageView {
    /// Untransformed image URL (right column).
    pub origin_url: String,
    /// Metadata probe outcome.
    pub image_detail: ImageDetail,
    /// Present only when the path field is non-empty.
    pub urls: Option<TransformUrls>,
    /// Display width of the transformed preview (the render chain width).
    pub preview_width: u32,
    /// `url` query parameter or the placeholder image.
    pub default_display_url: String,
}

/// Evaluate the whole form for one interaction.
///
/// The access gate runs first; on failure nothing else is computed. A failed
/// metadata probe is recorded in [`PageView::image_detail`] and evaluation continues.
#[tracing::instrument(skip_all, fields(path = %form.path))]
pub fn render_page(
    query: &QueryParams,
    form: &FormState,
    config: &AppConfig,
    probe: Option<&dyn MetadataProbe>,
) -> IkResult<PageView> {
    let gate = AccessGate::new(config.secrets.clone());
    let authorized =
        gate.authorize(query.access_token.as_deref(), query.imagekit_id.as_deref())?;

    let endpoint = Endpoint {
        base_url: config.base_url.clone(),
        imagekit_id: authorized.imagekit_id().to_string(),
    };
    let origin_url = endpoint.origin_url(&form.path);

    let image_detail = match probe {
        None => ImageDetail::NotProbed,
        Some(p) => match p.probe(&origin_url) {
            Ok(dimensions) => ImageDetail::Dimensions { dimensions },
            Err(e) => {
                tracing::warn!(error = %e, "metadata probe failed");
                ImageDetail::Error {
                    message: e.to_string(),
                }
            }
        },
    };

    let urls = (!form.path.is_empty()).then(|| build_urls(form, &endpoint));

    Ok(PageView {
        origin_url,
        image_detail,
        urls,
        preview_width: form.render.width,
        default_display_url: query
            .url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_URL.to_string()),
    })
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.image_detail {
            ImageDetail::Dimensions { dimensions } => {
                writeln!(f, "Image detail: {dimensions}")?
            }
            ImageDetail::Error { message } => writeln!(f, "{message}")?,
            ImageDetail::NotProbed => {}
        }
        match &self.urls {
            Some(urls) => {
                writeln!(f, "Modified image ({}px): {}", self.preview_width, urls.preview)?;
                writeln!(f, "Original image: {}", urls.origin)?;
                writeln!(f, "Download: {}", urls.download)?;
            }
            None => writeln!(f, "No image path; showing {}", self.default_display_url)?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/view.rs"]
mod tests;
