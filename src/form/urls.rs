use crate::{
    foundation::core::IMAGEKIT_BASE_URL,
    form::state::FormState,
    transform::crop::build_crop_chain,
    transform::encode::{encode_component, encode_path},
    transform::render::build_render_chain,
};

/// Suffix turning a preview URL into a download URL.
pub const ATTACHMENT_FLAG: &str = "&ik-attachment=true";

/// Where images are served from: `<base_url>/<imagekit_id>/...`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    /// Delivery host, without trailing slash.
    pub base_url: String,
    /// ImageKit account identifier.
    pub imagekit_id: String,
}

impl Endpoint {
    /// Endpoint on the default ImageKit host.
    pub fn imagekit(imagekit_id: impl Into<String>) -> Self {
        Self {
            base_url: IMAGEKIT_BASE_URL.to_string(),
            imagekit_id: imagekit_id.into(),
        }
    }

    /// Untransformed URL of `path`.
    pub fn origin_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            encode_component(&self.imagekit_id),
            encode_path(path)
        )
    }
}

/// The three URLs derived from one form state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TransformUrls {
    /// Transformed image shown in the preview column.
    pub preview: String,
    /// `preview` with the attachment flag appended.
    pub download: String,
    /// Untransformed image, also the metadata probe target.
    pub origin: String,
}

/// Assemble `<origin>?tr=<crop>:<render>[<overlay>]` and its download twin.
///
/// Pure: no IO, no validation.
#[tracing::instrument(skip_all, fields(path = %form.path))]
pub fn build_urls(form: &FormState, endpoint: &Endpoint) -> TransformUrls {
    let crop = build_crop_chain(&form.crop);
    let render = build_render_chain(&form.render);
    tracing::debug!(%crop, %render, "built transformation chains");

    let origin = endpoint.origin_url(&form.path);
    let mut preview = format!("{origin}?tr={crop}:{render}");
    if let Some(segment) = form.text.segment() {
        preview.push_str(&segment);
    }
    let download = format!("{preview}{ATTACHMENT_FLAG}");

    TransformUrls {
        preview,
        download,
        origin,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/urls.rs"]
mod tests;
