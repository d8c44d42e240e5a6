use crate::{foundation::core::WidgetRange, transform::chain::TransformationChain};

/// Delivery format requested from the image service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JPEG.
    #[default]
    Jpg,
    /// PNG.
    Png,
    /// WebP.
    Webp,
    /// AVIF.
    Avif,
    /// Let the service negotiate from the `Accept` header.
    Auto,
}

impl OutputFormat {
    /// Every format, in selector order.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Jpg,
        OutputFormat::Png,
        OutputFormat::Webp,
        OutputFormat::Avif,
        OutputFormat::Auto,
    ];

    /// Wire name used in the `f-` token.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
            OutputFormat::Avif => "avif",
            OutputFormat::Auto => "auto",
        }
    }
}

/// Parameters of the second (`rt`) chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Output width (`w-`).
    pub width: u32,
    /// Output height (`h-`).
    pub height: u32,
    /// Append `e-contrast`.
    pub contrast: bool,
    /// Append `e-sharpen`.
    pub sharpen: bool,
    /// Output format (`f-`).
    pub format: OutputFormat,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: WidgetRange::RESIZE.default,
            height: WidgetRange::RESIZE.default,
            contrast: true,
            sharpen: true,
            format: OutputFormat::default(),
        }
    }
}

/// Build `w-<w>,h-<h>[,e-contrast][,e-sharpen],f-<format>`.
pub fn build_render_chain(params: &RenderParams) -> TransformationChain {
    let mut chain = TransformationChain::new();
    chain
        .push(format!("w-{}", params.width))
        .push(format!("h-{}", params.height))
        .push_if(params.contrast, "e-contrast")
        .push_if(params.sharpen, "e-sharpen")
        .push(format!("f-{}", params.format.as_str()));
    chain
}

#[cfg(test)]
#[path = "../../tests/unit/transform/render.rs"]
mod tests;
