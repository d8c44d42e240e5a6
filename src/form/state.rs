use crate::{
    foundation::core::WidgetRange,
    foundation::error::IkResult,
    transform::crop::{CropMethod, CropParams},
    transform::overlay::TextOverlay,
    transform::render::RenderParams,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Every widget value of the sidebar form.
///
/// Missing JSON fields take the widget defaults, so `{}` is the untouched form.
pub struct FormState {
    /// Relative image path inside the ImageKit media library.
    pub path: String,
    /// First (`tr`) chain.
    pub crop: CropParams,
    /// Second (`rt`) chain.
    pub render: RenderParams,
    /// Optional text layer.
    pub text: TextOverlay,
}

impl FormState {
    /// Form state with `path` seeded from the `path` query parameter.
    pub fn seeded(path: Option<&str>) -> Self {
        Self {
            path: path.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    /// Check every value against its declared widget constraints.
    ///
    /// The builders never clamp; this is for input that did not come from the widgets.
    pub fn validate(&self) -> IkResult<()> {
        WidgetRange::RESIZE.check("crop.width", self.crop.width)?;
        WidgetRange::RESIZE.check("crop.height", self.crop.height)?;
        if let CropMethod::Extract { x, y } = self.crop.method {
            WidgetRange::EXTRACT_POSITION.check("crop.x", x)?;
            WidgetRange::EXTRACT_POSITION.check("crop.y", y)?;
        }
        WidgetRange::RESIZE.check("render.width", self.render.width)?;
        WidgetRange::RESIZE.check("render.height", self.render.height)?;
        if self.text.enabled {
            self.text.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/state.rs"]
mod tests;
