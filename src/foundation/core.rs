use crate::foundation::error::{IkError, IkResult};

/// Default ImageKit delivery endpoint.
pub const IMAGEKIT_BASE_URL: &str = "https://ik.imagekit.io";

/// Display value used when no `url` query parameter is supplied.
pub const PLACEHOLDER_URL: &str = "https://placehold.co/1000x1000";

/// Pixel dimensions of an image, as read from its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} pixels", self.width, self.height)
    }
}

/// Declared constraints of a numeric form widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WidgetRange {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
    /// Value shown before the user touches the widget.
    pub default: u32,
    /// Widget increment.
    pub step: u32,
}

impl WidgetRange {
    /// Resize sliders of both chains.
    pub const RESIZE: WidgetRange = WidgetRange {
        min: 200,
        max: 3000,
        default: 1000,
        step: 10,
    };

    /// Extract-mode crop centre sliders.
    pub const EXTRACT_POSITION: WidgetRange = WidgetRange {
        min: 0,
        max: 5000,
        default: 0,
        step: 10,
    };

    /// Text overlay position inputs.
    pub const TEXT_POSITION: WidgetRange = WidgetRange {
        min: 0,
        max: 5000,
        default: 10,
        step: 10,
    };

    /// `true` when `v` lies in `[min, max]`.
    pub fn contains(self, v: u32) -> bool {
        self.min <= v && v <= self.max
    }

    /// Reject `v` when it lies outside `[min, max]`; `field` names it in the message.
    pub fn check(self, field: &str, v: u32) -> IkResult<()> {
        if !self.contains(v) {
            return Err(IkError::validation(format!(
                "{field} must be in [{}, {}], got {v}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
