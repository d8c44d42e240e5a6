use crate::{foundation::core::WidgetRange, transform::chain::TransformationChain};

/// Named anchor deciding which region survives an extract crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Image centre.
    #[default]
    Center,
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Focus {
    /// Every focus value, in selector order.
    pub const ALL: [Focus; 9] = [
        Focus::Center,
        Focus::Top,
        Focus::Right,
        Focus::Bottom,
        Focus::Left,
        Focus::TopLeft,
        Focus::TopRight,
        Focus::BottomLeft,
        Focus::BottomRight,
    ];

    /// Wire name used in the `fo-` token.
    pub fn as_str(self) -> &'static str {
        match self {
            Focus::Center => "center",
            Focus::Top => "top",
            Focus::Right => "right",
            Focus::Bottom => "bottom",
            Focus::Left => "left",
            Focus::TopLeft => "top_left",
            Focus::TopRight => "top_right",
            Focus::BottomLeft => "bottom_left",
            Focus::BottomRight => "bottom_right",
        }
    }
}

/// How the extract crop picks its region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CropMethod {
    /// Anchor the crop on a named focus point.
    RelativeFocus {
        /// Anchor position.
        #[serde(default)]
        focus: Focus,
    },
    /// Centre the crop on explicit pixel coordinates.
    Extract {
        /// Horizontal centre (`xc-`).
        #[serde(default)]
        x: u32,
        /// Vertical centre (`yc-`).
        #[serde(default)]
        y: u32,
    },
}

impl Default for CropMethod {
    fn default() -> Self {
        CropMethod::RelativeFocus {
            focus: Focus::Center,
        }
    }
}

/// Parameters of the first (`tr`) chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Output width (`w-`).
    pub width: u32,
    /// Output height (`h-`).
    pub height: u32,
    /// Region selection.
    pub method: CropMethod,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            width: WidgetRange::RESIZE.default,
            height: WidgetRange::RESIZE.default,
            method: CropMethod::default(),
        }
    }
}

/// Build `w-<w>,h-<h>,cm-extract` followed by the method tokens.
///
/// Values pass through unchanged; range checks belong to the widgets
/// (see [`crate::FormState::validate`]).
pub fn build_crop_chain(params: &CropParams) -> TransformationChain {
    let mut chain = TransformationChain::new();
    chain
        .push(format!("w-{}", params.width))
        .push(format!("h-{}", params.height))
        .push("cm-extract");

    match params.method {
        CropMethod::RelativeFocus { focus } => {
            chain.push(format!("fo-{}", focus.as_str()));
        }
        CropMethod::Extract { x, y } => {
            chain.push(format!("xc-{x}")).push(format!("yc-{y}"));
        }
    }
    chain
}

#[cfg(test)]
#[path = "../../tests/unit/transform/crop.rs"]
mod tests;
