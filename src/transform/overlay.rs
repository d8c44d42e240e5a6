use crate::{
    foundation::core::WidgetRange,
    foundation::error::{IkError, IkResult},
    transform::encode::{encode_component, encode_form_value},
};

/// Overlay font size; not user-configurable.
pub const OVERLAY_FONT_SIZE: u32 = 45;

/// Fonts offered by the overlay font selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Font {
    /// `AbrilFatFace`
    #[default]
    AbrilFatFace,
    /// `Amaranth`
    Amaranth,
    /// `Arvo`
    Arvo,
    /// `Audiowide`
    Audiowide,
    /// `Chivo`
    Chivo,
    /// `Crimson Text`
    #[serde(rename = "Crimson Text")]
    CrimsonText,
    /// `exo`
    #[serde(rename = "exo")]
    Exo,
    /// `Fredoka One`
    #[serde(rename = "Fredoka One")]
    FredokaOne,
    /// `Gravitas One`
    #[serde(rename = "Gravitas One")]
    GravitasOne,
    /// `Kanit`
    Kanit,
    /// `Lato`
    Lato,
    /// `Lobster`
    Lobster,
    /// `Lora`
    Lora,
    /// `Monoton`
    Monoton,
    /// `Montserrat`
    Montserrat,
    /// `PT Mono`
    #[serde(rename = "PT Mono")]
    PtMono,
    /// `PT_Serif`
    #[serde(rename = "PT_Serif")]
    PtSerif,
    /// `Open Sans`
    #[serde(rename = "Open Sans")]
    OpenSans,
    /// `Roboto`
    Roboto,
    /// `Old Standard`
    #[serde(rename = "Old Standard")]
    OldStandard,
    /// `Ubuntu`
    Ubuntu,
    /// `Vollkorn`
    Vollkorn,
}

impl Font {
    /// Every font, in selector order.
    pub const ALL: [Font; 22] = [
        Font::AbrilFatFace,
        Font::Amaranth,
        Font::Arvo,
        Font::Audiowide,
        Font::Chivo,
        Font::CrimsonText,
        Font::Exo,
        Font::FredokaOne,
        Font::GravitasOne,
        Font::Kanit,
        Font::Lato,
        Font::Lobster,
        Font::Lora,
        Font::Monoton,
        Font::Montserrat,
        Font::PtMono,
        Font::PtSerif,
        Font::OpenSans,
        Font::Roboto,
        Font::OldStandard,
        Font::Ubuntu,
        Font::Vollkorn,
    ];

    /// Font family name as the image service knows it.
    pub fn name(self) -> &'static str {
        match self {
            Font::AbrilFatFace => "AbrilFatFace",
            Font::Amaranth => "Amaranth",
            Font::Arvo => "Arvo",
            Font::Audiowide => "Audiowide",
            Font::Chivo => "Chivo",
            Font::CrimsonText => "Crimson Text",
            Font::Exo => "exo",
            Font::FredokaOne => "Fredoka One",
            Font::GravitasOne => "Gravitas One",
            Font::Kanit => "Kanit",
            Font::Lato => "Lato",
            Font::Lobster => "Lobster",
            Font::Lora => "Lora",
            Font::Monoton => "Monoton",
            Font::Montserrat => "Montserrat",
            Font::PtMono => "PT Mono",
            Font::PtSerif => "PT_Serif",
            Font::OpenSans => "Open Sans",
            Font::Roboto => "Roboto",
            Font::OldStandard => "Old Standard",
            Font::Ubuntu => "Ubuntu",
            Font::Vollkorn => "Vollkorn",
        }
    }

    /// Look a font up by its exact family name.
    pub fn from_name(name: &str) -> Option<Font> {
        Font::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Text layer drawn on top of the rendered image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextOverlay {
    /// The overlay segment is emitted only when set.
    pub enabled: bool,
    /// Horizontal offset (`lx-`).
    pub lx: u32,
    /// Vertical offset (`ly-`).
    pub ly: u32,
    /// Free text, form-encoded into the `i-` token.
    pub text: String,
    /// Color picker value, e.g. `#ABCDEF`.
    pub color: String,
    /// Font family (`ff-`).
    pub font: Font,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            enabled: false,
            lx: WidgetRange::TEXT_POSITION.default,
            ly: WidgetRange::TEXT_POSITION.default,
            text: "default".to_string(),
            color: "#000000".to_string(),
            font: Font::default(),
        }
    }
}

impl TextOverlay {
    /// Color with every leading `#` stripped.
    pub fn color_hex(&self) -> &str {
        self.color.trim_start_matches('#')
    }

    /// `:l-text,...,l-end`, or `None` when the overlay is disabled.
    ///
    /// The segment starts with `:` and is appended after the render chain as-is.
    pub fn segment(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        Some(format!(
            ":l-text,i-{},lx-{},ly-{},ff-{},co-{},fs-{},l-end",
            encode_form_value(&self.text),
            self.lx,
            self.ly,
            encode_component(self.font.name()),
            encode_component(self.color_hex()),
            OVERLAY_FONT_SIZE,
        ))
    }

    pub(crate) fn validate(&self) -> IkResult<()> {
        WidgetRange::TEXT_POSITION.check("text.lx", self.lx)?;
        WidgetRange::TEXT_POSITION.check("text.ly", self.ly)?;
        let hex = self.color_hex();
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IkError::validation(format!(
                "text.color must be a #RRGGBB hex color, got '{}'",
                self.color
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/overlay.rs"]
mod tests;
