use super::*;

fn overlay(text: &str, color: &str, font: Font, lx: u32, ly: u32) -> TextOverlay {
    TextOverlay {
        enabled: true,
        lx,
        ly,
        text: text.to_string(),
        color: color.to_string(),
        font,
    }
}

#[test]
fn segment_matches_wire_format() {
    let o = overlay("Hi There", "#ABCDEF", Font::Lato, 5, 5);
    assert_eq!(
        o.segment().unwrap(),
        ":l-text,i-Hi+There,lx-5,ly-5,ff-Lato,co-ABCDEF,fs-45,l-end"
    );
}

#[test]
fn disabled_overlay_has_no_segment() {
    let mut o = overlay("x", "#000000", Font::Lato, 0, 0);
    o.enabled = false;
    assert!(o.segment().is_none());
    assert!(TextOverlay::default().segment().is_none());
}

#[test]
fn every_leading_hash_is_stripped() {
    let o = overlay("x", "##00ff00", Font::Arvo, 1, 2);
    assert_eq!(o.color_hex(), "00ff00");
    assert!(o.segment().unwrap().contains(",co-00ff00,"));
}

#[test]
fn font_names_with_spaces_are_escaped() {
    let o = overlay("a", "#000000", Font::OpenSans, 10, 10);
    assert!(o.segment().unwrap().contains(",ff-Open%20Sans,"));
}

#[test]
fn font_list_is_complete_and_round_trips_names() {
    assert_eq!(Font::ALL.len(), 22);
    for f in Font::ALL {
        assert_eq!(Font::from_name(f.name()), Some(f));
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, format!("\"{}\"", f.name()));
    }
    assert_eq!(Font::from_name("Comic Sans"), None);
}

#[test]
fn validate_rejects_bad_colors_and_positions() {
    overlay("x", "#A1B2C3", Font::Lato, 0, 5000).validate().unwrap();
    assert!(overlay("x", "#GGGGGG", Font::Lato, 0, 0).validate().is_err());
    assert!(overlay("x", "#FFF", Font::Lato, 0, 0).validate().is_err());
    assert!(overlay("x", "#000000", Font::Lato, 5001, 0).validate().is_err());
}
