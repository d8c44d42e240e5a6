use super::*;

#[test]
fn chain_always_starts_with_size_and_extract_mode() {
    for w in (200..=3000).step_by(10) {
        for h in (200..=3000).step_by(130) {
            let params = CropParams {
                width: w,
                height: h,
                method: CropMethod::default(),
            };
            let s = build_crop_chain(&params).to_string();
            assert!(s.starts_with(&format!("w-{w},h-{h},cm-extract")), "{s}");
        }
    }
}

#[test]
fn relative_focus_appends_fo_token() {
    let params = CropParams {
        method: CropMethod::RelativeFocus {
            focus: Focus::TopLeft,
        },
        ..CropParams::default()
    };
    assert_eq!(
        build_crop_chain(&params).to_string(),
        "w-1000,h-1000,cm-extract,fo-top_left"
    );
}

#[test]
fn extract_appends_centre_coordinates() {
    let params = CropParams {
        width: 400,
        height: 300,
        method: CropMethod::Extract { x: 10, y: 20 },
    };
    let chain = build_crop_chain(&params);
    assert_eq!(chain.to_string(), "w-400,h-300,cm-extract,xc-10,yc-20");
    assert_eq!(chain.len(), 5);
}

#[test]
fn out_of_range_values_pass_through() {
    let params = CropParams {
        width: 7,
        height: 99_999,
        method: CropMethod::Extract { x: 0, y: 6000 },
    };
    assert_eq!(
        build_crop_chain(&params).to_string(),
        "w-7,h-99999,cm-extract,xc-0,yc-6000"
    );
}

#[test]
fn every_focus_has_a_distinct_wire_name() {
    let names: std::collections::BTreeSet<_> = Focus::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(names.len(), 9);
    for f in Focus::ALL {
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, format!("\"{}\"", f.as_str()));
    }
}

#[test]
fn method_deserializes_from_tagged_json() {
    let m: CropMethod = serde_json::from_str(r#"{"kind":"extract","x":10,"y":20}"#).unwrap();
    assert_eq!(m, CropMethod::Extract { x: 10, y: 20 });

    let m: CropMethod = serde_json::from_str(r#"{"kind":"relative_focus"}"#).unwrap();
    assert_eq!(
        m,
        CropMethod::RelativeFocus {
            focus: Focus::Center
        }
    );
}
