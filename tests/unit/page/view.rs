use std::cell::RefCell;

use super::*;
use crate::{access::gate::Secrets, foundation::error::{IkError, MetadataFetchError}};

struct FixedProbe {
    answer: Result<Dimensions, u16>,
    calls: RefCell<Vec<String>>,
}

impl FixedProbe {
    fn ok(width: u32, height: u32) -> Self {
        Self {
            answer: Ok(Dimensions { width, height }),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn status(code: u16) -> Self {
        Self {
            answer: Err(code),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MetadataProbe for FixedProbe {
    fn probe(&self, url: &str) -> Result<Dimensions, MetadataFetchError> {
        self.calls.borrow_mut().push(url.to_string());
        self.answer.map_err(MetadataFetchError::Status)
    }
}

fn config() -> AppConfig {
    AppConfig {
        secrets: Secrets {
            access_token: "tok".to_string(),
            imagekit_id: "demo".to_string(),
        },
        ..AppConfig::default()
    }
}

fn query(token: &str) -> QueryParams {
    QueryParams::parse(&format!("access_token={token}&imagekit_id=demo&path=a.jpg"))
}

#[test]
fn authenticated_page_probes_origin_and_builds_urls() {
    let q = query("tok");
    let form = FormState::seeded(q.path.as_deref());
    let probe = FixedProbe::ok(640, 480);

    let view = render_page(&q, &form, &config(), Some(&probe)).unwrap();
    assert_eq!(view.origin_url, "https://ik.imagekit.io/demo/a.jpg");
    assert_eq!(*probe.calls.borrow(), vec![view.origin_url.clone()]);
    assert_eq!(
        view.image_detail,
        ImageDetail::Dimensions {
            dimensions: Dimensions {
                width: 640,
                height: 480
            }
        }
    );
    let urls = view.urls.as_ref().unwrap();
    assert!(urls.preview.starts_with("https://ik.imagekit.io/demo/a.jpg?tr=w-1000"));
    assert_eq!(view.preview_width, 1000);
    assert_eq!(view.default_display_url, PLACEHOLDER_URL);
}

#[test]
fn bad_credentials_short_circuit_before_probe() {
    let probe = FixedProbe::ok(1, 1);
    let err = render_page(&query("nope"), &FormState::default(), &config(), Some(&probe))
        .unwrap_err();
    assert!(matches!(err, IkError::Authentication));
    assert!(probe.calls.borrow().is_empty());
}

#[test]
fn probe_failure_is_inline_and_non_fatal() {
    let q = query("tok");
    let form = FormState::seeded(q.path.as_deref());
    let view = render_page(&q, &form, &config(), Some(&FixedProbe::status(404))).unwrap();
    assert_eq!(
        view.image_detail,
        ImageDetail::Error {
            message: "Failed to retrieve original image, status code: 404".to_string()
        }
    );
    assert!(view.urls.is_some());
    assert!(view.to_string().starts_with("Failed to retrieve original image"));
}

#[test]
fn empty_path_still_probes_but_builds_no_urls() {
    let q = QueryParams::parse("access_token=tok&imagekit_id=demo&url=https://x.io/p.png");
    let probe = FixedProbe::status(400);
    let view = render_page(&q, &FormState::seeded(q.path.as_deref()), &config(), Some(&probe))
        .unwrap();
    assert_eq!(*probe.calls.borrow(), vec!["https://ik.imagekit.io/demo/".to_string()]);
    assert!(view.urls.is_none());
    assert_eq!(view.default_display_url, "https://x.io/p.png");
    assert!(view.to_string().contains("showing https://x.io/p.png"));
}

#[test]
fn text_report_lists_all_urls() {
    let q = query("tok");
    let form = FormState::seeded(q.path.as_deref());
    let view = render_page(&q, &form, &config(), None).unwrap();
    assert_eq!(view.image_detail, ImageDetail::NotProbed);
    let text = view.to_string();
    assert!(text.contains("Modified image (1000px): https://ik.imagekit.io/demo/a.jpg?tr="));
    assert!(text.contains("Original image: https://ik.imagekit.io/demo/a.jpg\n"));
    assert!(text.contains("&ik-attachment=true"));
}

#[test]
fn view_serializes_with_tagged_detail() {
    let q = query("tok");
    let form = FormState::seeded(q.path.as_deref());
    let view = render_page(&q, &form, &config(), Some(&FixedProbe::ok(3, 4))).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["image_detail"]["status"], "dimensions");
    assert_eq!(json["image_detail"]["dimensions"]["width"], 3);
    assert!(json["urls"]["download"].as_str().unwrap().ends_with("&ik-attachment=true"));
}
