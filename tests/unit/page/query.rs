use super::*;

#[test]
fn parses_known_keys_and_decodes_values() {
    let q = QueryParams::parse(
        "?access_token=abc%2F123&imagekit_id=demo&path=folder%2Fmy+photo.jpg&url=https%3A%2F%2Fx.io%2Fa.png&other=1",
    );
    assert_eq!(q.access_token.as_deref(), Some("abc/123"));
    assert_eq!(q.imagekit_id.as_deref(), Some("demo"));
    assert_eq!(q.path.as_deref(), Some("folder/my photo.jpg"));
    assert_eq!(q.url.as_deref(), Some("https://x.io/a.png"));
}

#[test]
fn missing_keys_stay_none() {
    let q = QueryParams::parse("imagekit_id=demo");
    assert_eq!(q.access_token, None);
    assert_eq!(q.path, None);
    assert_eq!(QueryParams::parse(""), QueryParams::default());
}

#[test]
fn first_occurrence_wins_and_bare_keys_are_empty() {
    let q = QueryParams::parse("path=a.jpg&path=b.jpg&access_token");
    assert_eq!(q.path.as_deref(), Some("a.jpg"));
    assert_eq!(q.access_token.as_deref(), Some(""));
}

#[test]
fn encoded_plus_stays_a_plus() {
    let q = QueryParams::parse("access_token=a%2Bb+c&imagekit_id=demo");
    assert_eq!(q.access_token.as_deref(), Some("a+b c"));
}
