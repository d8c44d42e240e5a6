/// Query parameters the hosting environment hands to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct QueryParams {
    /// `access_token`, compared against the configured secret.
    pub access_token: Option<String>,
    /// `imagekit_id`, the account whose images are transformed.
    pub imagekit_id: Option<String>,
    /// `path`, seeds the image path field.
    pub path: Option<String>,
    /// `url`, fallback display value.
    pub url: Option<String>,
}

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored, `+` decodes to a space, and the first occurrence of a
    /// key wins. Unknown keys are dropped.
    pub fn parse(query: &str) -> Self {
        let mut out = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match k.as_ref() {
                "access_token" => &mut out.access_token,
                "imagekit_id" => &mut out.imagekit_id,
                "path" => &mut out.path,
                "url" => &mut out.url,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(v.into_owned());
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/query.rs"]
mod tests;
