//! ikform builds ImageKit transformation URLs from a crop/resize/overlay form.
//!
//! The form itself (sliders, selects, toggles) lives in whatever UI hosts this crate.
//! Each interaction re-evaluates the whole form through [`render_page`]:
//!
//! 1. **Gate**: `access_token` / `imagekit_id` are compared against [`Secrets`];
//!    a mismatch stops evaluation with [`IkError::Authentication`].
//! 2. **Probe**: the untransformed origin image is fetched only far enough to read
//!    its [`Dimensions`]. Failures are reported inline, never fatal.
//! 3. **Build**: [`build_urls`] turns a [`FormState`] into the preview, download and
//!    origin URLs. It is pure and can be called on its own.
//!
//! The preview URL has the shape
//! `<base>/<imagekit_id>/<path>?tr=<crop chain>:<render chain>[:l-text,...,l-end]`.
//! All pixel work happens on the image service; this crate only reads headers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod access;
mod config;
mod form;
mod foundation;
mod page;
mod probe;
mod transform;

pub use access::gate::{AccessGate, Authorized, Secrets};
pub use config::{AppConfig, ENV_ACCESS_TOKEN, ENV_BASE_URL, ENV_IMAGEKIT_ID, ProbeConfig};
pub use form::state::FormState;
pub use form::urls::{ATTACHMENT_FLAG, Endpoint, TransformUrls, build_urls};
pub use foundation::core::{Dimensions, IMAGEKIT_BASE_URL, PLACEHOLDER_URL, WidgetRange};
pub use foundation::error::{IkError, IkResult, MetadataFetchError};
pub use page::query::QueryParams;
pub use page::view::{ImageDetail, PageView, render_page};
pub use probe::http::HttpProbe;
pub use probe::metadata::{HeaderScan, MetadataProbe, read_dimensions, scan_header};
pub use transform::chain::TransformationChain;
pub use transform::crop::{CropMethod, CropParams, Focus, build_crop_chain};
pub use transform::encode::{encode_component, encode_form_value, encode_path};
pub use transform::overlay::{Font, OVERLAY_FONT_SIZE, TextOverlay};
pub use transform::render::{OutputFormat, RenderParams, build_render_chain};
