//! REST request execution and response classification
//!
//! The controller reports several non-200 outcomes that are benign in
//! practice ("already exists", "already deleted", ...). [`classify`] folds
//! HTTP status, decoded body and transport error into a single [`Outcome`],
//! consulting a [`ToleranceSet`] of error codes that downgrade a failure to
//! an accepted result. [`do_rest_request_escape_html`] drives the full
//! build-dispatch-classify cycle against an [`HttpBackend`].

use serde_json::Value;
use tracing::debug;

use crate::client::{HttpBackend, Method};
use crate::container::Container;
use crate::diag::{Diagnostic, Diagnostics, REPORT_TRAILER};
use crate::utils::{strip_quotes, strip_square_brackets};

/// Controller error codes treated as acceptable outcomes rather than
/// failures. Immutable once built; substitute a different set for controllers
/// with other tolerance semantics.
#[derive(Debug, Clone)]
pub struct ToleranceSet {
    codes: Vec<String>,
}

impl ToleranceSet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Codes observed from the controller for idempotent conditions:
    /// "1", "103", "107" and "120".
    pub fn controller_defaults() -> Self {
        Self::new(["1", "103", "107", "120"])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

impl Default for ToleranceSet {
    fn default() -> Self {
        Self::controller_defaults()
    }
}

/// Classified result of a dispatched request. Exactly one variant applies.
#[derive(Debug)]
pub enum Outcome {
    /// HTTP 200.
    Success(Container),
    /// Non-200 whose error code is in the tolerance set; the body is still
    /// usable by the caller.
    Tolerated(Container),
    /// Hard failure. The same diagnostic has been appended to the sink.
    Failed(Diagnostic),
}

impl Outcome {
    pub fn into_body(self) -> Option<Container> {
        match self {
            Outcome::Success(body) | Outcome::Tolerated(body) => Some(body),
            Outcome::Failed(_) => None,
        }
    }
}

const CODE_PATH: [&str; 4] = ["imdata", "error", "attributes", "code"];
const TEXT_PATH: [&str; 4] = ["imdata", "error", "attributes", "text"];

fn stripped(rendered: &str) -> &str {
    strip_quotes(strip_square_brackets(rendered))
}

/// Interpret the outcome of a dispatched request.
///
/// Decision order, first match wins: 200 is a success; a non-200 with a
/// decodable body is tolerated or failed depending on the embedded error
/// code; a transport error is always a failure; and a non-200 with neither
/// body nor transport error is a failure as well, never a silent success.
pub fn classify(
    diags: &mut Diagnostics,
    status: Option<u16>,
    body: Option<Container>,
    transport_err: Option<&str>,
    method: Method,
    tolerated: &ToleranceSet,
) -> Outcome {
    if status == Some(200) {
        return Outcome::Success(body.unwrap_or_else(|| Container::from_value(Value::Null)));
    }

    let status_text = status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let summary = format!("The {} rest request failed", method.lowercase());

    let diagnostic = match (transport_err, body.filter(|b| !b.is_empty())) {
        (None, Some(body)) => {
            let code_rendered = body.search_string(&CODE_PATH).unwrap_or_default();
            let code = stripped(&code_rendered).to_string();

            if tolerated.contains(&code) {
                let text_rendered = body.search_string(&TEXT_PATH).unwrap_or_default();
                debug!("Tolerated controller error: {}", stripped(&text_rendered));
                return Outcome::Tolerated(body);
            }

            let response = body
                .raw()
                .get("imdata")
                .map(Value::to_string)
                .unwrap_or_else(|| body.to_string());
            Diagnostic {
                summary,
                detail: format!(
                    "Code: {} Response: {}, err: none. {}",
                    status_text, response, REPORT_TRAILER,
                ),
            }
        }
        (Some(err), _) => Diagnostic {
            summary,
            detail: format!("Err: {}. {}", err, REPORT_TRAILER),
        },
        // Non-200 with neither a body nor a transport error.
        (None, None) => Diagnostic {
            summary,
            detail: format!(
                "Code: {} Response: empty, err: none. {}",
                status_text, REPORT_TRAILER,
            ),
        },
    };

    diags.add_error(diagnostic.summary.clone(), diagnostic.detail.clone());
    Outcome::Failed(diagnostic)
}

/// Execute a REST request against the controller.
///
/// `path` is normalized to carry a leading slash before dispatch. In escaped
/// mode the payload goes through the backend's structured builder (markup
/// encoded); otherwise it is pre-serialized and sent raw. Returns the
/// response body on success or a tolerated outcome; on failure a diagnostic
/// has been appended to `diags` and `None` comes back.
pub async fn do_rest_request_escape_html(
    diags: &mut Diagnostics,
    backend: &dyn HttpBackend,
    path: &str,
    method: Method,
    payload: Option<&Container>,
    escape_html: bool,
) -> Option<Container> {
    // Ensure path starts with a slash to assure the request is routed and
    // signed correctly.
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    debug!(
        "Sending {} request to {} (escape_html: {})",
        method, path, escape_html
    );

    let built = if escape_html {
        backend.make_rest_request(method, &path, payload, true)
    } else if let Some(payload) = payload {
        backend.make_rest_request_raw(method, &path, payload.encode_json(), false)
    } else {
        backend.make_rest_request(method, &path, None, false)
    };

    let request = match built {
        Ok(request) => request,
        Err(e) => {
            diags.add_error(
                "Creation of rest request failed",
                format!("err: {}. {}", e, REPORT_TRAILER),
            );
            return None;
        }
    };

    let exchange = backend.do_request(request).await;

    classify(
        diags,
        exchange.status,
        exchange.body,
        exchange.error.as_deref(),
        method,
        &ToleranceSet::controller_defaults(),
    )
    .into_body()
}

/// [`do_rest_request_escape_html`] in escaped mode, the controller default.
pub async fn do_rest_request(
    diags: &mut Diagnostics,
    backend: &dyn HttpBackend,
    path: &str,
    method: Method,
    payload: Option<&Container>,
) -> Option<Container> {
    do_rest_request_escape_html(diags, backend, path, method, payload, true).await
}
