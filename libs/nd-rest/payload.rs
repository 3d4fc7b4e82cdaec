//! Request payload construction

use crate::container::Container;
use crate::diag::{Diagnostics, REPORT_TRAILER};

/// Build the controller's soft-delete marker payload:
/// `{"<class>":{"attributes":{"dn":"<dn>","status":"deleted"}}}`.
///
/// The class name and DN are inserted verbatim; inputs that break the JSON
/// (embedded unescaped quotes) surface as a diagnostic and `None`.
pub fn delete_json_payload(
    diags: &mut Diagnostics,
    class_name: &str,
    dn: &str,
) -> Option<Container> {
    let json_string = format!(
        r#"{{"{}":{{"attributes":{{"dn": "{}","status": "deleted"}}}}}}"#,
        class_name, dn
    );
    match Container::parse(json_string.as_bytes()) {
        Ok(payload) => Some(payload),
        Err(e) => {
            diags.add_error(
                "Construction of json payload failed",
                format!("Err: {}. {}", e, REPORT_TRAILER),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_payload_shape() {
        let mut diags = Diagnostics::new();
        let payload = delete_json_payload(&mut diags, "fvTenant", "uni/tn-Example").unwrap();

        assert_eq!(
            payload.raw(),
            &json!({
                "fvTenant": {
                    "attributes": {
                        "dn": "uni/tn-Example",
                        "status": "deleted"
                    }
                }
            })
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_delete_payload_reserializes() {
        let mut diags = Diagnostics::new();
        let payload = delete_json_payload(&mut diags, "fvBD", "uni/tn-A/BD-B").unwrap();

        let reparsed = Container::parse(&payload.encode_json()).unwrap();
        assert_eq!(
            reparsed.str_at(&["fvBD", "attributes", "status"]).unwrap(),
            "deleted"
        );
        assert_eq!(
            reparsed.str_at(&["fvBD", "attributes", "dn"]).unwrap(),
            "uni/tn-A/BD-B"
        );
    }

    #[test]
    fn test_malformed_input_appends_diagnostic() {
        let mut diags = Diagnostics::new();
        let payload = delete_json_payload(&mut diags, "fvTenant", "uni/tn-\"broken");

        assert!(payload.is_none());
        assert_eq!(diags.len(), 1);
        let entry = diags.last().unwrap();
        assert_eq!(entry.summary, "Construction of json payload failed");
        assert!(entry.detail.contains(REPORT_TRAILER));
    }
}
