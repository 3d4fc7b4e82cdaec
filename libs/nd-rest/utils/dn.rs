//! Distinguished-name helpers

/// Derive the short managed-object name from a DN.
///
/// The trailing DN segment carries a type prefix (`tn-Example`, `ap-Prod`);
/// everything after the first `-` is the name. A DN with a single segment is
/// returned unchanged.
///
/// ```
/// use nd_rest::mo_name;
/// assert_eq!(mo_name("uni/tn-Example/ap-Prod"), "Prod");
/// assert_eq!(mo_name("uni/tn-A-B"), "A-B");
/// assert_eq!(mo_name("uni"), "uni");
/// ```
pub fn mo_name(dn: &str) -> String {
    let segments: Vec<&str> = dn.split('/').collect();
    if segments.len() > 1 {
        let last = segments[segments.len() - 1];
        last.split('-').skip(1).collect::<Vec<_>>().join("-")
    } else {
        segments[0].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mo_name_nested_dn() {
        assert_eq!(mo_name("uni/tn-Example/ap-Prod"), "Prod");
        assert_eq!(mo_name("uni/tn-Example"), "Example");
    }

    #[test]
    fn test_mo_name_single_segment() {
        assert_eq!(mo_name("uni"), "uni");
    }

    #[test]
    fn test_mo_name_preserves_internal_dashes() {
        assert_eq!(mo_name("uni/tn-A-B"), "A-B");
        assert_eq!(mo_name("uni/tn-my-long-name"), "my-long-name");
    }

    #[test]
    fn test_mo_name_segment_without_prefix() {
        // No `-` in the trailing segment: nothing left after the type token.
        assert_eq!(mo_name("uni/plain"), "");
    }
}
