use convert_case::{Boundary, Case, Casing};

/// Word boundaries used for key projection.
///
/// Digits stay attached to the word before them, so a name that is already
/// snake_case projects onto itself.
const KEY_BOUNDARIES: &[Boundary] = &[
    Boundary::Underscore,
    Boundary::Hyphen,
    Boundary::Space,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    Boundary::Acronym,
];

/// Lower snake_case projection of a field name or alias.
///
/// ```
/// use bean_engine::utils::canonical_key;
///
/// assert_eq!(canonical_key("userId"), "user_id");
/// assert_eq!(canonical_key("latest_login_ip"), "latest_login_ip");
/// assert_eq!(canonical_key("HTTPStatus"), "http_status");
/// assert_eq!(canonical_key("address_line1"), "address_line1");
/// ```
pub fn canonical_key(name: &str) -> String {
    name.with_boundaries(KEY_BOUNDARIES).to_case(Case::Snake)
}

/// Field name targeted by an accessor method name such as `getUserId`.
///
/// The prefix is stripped and the first letter lower-cased.
#[inline]
pub fn getter_target(method: &str) -> Option<String> {
    accessor_target(method, "get")
}

/// Field name targeted by a mutator method name such as `setUserId`.
#[inline]
pub fn setter_target(method: &str) -> Option<String> {
    accessor_target(method, "set")
}

fn accessor_target(method: &str, prefix: &str) -> Option<String> {
    let rest = method.strip_prefix(prefix)?;
    let rest = rest.strip_prefix('_').unwrap_or(rest);
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::{canonical_key, getter_target, setter_target};

    #[test]
    fn digits_stay_attached() {
        assert_eq!(canonical_key("address_line1"), "address_line1");
        assert_eq!(canonical_key("ip_v4"), "ip_v4");
        assert_eq!(canonical_key("addressLine1"), "address_line1");
        assert_eq!(canonical_key("ipV4Addr"), "ip_v4_addr");
        assert_eq!(canonical_key("page-size"), "page_size");
    }

    #[test]
    fn accessor_names() {
        assert_eq!(getter_target("getUserId").as_deref(), Some("userId"));
        assert_eq!(setter_target("setName").as_deref(), Some("name"));
        assert_eq!(getter_target("get_name").as_deref(), Some("name"));
        assert_eq!(getter_target("get"), None);
        assert_eq!(getter_target("setName"), None);
    }
}
