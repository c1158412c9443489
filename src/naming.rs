/// Map an accessor-style name to its CSS form: `backgroundColor` -> `background-color`.
///
/// Every ASCII uppercase letter becomes `-` plus its lowercase form. No
/// validation, so `webkitTransform` yields `webkit-transform` and custom
/// properties pass through unchanged.
pub fn to_dash_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Inverse of [`to_dash_case`] for well-formed CSS names. Custom properties
/// (`--*`) are returned as-is.
pub fn to_camel_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_case() {
        assert_eq!(to_dash_case("backgroundColor"), "background-color");
        assert_eq!(to_dash_case("color"), "color");
        assert_eq!(to_dash_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_dash_case("WebkitTransform"), "-webkit-transform");
        assert_eq!(to_dash_case("--mainGap"), "--main-gap");
        assert_eq!(to_dash_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("background-color"), "backgroundColor");
        assert_eq!(to_camel_case("-webkit-transform"), "WebkitTransform");
        assert_eq!(to_camel_case("--main-gap"), "--main-gap");
        assert_eq!(to_camel_case("width"), "width");
    }
}
