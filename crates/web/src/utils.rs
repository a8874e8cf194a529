// =============================================================================
// Dexter Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Link Utilities
// 3. Date Utilities
// =============================================================================

use chrono::Datelike;
use web_sys::Window;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object, if there is one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

// -----------------------------------------------------------------------------
// 2. Link Utilities
// -----------------------------------------------------------------------------

/// Google Maps embed URL for a free-form address.
pub fn map_embed_url(address: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        urlencoding::encode(address)
    )
}

/// `mailto:` link for an email address.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// `tel:` link for a phone number, keeping only the leading `+` and digits.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    format!("tel:{}", digits)
}

// -----------------------------------------------------------------------------
// 3. Date Utilities
// -----------------------------------------------------------------------------

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Footer copyright line.
pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {} {} All rights reserved.", year, holder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_embed_url_encodes_address() {
        let url = map_embed_url("#209-215 Main St NW, Slave Lake");
        assert_eq!(
            url,
            "https://www.google.com/maps?q=%23209-215%20Main%20St%20NW%2C%20Slave%20Lake&output=embed"
        );
    }

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+1 587-839-4791"), "tel:+15878394791");
        assert_eq!(tel_href("(587) 839 4791"), "tel:5878394791");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(mailto_href("a@b.com"), "mailto:a@b.com");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2025, "Dexter Enterprises Ltd."),
            "© 2025 Dexter Enterprises Ltd. All rights reserved."
        );
    }
}
