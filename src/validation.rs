use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_+-][A-Za-z0-9_.+-]*@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+$")
        .expect("regex compiles")
});

/// Local part `@` domain with at least one dot-separated label, no leading
/// dot and no consecutive dots anywhere. Comparison elsewhere is exact and
/// case-sensitive, so no normalization happens here.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email) && !email.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid = [
            "test@example.com",
            "user.name+tag+sorting@example.com",
            "x@example.com",
            "example-indeed@strange-example.com",
        ];
        for email in valid {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid = [
            "plainaddress",
            "@missingusername.com",
            "user@.nodomain",
            "user@invalid-characters-in-domain!",
            "user@domain..com",
            ".leading.dot@example.com",
            "double..dot@example.com",
        ];
        for email in invalid {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }
}
