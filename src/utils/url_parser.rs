/// Extract hostname from a URL string
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx+3..] } else { s };
    let host = s.split(['/', '?']).next().unwrap_or(s);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_from_url() {
        assert_eq!(hostname_from_url("https://repersonalize.jewelml.io/c/p"), "repersonalize.jewelml.io");
        assert_eq!(hostname_from_url("http://127.0.0.1:9000"), "127.0.0.1:9000");
        assert_eq!(hostname_from_url("example.com?x=1"), "example.com");
        assert_eq!(hostname_from_url("   "), "");
    }
}
