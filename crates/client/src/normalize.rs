use url::Url;

/// Reduces a pasted URL to its hostname. Anything that does not parse to a
/// non-empty host is returned unchanged.
pub fn normalize_name(input: &str) -> String {
    let candidate = if input.starts_with("http") {
        input.to_string()
    } else if input.starts_with("//") {
        format!("https:{input}")
    } else {
        format!("https://{input}")
    };

    match Url::parse(&candidate) {
        Ok(url) => match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => input.to_string(),
        },
        Err(_) => input.to_string(),
    }
}
