//! Host/port and path helpers shared by the URL-style grammars.

/// Turn an empty string into `None`.
pub(super) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Split an authority into host and port.
///
/// The port is kept as text. Bracketed IPv6 hosts keep their brackets; a
/// colon inside the brackets is not a port separator. Anything else after
/// the closing bracket is split like a plain authority.
pub(super) fn split_host_port(authority: &str) -> (Option<String>, Option<String>) {
    if let Some(end) = authority.starts_with('[').then(|| authority.find(']')).flatten() {
        let (host, rest) = authority.split_at(end + 1);
        if rest.is_empty() || rest.starts_with(':') {
            return (non_empty(host), rest.get(1..).and_then(non_empty));
        }
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => (non_empty(host), non_empty(port)),
        None => (non_empty(authority), None),
    }
}

/// Join host and port back into an authority. Empty when both are absent.
///
/// A portless host that would split into a host and a port again gets a
/// trailing `:` so that it reads back unchanged.
pub(super) fn join_host_port(host: Option<&str>, port: Option<&str>) -> String {
    let host = host.unwrap_or_default();
    match port.filter(|p| !p.is_empty()) {
        Some(port) => format!("{}:{}", host, port),
        None if !host.is_empty() && split_host_port(host).0.as_deref() != Some(host) => {
            format!("{}:", host)
        }
        None => host.to_string(),
    }
}

/// Split `authority/name` on the last slash.
///
/// Without a slash the whole input is the database name and there is no
/// authority.
pub(super) fn split_authority_path(body: &str) -> (&str, &str) {
    match body.rsplit_once('/') {
        Some((authority, name)) => (authority, name),
        None => ("", body),
    }
}
