//! Set-Cookie harvesting from response header lines

const SET_COOKIE_PREFIX: &str = "Set-Cookie:";

/// Accumulates cookies announced by the server while headers are received
#[derive(Debug, Default)]
pub struct CookieCollector {
    cookies: Vec<String>,
}

impl CookieCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw header line; non Set-Cookie lines are ignored
    pub fn observe_line(&mut self, line: &str) {
        if let Some(cookie) = parse_set_cookie_line(line) {
            log::trace!("captured cookie {}", cookie);
            self.cookies.push(cookie);
        }
    }

    pub fn cookies(&self) -> &[String] {
        &self.cookies
    }

    /// Cookie header value built from the captured entries, `""` when none
    pub fn into_cookie_header(self) -> String {
        self.cookies.join(";")
    }
}

/// Extract `name=value` from a `Set-Cookie:` header line, dropping attributes
pub fn parse_set_cookie_line(line: &str) -> Option<String> {
    let prefix = line.get(..SET_COOKIE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SET_COOKIE_PREFIX) {
        return None;
    }
    let rest = &line[SET_COOKIE_PREFIX.len()..];
    let pair = rest.split(';').next().unwrap_or_default();
    Some(pair.trim().to_string())
}
