use arboard::Clipboard;
use std::io;
use std::process::{Command, Stdio};

/// URL schemes handed to the system opener
const OPENABLE_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

pub fn is_openable(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    OPENABLE_SCHEMES
        .iter()
        .any(|scheme| url.starts_with(scheme) && url.len() > scheme.len())
}

/// Build the command that opens `url`, either with the configured browser
/// (program plus optional arguments) or the platform's default opener
pub fn opener_command(url: &str, browser: Option<&str>) -> io::Result<Command> {
    if !is_openable(url) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to open '{url}'"),
        ));
    }

    let mut command = match browser.map(str::trim).filter(|b| !b.is_empty()) {
        Some(browser) => {
            let mut parts = browser.split_whitespace();
            let mut command = Command::new(parts.next().unwrap_or(browser));
            command.args(parts);
            command
        }
        None if cfg!(target_os = "windows") => {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]);
            command
        }
        None if cfg!(target_os = "macos") => Command::new("open"),
        None => Command::new("xdg-open"),
    };

    command
        .arg(url.trim())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(command)
}

pub fn open_url(url: &str, browser: Option<&str>) -> io::Result<()> {
    let mut child = opener_command(url, browser)?.spawn()?;
    tracing::debug!(url, pid = child.id(), "spawned url opener");

    // Reap the opener so it doesn't linger as a zombie
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::warn!("url opener did not exit cleanly: {}", e);
        }
    });
    Ok(())
}

/// System clipboard, connected on first use and kept alive afterwards
/// (X11 only serves the contents while the owner is alive)
#[derive(Default)]
pub struct UrlClipboard {
    inner: Option<Clipboard>,
}

impl UrlClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_openable_schemes() {
        assert!(is_openable("https://quizlet.com"));
        assert!(is_openable("http://example.com"));
        assert!(is_openable("HTTPS://EXAMPLE.COM"));
        assert!(is_openable("mailto:someone@example.com"));
        assert!(is_openable("  https://padded.example  "));

        assert!(!is_openable("https://"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("javascript:alert(1)"));
        assert!(!is_openable("quizlet.com"));
        assert!(!is_openable(""));
    }

    #[test]
    fn test_refuses_unsupported_urls() {
        let err = opener_command("ftp://example.com", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_configured_browser_with_arguments() {
        let command =
            opener_command("https://ankiweb.net", Some("firefox --new-window")).unwrap();
        assert_eq!(command.get_program(), OsStr::new("firefox"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("--new-window"), OsStr::new("https://ankiweb.net")]);
    }

    #[test]
    fn test_blank_browser_uses_platform_opener() {
        let command = opener_command("https://ankiweb.net", Some("   ")).unwrap();
        let expected = if cfg!(target_os = "windows") {
            "cmd"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        assert_eq!(command.get_program(), OsStr::new(expected));
        assert_eq!(
            command.get_args().last(),
            Some(OsStr::new("https://ankiweb.net"))
        );
    }
}
