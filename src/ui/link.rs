use std::io;
use std::process::{Command, Stdio};
use std::thread;
use url::Url;

/// Hands a URL to something that can show it. Fire and forget: callers never
/// learn whether the link was opened.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Opens links with the desktop's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) {
        let Some(url) = parse_link(url) else {
            log::debug!("ignoring malformed link {url:?}");
            return;
        };
        let (program, args) = opener_command(url.as_str());
        match spawn_detached(program, &args) {
            Ok(_) => log::debug!("opened {url} with {program}"),
            Err(e) => log::debug!("could not run {program} for {url}: {e}"),
        }
    }
}

/// Starts `program` with stdio detached and reaps it on a background thread,
/// so a finished opener never lingers as a zombie.
fn spawn_detached(program: &str, args: &[String]) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::debug!("waiting on link opener failed: {e}");
        }
    });
    Ok(())
}

/// Returns the parsed URL when it is an absolute http(s) link.
pub fn parse_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Some(url),
        _ => None,
    }
}

fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(windows) {
        // The empty string is the window title `start` expects first.
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every link it is asked to open instead of launching anything.
    #[derive(Default)]
    pub(crate) struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_parse_link_accepts_https() {
        let url = parse_link("https://apps.apple.com/id/app/worry-bin/id6498626727").unwrap();
        assert_eq!(url.host_str(), Some("apps.apple.com"));
    }

    #[test]
    fn test_parse_link_trims_whitespace() {
        assert!(parse_link("  http://example.com/x  ").is_some());
    }

    #[test]
    fn test_parse_link_rejects_garbage() {
        assert!(parse_link("").is_none());
        assert!(parse_link("not a url").is_none());
        assert!(parse_link("apps.apple.com/app").is_none());
    }

    #[test]
    fn test_parse_link_rejects_other_schemes() {
        assert!(parse_link("file:///etc/passwd").is_none());
        assert!(parse_link("javascript:alert(1)").is_none());
    }

    #[test]
    fn test_system_opener_ignores_malformed_link() {
        // Returns without spawning anything.
        SystemOpener.open("::::");
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_detached_runs_and_reaps_child() {
        assert!(spawn_detached("true", &[]).is_ok());
    }

    #[test]
    fn test_spawn_detached_reports_missing_program() {
        assert!(spawn_detached("whatday-no-such-opener", &[]).is_err());
    }

    #[test]
    fn test_opener_command_passes_url_last() {
        let (_, args) = opener_command("https://example.com");
        assert_eq!(args.last().map(String::as_str), Some("https://example.com"));
    }

    #[test]
    fn test_recording_opener_keeps_order() {
        let opener = RecordingOpener::default();
        opener.open("https://a.example");
        opener.open("https://b.example");
        assert_eq!(
            *opener.opened.borrow(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
