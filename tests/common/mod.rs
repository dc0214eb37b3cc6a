//! Shared helpers: an in-memory sink and a parser for plain (no color, no time) lines.

#![allow(dead_code)]

use logfacade::{FacadeConfig, LogFacade};
use std::io;
use std::sync::{Arc, Mutex};

/// In-memory sink shared by every writer it hands out.
#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// `MakeWriter` handing out clones of this capture.
    pub fn make_writer(&self) -> impl Fn() -> Capture + Send + Sync + 'static {
        let capture = self.clone();
        move || capture.clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

/// Facade with plain rendering writing into a fresh capture.
pub fn captured_facade(name: &str) -> (LogFacade, Capture) {
    let capture = Capture::new();
    let config = FacadeConfig {
        name: name.to_string(),
        ..FacadeConfig::plain()
    };
    let facade = LogFacade::with_writer(&config, capture.make_writer())
        .expect("plain config should be valid");
    (facade, capture)
}

/// One rendered line, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: String,
    pub message: String,
    pub critical: bool,
}

/// Parse a plain line such as ` WARN disk at 90 percent logger=Console`.
pub fn parse_line(line: &str, name: &str) -> Option<Line> {
    let (level, rest) = line.trim_start().split_once(' ')?;
    let (message, fields) = rest.rsplit_once(&format!(" logger={}", name))?;
    Some(Line {
        level: level.to_string(),
        message: message.to_string(),
        critical: fields.contains("critical=true"),
    })
}

/// Parse every captured line, panicking on any line that does not match the layout.
pub fn parsed_lines(capture: &Capture, name: &str) -> Vec<Line> {
    capture
        .lines()
        .iter()
        .map(|line| {
            parse_line(line, name).unwrap_or_else(|| panic!("malformed line: {:?}", line))
        })
        .collect()
}
