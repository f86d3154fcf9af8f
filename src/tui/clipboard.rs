//! Clipboard via the OSC 52 terminal escape.
//!
//! Works over SSH and inside tmux (with `set-clipboard on`) without any
//! platform clipboard library.

use std::io::{self, Write};

use base64::Engine;

/// Writes `text` to the terminal clipboard through `out`.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{}\x07", encoded)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut buf = Vec::new();
        copy_to_clipboard(&mut buf, "alex@example.com").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\x1b]52;c;YWxleEBleGFtcGxlLmNvbQ==\x07"
        );
    }

    #[test]
    fn test_utf8_payload() {
        let mut buf = Vec::new();
        copy_to_clipboard(&mut buf, "é").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b]52;c;w6k=\x07");
    }
}
