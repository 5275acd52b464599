use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::Write;

use crate::presentation::view_models::DisplayState;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render_display(&self, display: &DisplayState) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_display(&mut out, display)
    }

    pub fn write_display(&self, out: &mut impl Write, display: &DisplayState) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(display)?)?;
            return Ok(());
        }

        match (self.color, display.is_positive) {
            (true, true) => writeln!(out, "{}", display.text.green())?,
            (true, false) => writeln!(out, "{}", display.text.red())?,
            (false, _) => writeln!(out, "{}", display.text)?,
        }
        if let Some(quota) = &display.quota_text {
            writeln!(out, "Sisa kuota: {}", quota)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer {
            json_mode: false,
            color: false,
        }
    }

    fn render(renderer: &ConsoleRenderer, display: &DisplayState) -> String {
        let mut buf = Vec::new();
        renderer.write_display(&mut buf, display).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output_with_quota() {
        let display = DisplayState {
            text: "✅ Receipt berhasil dikirim ke Telegram!".to_string(),
            is_positive: true,
            quota_text: Some("5".to_string()),
        };
        assert_eq!(
            render(&plain(), &display),
            "✅ Receipt berhasil dikirim ke Telegram!\nSisa kuota: 5\n"
        );
    }

    #[test]
    fn test_plain_output_without_quota() {
        let display = DisplayState {
            text: "❌ Koneksi gagal: timeout".to_string(),
            is_positive: false,
            quota_text: None,
        };
        assert_eq!(render(&plain(), &display), "❌ Koneksi gagal: timeout\n");
    }

    #[test]
    fn test_json_output() {
        let renderer = ConsoleRenderer {
            json_mode: true,
            color: false,
        };
        let display = DisplayState {
            text: "❌ Kuota habis".to_string(),
            is_positive: false,
            quota_text: Some("0".to_string()),
        };
        let value: serde_json::Value = serde_json::from_str(&render(&renderer, &display)).unwrap();
        assert_eq!(value["is_positive"], false);
        assert_eq!(value["quota_text"], "0");
        assert_eq!(value["text"], "❌ Kuota habis");
    }
}
