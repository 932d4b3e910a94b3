//! Command-line argument parsing for the notepad
//!
//! Supports:
//! - Opening a file at startup
//! - Overriding the initial encoding and font size
//! - Jump to line/column

use std::path::PathBuf;

use clap::Parser;

use crate::config::EditorConfig;
use crate::encoding::TextEncoding;

/// A minimal notepad
#[derive(Parser, Debug)]
#[command(name = "jotpad", version, about = "A minimal notepad")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Encoding used to read and write the file (e.g. UTF-8, GBK, UTF-16LE)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Initial font size in points
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub font_size: Option<i32>,

    /// Go to line N in the file
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// File opened through the normal Open operation
    pub path: Option<PathBuf>,
    pub encoding: Option<TextEncoding>,
    pub font_size: Option<i32>,
    /// Initial cursor position (line, column) - 1-indexed from user, converted to 0-indexed
    pub initial_position: Option<(usize, usize)>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let encoding = match self.encoding {
            Some(label) => Some(
                TextEncoding::for_label(&label)
                    .ok_or_else(|| format!("Unknown encoding: {}", label))?,
            ),
            None => None,
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        });

        Ok(StartupConfig {
            path: self.path,
            encoding,
            font_size: self.font_size,
            initial_position,
        })
    }
}

impl StartupConfig {
    /// Apply overrides on top of the loaded editor config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(encoding) = self.encoding {
            config.default_encoding = encoding.name().to_string();
            let listed = config
                .encodings
                .iter()
                .any(|label| TextEncoding::for_label(label) == Some(encoding));
            if !listed {
                config.encodings.push(encoding.name().to_string());
            }
        }
        if let Some(size) = self.font_size {
            config.font_size = Some(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StartupConfig, String> {
        let args = CliArgs::try_parse_from(std::iter::once("jotpad").chain(args.iter().copied()))
            .map_err(|e| e.to_string())?;
        args.into_config()
    }

    #[test]
    fn test_no_args() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.path, None);
        assert_eq!(config.encoding, None);
        assert_eq!(config.initial_position, None);
    }

    #[test]
    fn test_path_and_encoding() {
        let config = parse(&["notes.txt", "--encoding", "gbk"]).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("notes.txt")));
        assert_eq!(config.encoding.unwrap().name(), "GBK");
    }

    #[test]
    fn test_unknown_encoding_is_error() {
        let err = parse(&["--encoding", "klingon"]).unwrap_err();
        assert!(err.contains("klingon"));
    }

    #[test]
    fn test_line_and_column_become_zero_based() {
        let config = parse(&["a.txt", "--line", "10", "--column", "5"]).unwrap();
        assert_eq!(config.initial_position, Some((9, 4)));

        let config = parse(&["a.txt", "--line", "3"]).unwrap();
        assert_eq!(config.initial_position, Some((2, 0)));
    }

    #[test]
    fn test_apply_overrides_font_and_encoding() {
        let startup = parse(&["--font-size", "20", "--encoding", "koi8-r"]).unwrap();
        let mut config = EditorConfig::default();
        startup.apply_to(&mut config);

        assert_eq!(config.font_size, Some(20));
        assert_eq!(config.default_encoding, "KOI8-R");
        assert!(config.encodings.iter().any(|e| e == "KOI8-R"));
    }

    #[test]
    fn test_apply_listed_encoding_not_duplicated() {
        let startup = parse(&["--encoding", "utf-8"]).unwrap();
        let mut config = EditorConfig::default();
        let before = config.encodings.len();
        startup.apply_to(&mut config);
        assert_eq!(config.encodings.len(), before);
    }
}
