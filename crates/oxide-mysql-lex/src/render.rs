//! Input loading and output rendering for the command line.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use oxide_mysql_scanner::{Lexer, LexerConfig, Token, TokenKind};

/// Output format for scanned tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One token per line: `line:column kind value`.
    #[default]
    Text,
    /// A JSON array of tokens.
    Json,
}

/// Reads SQL from the inline argument, a file, or stdin, in that order.
pub fn read_source(inline: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(sql) = inline {
        return Ok(sql);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut sql = String::new();
    std::io::stdin()
        .read_to_string(&mut sql)
        .context("failed to read stdin")?;
    Ok(sql)
}

/// Loads a JSON configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LexerConfig> {
    let Some(path) = path else {
        return Ok(LexerConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Renders tokens in the requested format.
pub fn render_tokens(tokens: &[Token], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(tokens)?),
    }
}

/// Splits the input into `;`-terminated statements using the lexer's
/// statement-text channel. A trailing statement without `;` is kept
/// unless it is blank.
pub fn statements<'a>(lexer: &mut Lexer<'a>) -> Vec<&'a str> {
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Semicolon => out.push(lexer.take_statement_text()),
            TokenKind::Eof => {
                let rest = lexer.take_statement_text();
                if !rest.trim().is_empty() {
                    out.push(rest);
                }
                return out;
            }
            _ => {}
        }
    }
}
