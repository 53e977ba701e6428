//! echo.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

const SPECS: &[FlagSpec] = &[FlagSpec::flag("n", 'n', "no-newline"), FlagSpec::flag("e", 'e', "escapes")];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    let interpret_escapes = parsed.is_set("e");

    let rendered: Vec<String> = parsed
        .positional
        .iter()
        .map(|w| {
            if interpret_escapes {
                render_with_escapes(w)
            } else {
                translate_word(w, ctx)
            }
        })
        .collect();

    let body = if rendered.is_empty() {
        "''".to_string()
    } else {
        rendered.join(" + ' ' + ")
    };

    if parsed.is_set("n") {
        TranslatedCommand::new(format!("Write-Host -NoNewline ({body})"))
    } else {
        TranslatedCommand::new(format!("Write-Output ({body})"))
    }
}

/// `echo -e` interprets backslash escapes in plain-literal words; only
/// literal, unquoted words can contain a real two-character `\n` sequence in
/// the first place, so other word shapes fall back to normal translation.
fn render_with_escapes(word: &Word) -> String {
    let Some(s) = word.as_plain_str() else {
        return word.to_string();
    };
    let mut out = String::from("\"");
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    out.push_str("`n");
                    chars.next();
                }
                Some('t') => {
                    out.push_str("`t");
                    chars.next();
                }
                Some('\\') => {
                    out.push('\\');
                    chars.next();
                }
                _ => out.push('\\'),
            }
        } else if matches!(c, '`' | '$' | '"') {
            out.push('`');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    fn ctx() -> TransformContext {
        TransformContext::new(ToolAvailability::default(), TranspileOptions::default())
    }

    #[test]
    fn echo_joins_words_with_space() {
        let mut c = ctx();
        let args = vec![Word::literal("hello"), Word::literal("world")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Write-Output (hello + ' ' + world)");
    }

    #[test]
    fn echo_n_uses_write_host_no_newline() {
        let mut c = ctx();
        let args = vec![Word::literal("-n"), Word::literal("hi")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Write-Host -NoNewline (hi)");
    }

    #[test]
    fn echo_e_interprets_newline_escape() {
        let mut c = ctx();
        let args = vec![Word::literal("-e"), Word::literal("a\\nb")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Write-Output (\"a`nb\")");
    }
}
