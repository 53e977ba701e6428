//! Word translation: bash's quoting/expansion model to a PowerShell literal
//! or expression. This is the spec's "primary source of correctness bugs" —
//! see the module-level doc on [`super::translate_word`] for the algorithm.

use super::TransformContext;
use crate::parser::{QuoteKind, Word, WordPart};

/// Characters that may appear bare in PowerShell without quoting.
fn is_safe_unquoted(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | ':' | '-' | '*' | '?' | '=' | '@' | '%')
        })
}

fn single_unquoted_literal(word: &Word) -> Option<&str> {
    match word.parts.as_slice() {
        [WordPart::Literal {
            text,
            quoting: QuoteKind::Unquoted,
        }] => Some(text),
        _ => None,
    }
}

/// `/tmp`, `/tmp/rest`, `~`, `~/rest` to their PowerShell environment
/// equivalents. Only ever called on a word that is a single unquoted
/// literal — bash never expands tilde/`/tmp` inside quotes either.
fn rewrite_path_text(text: &str) -> Option<String> {
    if text == "/tmp" || text == "/tmp/" {
        return Some("$env:TEMP".to_string());
    }
    if let Some(rest) = text.strip_prefix("/tmp/") {
        return Some(format!("$env:TEMP\\{rest}"));
    }
    if text == "~" {
        return Some("$env:USERPROFILE".to_string());
    }
    if let Some(rest) = text.strip_prefix("~/") {
        return Some(format!("$env:USERPROFILE\\{rest}"));
    }
    None
}

fn ps_single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Escape `` ` $ " `` for embedding inside a PowerShell double-quoted string
/// (with or without the surrounding quotes, depending on caller).
fn backtick_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '`' | '$' | '"') {
            out.push('`');
        }
        out.push(c);
    }
    out
}

fn ps_double_quote(text: &str) -> String {
    format!("\"{}\"", backtick_escape(text))
}

/// `$'...'` literal containing control bytes renders as a PowerShell
/// double-quoted string with backtick control-char escapes (spec §4.3, §8).
fn ps_double_quote_control_escaped(text: &str) -> String {
    let mut out = String::from("\"");
    for c in text.chars() {
        match c {
            '\n' => out.push_str("`n"),
            '\r' => out.push_str("`r"),
            '\t' => out.push_str("`t"),
            '\0' => out.push_str("`0"),
            '\u{07}' => out.push_str("`a"),
            '\u{08}' => out.push_str("`b"),
            '\u{1B}' => out.push_str("`e"),
            '`' | '$' | '"' => {
                out.push('`');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (c as u32) == 0x7F => {
                out.push_str(&format!("`u{{{:x}}}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn has_control_byte(text: &str) -> bool {
    text.chars().any(|c| (c as u32) < 0x20 || (c as u32) == 0x7F)
}

fn render_literal(text: &str, quoting: QuoteKind) -> String {
    match quoting {
        QuoteKind::Unquoted => {
            if text.is_empty() {
                "''".to_string()
            } else if matches!(text, "$null" | "$true" | "$false") || is_safe_unquoted(text) {
                text.to_string()
            } else {
                ps_single_quote(text)
            }
        }
        QuoteKind::Single => ps_single_quote(text),
        QuoteKind::Double => ps_double_quote(text),
        QuoteKind::DollarSingle => {
            if has_control_byte(text) {
                ps_double_quote_control_escaped(text)
            } else {
                ps_single_quote(text)
            }
        }
    }
}

fn fixed_variable_mapping(name: &str) -> Option<&'static str> {
    Some(match name {
        "HOME" => "$env:USERPROFILE",
        "USER" => "$env:USERNAME",
        "SHELL" => "$env:ComSpec",
        "TMPDIR" => "$env:TEMP",
        "HOSTNAME" => "$env:COMPUTERNAME",
        "PWD" => "$PWD",
        "OLDPWD" => "$OLDPWD",
        "RANDOM" => "(Get-Random)",
        "?" => "$LASTEXITCODE",
        "$" | "!" => "$PID",
        "#" => "$args.Count",
        "@" => "$args",
        "0" => "$MyInvocation.MyCommand.Name",
        _ => return None,
    })
}

fn map_variable(name: &str, braced: bool) -> String {
    if let Some(mapped) = fixed_variable_mapping(name) {
        return mapped.to_string();
    }
    if name.len() == 1 {
        if let Some(d) = name.chars().next().and_then(|c| c.to_digit(10)) {
            if (1..=9).contains(&d) {
                return format!("$args[{}]", d - 1);
            }
        }
    }
    if braced {
        format!("${{env:{name}}}")
    } else {
        format!("$env:{name}")
    }
}

/// Recursively lex/parse/translate a `$(...)` inner command in a fresh
/// context that shares only `tools`/`options` with `ctx`; its warnings and
/// fallback usage aggregate back into `ctx` (spec §9 "recursive quoting
/// inside command substitution").
fn render_command_substitution(command: &str, ctx: &mut TransformContext) -> String {
    match super::translate_inline(command, ctx) {
        Ok(inner) => format!("$({inner})"),
        Err(_) => {
            ctx.warnings
                .push(format!("command substitution failed to parse: {command}"));
            format!("$({command})")
        }
    }
}

fn render_part(part: &WordPart, ctx: &mut TransformContext) -> String {
    match part {
        WordPart::Literal { text, quoting } => render_literal(text, *quoting),
        WordPart::Variable { name, braced } => map_variable(name, *braced),
        WordPart::CommandSubstitution { command } => render_command_substitution(command, ctx),
        WordPart::Glob { pattern } => pattern.clone(),
    }
}

fn render_multi(parts: &[WordPart], ctx: &mut TransformContext) -> String {
    let has_glob = parts.iter().any(|p| matches!(p, WordPart::Glob { .. }));
    if !has_glob {
        let mut out = String::from("\"");
        for part in parts {
            match part {
                WordPart::Literal { text, .. } => out.push_str(&backtick_escape(text)),
                WordPart::Variable { name, braced } => out.push_str(&map_variable(name, *braced)),
                WordPart::CommandSubstitution { command } => {
                    out.push_str(&render_command_substitution(command, ctx))
                }
                WordPart::Glob { .. } => unreachable!("checked above"),
            }
        }
        out.push('"');
        out
    } else {
        parts
            .iter()
            .map(|p| render_part(p, ctx))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Translate one bash [`Word`] into a PowerShell literal/expression,
/// implementing spec's four-step word-quoting algorithm.
pub fn translate_word(word: &Word, ctx: &mut TransformContext) -> String {
    if let Some(text) = single_unquoted_literal(word) {
        if let Some(rewritten) = rewrite_path_text(text) {
            return rewritten;
        }
    }
    match word.parts.as_slice() {
        [] => "''".to_string(),
        [part] => render_part(part, ctx),
        parts => render_multi(parts, ctx),
    }
}

/// Like [`translate_word`] but always single-quotes a plain literal, for use
/// as a filesystem cmdlet `-Path` argument where bare-unquoted-safe literals
/// (e.g. `dist`) still read better quoted. Words that rewrite to an
/// environment-variable path (`/tmp/...`, `~/...`) or contain expansions are
/// left exactly as `translate_word` renders them.
pub fn translate_path_arg(word: &Word, ctx: &mut TransformContext) -> String {
    let rendered = translate_word(word, ctx);
    if let Some(s) = word.as_plain_str() {
        if rendered == s && !rendered.starts_with('$') {
            return ps_single_quote(s);
        }
    }
    rendered
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
    fn empty_word_is_empty_ps_string() {
        let mut c = ctx();
        assert_eq!(translate_word(&Word::new(vec![]), &mut c), "''");
    }

    #[test]
    fn safe_unquoted_literal_passes_through_raw() {
        let mut c = ctx();
        assert_eq!(translate_word(&Word::literal("src/main.rs"), &mut c), "src/main.rs");
    }

    #[test]
    fn unsafe_unquoted_literal_gets_single_quoted() {
        let mut c = ctx();
        assert_eq!(translate_word(&Word::literal("hello world"), &mut c), "'hello world'");
    }

    #[test]
    fn single_quoted_literal_doubles_embedded_quote() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Literal {
            text: "it's".into(),
            quoting: QuoteKind::Single,
        }]);
        assert_eq!(translate_word(&w, &mut c), "'it''s'");
    }

    #[test]
    fn double_quoted_literal_backtick_escapes() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Literal {
            text: "a$b`c\"d".into(),
            quoting: QuoteKind::Double,
        }]);
        assert_eq!(translate_word(&w, &mut c), "\"a`$b``c`\"d\"");
    }

    #[test]
    fn dollar_single_with_control_byte_uses_backtick_escapes() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Literal {
            text: "a\nb".into(),
            quoting: QuoteKind::DollarSingle,
        }]);
        assert_eq!(translate_word(&w, &mut c), "\"a`nb\"");
    }

    #[test]
    fn dollar_single_without_control_byte_single_quotes() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Literal {
            text: "plain".into(),
            quoting: QuoteKind::DollarSingle,
        }]);
        assert_eq!(translate_word(&w, &mut c), "'plain'");
    }

    #[test]
    fn variable_maps_through_table() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Variable {
            name: "HOME".into(),
            braced: false,
        }]);
        assert_eq!(translate_word(&w, &mut c), "$env:USERPROFILE");
    }

    #[test]
    fn positional_variable_maps_to_args_index() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Variable {
            name: "1".into(),
            braced: false,
        }]);
        assert_eq!(translate_word(&w, &mut c), "$args[0]");
    }

    #[test]
    fn unmapped_variable_falls_back_to_env() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::Variable {
            name: "FOO".into(),
            braced: true,
        }]);
        assert_eq!(translate_word(&w, &mut c), "${env:FOO}");
    }

    #[test]
    fn multi_part_word_concatenates_into_double_quoted_string() {
        let mut c = ctx();
        let w = Word::new(vec![
            WordPart::Literal {
                text: "hi-".into(),
                quoting: QuoteKind::Unquoted,
            },
            WordPart::Variable {
                name: "USER".into(),
                braced: false,
            },
        ]);
        assert_eq!(translate_word(&w, &mut c), "\"hi-$env:USERNAME\"");
    }

    #[test]
    fn tmp_path_rewrites_to_env_temp() {
        let mut c = ctx();
        assert_eq!(translate_word(&Word::literal("/tmp/foo.txt"), &mut c), "$env:TEMP\\foo.txt");
    }

    #[test]
    fn tilde_path_rewrites_only_when_unquoted() {
        let mut c = ctx();
        assert_eq!(translate_word(&Word::literal("~/proj"), &mut c), "$env:USERPROFILE\\proj");
        let quoted = Word::new(vec![WordPart::Literal {
            text: "~/proj".into(),
            quoting: QuoteKind::Double,
        }]);
        assert_eq!(translate_word(&quoted, &mut c), "\"~/proj\"");
    }

    #[test]
    fn command_substitution_wraps_translated_inner_command() {
        let mut c = ctx();
        let w = Word::new(vec![WordPart::CommandSubstitution {
            command: "ls -la".into(),
        }]);
        let out = translate_word(&w, &mut c);
        assert!(out.starts_with("$(") && out.ends_with(')'));
        assert!(out.contains("Get-ChildItem"));
    }
}
