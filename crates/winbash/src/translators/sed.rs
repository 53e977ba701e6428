//! sed — restricted subset: `s/PAT/REPL/[g]`, `/PAT/d`, `Nd`, `/PAT/p`,
//! `N,Mp`, `Np`, backreferences, `-i`, multiple `-e`.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const SPECS: &[FlagSpec] = &[FlagSpec::flag("i", 'i', "in-place"), FlagSpec::value("e", 'e', "expression")];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    let in_place = parsed.is_set("i");

    let mut exprs: Vec<String> = Vec::new();
    if let Some(e) = parsed.value("e") {
        exprs.push(e.to_string());
    }
    let mut positional = parsed.positional;
    if exprs.is_empty() && !positional.is_empty() {
        if let Some(s) = positional[0].as_plain_str() {
            exprs.push(s.to_string());
            positional.remove(0);
        }
    }
    let files = positional;

    let stages: Vec<String> = exprs.iter().map(|e| render_sed_expr(e, ctx)).collect();
    let pipe = stages.join(" | ");

    if in_place {
        if let Some(f) = files.first() {
            let path = translate_path_arg(f, ctx);
            return TranslatedCommand::new(format!("(Get-Content -Path {path}) | {pipe} | Set-Content -Path {path}"));
        }
    }

    if files.is_empty() {
        TranslatedCommand::new(pipe)
    } else {
        let paths = files.iter().map(|w| translate_path_arg(w, ctx)).collect::<Vec<_>>().join(", ");
        TranslatedCommand::new(format!("Get-Content -Path {paths} | {pipe}"))
    }
}

fn render_sed_expr(expr: &str, ctx: &mut TransformContext) -> String {
    if let Some(rest) = expr.strip_prefix('s') {
        if let Some(delim) = rest.chars().next() {
            let body = &rest[delim.len_utf8()..];
            let segments: Vec<&str> = body.splitn(3, delim).collect();
            if segments.len() >= 2 {
                let pattern = segments[0];
                let replacement = convert_backrefs(segments[1]);
                let flags = segments.get(2).copied().unwrap_or("");
                if !flags.contains('g') {
                    ctx.unsupported.push(
                        "sed substitution without the g flag still replaces every match on the line; PowerShell -replace has no first-match-only mode"
                            .into(),
                    );
                }
                return format!("ForEach-Object {{ $_ -replace '{pattern}', '{replacement}' }}");
            }
        }
    }

    if let Some(inner) = expr.strip_prefix('/') {
        if let Some(pattern) = inner.strip_suffix("/d") {
            return format!("Where-Object {{ $_ -notmatch '{pattern}' }}");
        }
        if let Some(pattern) = inner.strip_suffix("/p") {
            return format!("Where-Object {{ $_ -match '{pattern}' }}");
        }
    }

    if let Some(digits) = expr.strip_suffix('d') {
        if let Ok(n) = digits.parse::<usize>() {
            return format!(
                "ForEach-Object -Begin {{ $script:sedLine = 0 }} -Process {{ $script:sedLine++; if ($script:sedLine -ne {n}) {{ $_ }} }}"
            );
        }
    }

    if let Some(digits) = expr.strip_suffix('p') {
        if let Some((start, end)) = digits.split_once(',') {
            if let (Ok(s), Ok(e)) = (start.parse::<usize>(), end.parse::<usize>()) {
                return format!(
                    "ForEach-Object -Begin {{ $script:sedLine = 0 }} -Process {{ $script:sedLine++; if ($script:sedLine -ge {s} -and $script:sedLine -le {e}) {{ $_ }} }}"
                );
            }
        } else if let Ok(n) = digits.parse::<usize>() {
            return format!(
                "ForEach-Object -Begin {{ $script:sedLine = 0 }} -Process {{ $script:sedLine++; if ($script:sedLine -eq {n}) {{ $_ }} }}"
            );
        }
    }

    ctx.unsupported
        .push(format!("sed expression '{expr}' is not modeled; lines pass through unchanged"));
    "ForEach-Object { $_ }".to_string()
}

fn convert_backrefs(replacement: &str) -> String {
    let mut out = String::new();
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                out.push('$');
                out.push_str(&d.to_string());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
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
    fn substitution_with_g_flag_uses_replace() {
        let mut c = ctx();
        let args = vec![Word::literal("s/foo/bar/g"), Word::literal("file.txt")];
        let out = translate(&args, &mut c);
        assert_eq!(
            out.command,
            "Get-Content -Path 'file.txt' | ForEach-Object { $_ -replace 'foo', 'bar' }"
        );
    }

    #[test]
    fn pattern_delete_filters_matching_lines() {
        let mut c = ctx();
        let args = vec![Word::literal("/DEBUG/d")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Where-Object { $_ -notmatch 'DEBUG' }");
    }

    #[test]
    fn in_place_wraps_read_and_write() {
        let mut c = ctx();
        let args = vec![Word::literal("-i"), Word::literal("s/a/b/g"), Word::literal("f.txt")];
        let out = translate(&args, &mut c);
        assert_eq!(
            out.command,
            "(Get-Content -Path 'f.txt') | ForEach-Object { $_ -replace 'a', 'b' } | Set-Content -Path 'f.txt'"
        );
    }

    #[test]
    fn backreference_converts_to_dollar_group() {
        let mut c = ctx();
        let args = vec![Word::literal(r"s/\(a\)\(b\)/\2\1/g")];
        let out = translate(&args, &mut c);
        assert!(out.command.contains("$2$1"));
    }
}
