//! grep / egrep / fgrep. Output shape is mandated to match bash `grep`
//! exactly (spec §4.4, §8) since downstream agents parse it.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

const SPECS: &[FlagSpec] = &[
    FlagSpec::flag("i", 'i', "ignore-case"),
    FlagSpec::flag("v", 'v', "invert-match"),
    FlagSpec::flag("n", 'n', "line-number"),
    FlagSpec::flag("r", 'r', "recursive"),
    FlagSpec::flag("c", 'c', "count"),
    FlagSpec::flag("l", 'l', "files-with-matches"),
    FlagSpec::flag("o", 'o', "only-matching"),
    FlagSpec::flag("q", 'q', "quiet"),
    FlagSpec::flag("w", 'w', "word-regexp"),
    FlagSpec::flag("F", 'F', "fixed-strings"),
    FlagSpec::flag("E", 'E', "extended-regexp"),
    FlagSpec::value("e", 'e', "regexp"),
];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    translate_grep(args, ctx, false)
}

pub fn translate_egrep(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    translate_grep(args, ctx, false)
}

pub fn translate_fgrep(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    translate_grep(args, ctx, true)
}

fn translate_grep(args: &[Word], ctx: &mut TransformContext, force_fixed: bool) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    let fixed = force_fixed || parsed.is_set("F");
    let recursive = parsed.is_set("r");
    let ignore_case = parsed.is_set("i");
    let invert = parsed.is_set("v");
    let line_numbers = parsed.is_set("n");
    let count_only = parsed.is_set("c");
    let list_files = parsed.is_set("l");
    let only_matching = parsed.is_set("o");
    let quiet = parsed.is_set("q");

    let mut positional = parsed.positional.clone();
    let pattern_word = if let Some(p) = parsed.value("e") {
        Word::literal(p.to_string())
    } else if !positional.is_empty() {
        positional.remove(0).clone()
    } else {
        Word::literal("")
    };
    let files: Vec<&Word> = positional;
    let multi_file = files.len() > 1 || recursive;

    if ctx.tools.rg && ctx.options.prefer_native_tools {
        let command = render_rg(
            ignore_case,
            invert,
            line_numbers,
            count_only,
            list_files,
            only_matching,
            fixed,
            quiet,
            &pattern_word,
            &files,
        );
        return TranslatedCommand::new(command);
    }

    let mut ss = String::from("Select-String");
    ss.push_str(&format!(" -Pattern {}", translate_word(&pattern_word, ctx)));
    if !ignore_case {
        ss.push_str(" -CaseSensitive");
    }
    if fixed {
        ss.push_str(" -SimpleMatch");
    }
    if invert {
        ss.push_str(" -NotMatch");
    }

    let mut pipeline = String::new();
    if recursive {
        let dir = files
            .first()
            .map(|w| translate_word(w, ctx))
            .unwrap_or_else(|| "'.'".to_string());
        pipeline.push_str(&format!("Get-ChildItem -Recurse -File -Path {dir} | {ss}"));
    } else if !files.is_empty() {
        let file_list = files
            .iter()
            .map(|w| translate_word(w, ctx))
            .collect::<Vec<_>>()
            .join(", ");
        pipeline.push_str(&format!("{ss} -Path {file_list}"));
    } else {
        pipeline.push_str(&ss);
    }

    let tail = if count_only {
        if multi_file {
            " | Group-Object Path | ForEach-Object { \"$($_.Name):$($_.Count)\" }"
        } else {
            " | Measure-Object | ForEach-Object { $_.Count }"
        }
    } else if list_files {
        " | Select-Object -ExpandProperty Path -Unique"
    } else if only_matching {
        " | ForEach-Object { $_.Matches.Value }"
    } else if multi_file && line_numbers {
        " | ForEach-Object { \"$($_.Path):$($_.LineNumber):$($_.Line)\" }"
    } else if multi_file {
        " | ForEach-Object { \"$($_.Path):$($_.Line)\" }"
    } else if line_numbers {
        " | ForEach-Object { \"$($_.LineNumber):$($_.Line)\" }"
    } else {
        " | ForEach-Object { $_.Line }"
    };
    pipeline.push_str(tail);
    if quiet {
        pipeline.push_str(" | Out-Null");
    }

    TranslatedCommand::fallback(pipeline)
}

#[allow(clippy::too_many_arguments)]
fn render_rg(
    ignore_case: bool,
    invert: bool,
    line_numbers: bool,
    count_only: bool,
    list_files: bool,
    only_matching: bool,
    fixed: bool,
    quiet: bool,
    pattern: &Word,
    files: &[&Word],
) -> String {
    let mut parts = vec!["rg".to_string()];
    if ignore_case {
        parts.push("-i".into());
    }
    if line_numbers {
        parts.push("-n".into());
    }
    if count_only {
        parts.push("-c".into());
    }
    if list_files {
        parts.push("-l".into());
    }
    if only_matching {
        parts.push("-o".into());
    }
    if invert {
        parts.push("-v".into());
    }
    if fixed {
        parts.push("-F".into());
    }
    if quiet {
        parts.push("-q".into());
    }
    parts.push(native_arg(pattern));
    for f in files {
        parts.push(native_arg(f));
    }
    parts.join(" ")
}

/// Render a word as a POSIX-style single-quoted argv entry for a native
/// executable, bypassing the PowerShell word-quoting algorithm entirely —
/// `rg.exe` parses its own argv and never sees PowerShell variable syntax.
fn native_arg(word: &Word) -> String {
    format!("'{}'", word.to_string().replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    fn run(bash_args: &[&str], tools: ToolAvailability) -> TranslatedCommand {
        let args: Vec<Word> = bash_args.iter().map(|s| Word::literal(*s)).collect();
        let mut ctx = TransformContext::new(tools, TranspileOptions::default());
        translate(&args, &mut ctx)
    }

    #[test]
    fn single_file_no_flags_is_lines_only() {
        let out = run(&["PAT", "file.txt"], ToolAvailability::default());
        assert!(out.command.contains("ForEach-Object { $_.Line }"));
        assert!(!out.command.contains("Get-ChildItem"));
    }

    #[test]
    fn recursive_fallback_uses_get_childitem_recurse() {
        let out = run(&["-r", "PAT", "src"], ToolAvailability::default());
        assert!(out.command.contains("Get-ChildItem"));
        assert!(out.command.contains("-Recurse"));
    }

    #[test]
    fn piped_has_no_get_childitem_or_path() {
        let out = run(&["PAT"], ToolAvailability::default());
        assert!(!out.command.contains("Get-ChildItem"));
        assert!(!out.command.contains("-Path"));
    }

    #[test]
    fn native_path_quotes_pattern_and_dir() {
        let out = run(
            &["-r", "TODO", "src/"],
            ToolAvailability {
                rg: true,
                ..Default::default()
            },
        );
        assert!(out.command.starts_with("rg"));
        assert!(out.command.ends_with("'TODO' 'src/'"));
        assert!(!out.used_fallback);
    }

    #[test]
    fn multi_file_count_emits_path_colon_count() {
        let out = run(&["-c", "PAT", "a.txt", "b.txt"], ToolAvailability::default());
        assert!(out.command.contains("Group-Object Path"));
    }

    #[test]
    fn list_files_flag_emits_unique_paths() {
        let out = run(&["-l", "PAT", "a.txt", "b.txt"], ToolAvailability::default());
        assert!(out.command.contains("-Unique"));
    }
}
