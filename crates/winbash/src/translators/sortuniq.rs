//! sort and uniq.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const SORT_SPECS: &[FlagSpec] = &[
    FlagSpec::flag("r", 'r', "reverse"),
    FlagSpec::flag("n", 'n', "numeric-sort"),
    FlagSpec::flag("u", 'u', "unique"),
];

fn source(positional: &[&Word], ctx: &mut TransformContext) -> Option<String> {
    if positional.is_empty() {
        None
    } else {
        let paths = positional
            .iter()
            .map(|w| translate_path_arg(w, ctx))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Get-Content -Path {paths}"))
    }
}

pub fn translate_sort(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SORT_SPECS);
    let mut cmd = match source(&parsed.positional, ctx) {
        Some(src) => format!("{src} | Sort-Object"),
        None => "Sort-Object".to_string(),
    };
    if parsed.is_set("n") {
        cmd.push_str(" { [double]$_ }");
    }
    if parsed.is_set("r") {
        cmd.push_str(" -Descending");
    }
    if parsed.is_set("u") {
        cmd.push_str(" -Unique");
    }
    TranslatedCommand::new(cmd)
}

const UNIQ_SPECS: &[FlagSpec] = &[FlagSpec::flag("c", 'c', "count"), FlagSpec::flag("d", 'd', "repeated")];

pub fn translate_uniq(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, UNIQ_SPECS);
    let src = source(&parsed.positional, ctx);
    let prefix = src.map(|s| format!("{s} | ")).unwrap_or_default();
    let cmd = if parsed.is_set("c") {
        format!("{prefix}Group-Object | ForEach-Object {{ \"{{0,7}} {{1}}\" -f $_.Count, $_.Name }}")
    } else if parsed.is_set("d") {
        format!("{prefix}Group-Object | Where-Object {{ $_.Count -gt 1 }} | ForEach-Object {{ $_.Name }}")
    } else {
        format!("{prefix}Get-Unique")
    };
    TranslatedCommand::new(cmd)
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
    fn sort_numeric_reverse_combines_flags() {
        let mut c = ctx();
        let args = vec![Word::literal("-rn"), Word::literal("nums.txt")];
        let out = translate_sort(&args, &mut c);
        assert_eq!(
            out.command,
            "Get-Content -Path 'nums.txt' | Sort-Object { [double]$_ } -Descending"
        );
    }

    #[test]
    fn uniq_plain_uses_get_unique() {
        let mut c = ctx();
        let out = translate_uniq(&[], &mut c);
        assert_eq!(out.command, "Get-Unique");
    }
}
