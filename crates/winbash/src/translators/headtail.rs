//! head and tail.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const HEAD_SPECS: &[FlagSpec] = &[FlagSpec::value("n", 'n', "lines")];
const TAIL_SPECS: &[FlagSpec] = &[FlagSpec::value("n", 'n', "lines"), FlagSpec::flag("f", 'f', "follow")];

pub fn translate_head(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, HEAD_SPECS);
    let n = parsed.value("n").unwrap_or("10").to_string();
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    if paths.is_empty() {
        TranslatedCommand::new(format!("Select-Object -First {n}"))
    } else {
        TranslatedCommand::new(format!("Get-Content -Path {paths} | Select-Object -First {n}"))
    }
}

pub fn translate_tail(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, TAIL_SPECS);
    let n = parsed.value("n").unwrap_or("10").to_string();
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    if parsed.is_set("f") && !paths.is_empty() {
        return TranslatedCommand::new(format!("Get-Content -Path {paths} -Tail {n} -Wait"));
    }
    if paths.is_empty() {
        TranslatedCommand::new(format!("Select-Object -Last {n}"))
    } else {
        TranslatedCommand::new(format!("Get-Content -Path {paths} -Tail {n}"))
    }
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
    fn head_defaults_to_ten_lines() {
        let mut c = ctx();
        let args = vec![Word::literal("file.txt")];
        assert_eq!(
            translate_head(&args, &mut c).command,
            "Get-Content -Path 'file.txt' | Select-Object -First 10"
        );
    }

    #[test]
    fn tail_follow_uses_get_content_wait() {
        let mut c = ctx();
        let args = vec![Word::literal("-f"), Word::literal("app.log")];
        assert_eq!(
            translate_tail(&args, &mut c).command,
            "Get-Content -Path 'app.log' -Tail 10 -Wait"
        );
    }
}
