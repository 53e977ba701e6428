//! wc.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const SPECS: &[FlagSpec] = &[
    FlagSpec::flag("l", 'l', "lines"),
    FlagSpec::flag("w", 'w', "words"),
    FlagSpec::flag("c", 'c', "bytes"),
];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    // With no file operand, wc reads from the pipeline. PowerShell feeds a
    // prior stage's output straight into Measure-Object without needing an
    // explicit `$input`, and this text may itself land as a downstream pipe
    // stage, so it must stay a plain command rather than a `(...).Prop`
    // expression (which can't be piped into).
    let cmd = if paths.is_empty() {
        if parsed.is_set("l") {
            "Measure-Object -Line | Select-Object -ExpandProperty Lines".to_string()
        } else if parsed.is_set("w") {
            "Measure-Object -Word | Select-Object -ExpandProperty Words".to_string()
        } else if parsed.is_set("c") {
            "Measure-Object -Character | Select-Object -ExpandProperty Characters".to_string()
        } else {
            "Measure-Object -Line -Word -Character".to_string()
        }
    } else {
        let source = format!("(Get-Content -Path {paths})");
        if parsed.is_set("l") {
            format!("({source} | Measure-Object -Line).Lines")
        } else if parsed.is_set("w") {
            format!("({source} | Measure-Object -Word).Words")
        } else if parsed.is_set("c") {
            format!("({source} | Measure-Object -Character).Characters")
        } else {
            format!("{source} | Measure-Object -Line -Word -Character")
        }
    };
    TranslatedCommand::new(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn wc_l_counts_lines() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("-l"), Word::literal("file.txt")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "((Get-Content -Path 'file.txt') | Measure-Object -Line).Lines");
    }

    #[test]
    fn wc_l_with_no_file_is_a_plain_pipe_stage() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("-l")];
        let out = translate(&args, &mut c);
        assert_eq!(out.command, "Measure-Object -Line | Select-Object -ExpandProperty Lines");
        assert!(!out.command.contains("$input"));
        assert!(!out.command.starts_with('('));
    }
}
