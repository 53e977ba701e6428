//! cat.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const SPECS: &[FlagSpec] = &[FlagSpec::flag("n", 'n', "number")];

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, SPECS);
    if parsed.positional.is_empty() {
        return TranslatedCommand::new("ForEach-Object { $_ }");
    }
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    let mut cmd = format!("Get-Content -Path {paths}");
    if parsed.is_set("n") {
        cmd.push_str(" | ForEach-Object -Begin { $i = 0 } -Process { $i++; \"$i`t$_\" }");
    }
    TranslatedCommand::new(cmd)
}
