//! true, false, exit, return, break, continue.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::TransformContext;

pub fn translate_true(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("$true")
}

pub fn translate_false(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("$false")
}

pub fn translate_exit(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first().and_then(|w| w.as_plain_str()) {
        Some(code) => TranslatedCommand::new(format!("exit {code}")),
        None => TranslatedCommand::new("exit"),
    }
}

pub fn translate_return(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first().and_then(|w| w.as_plain_str()) {
        Some(code) => TranslatedCommand::new(format!("return {code}")),
        None => TranslatedCommand::new("return"),
    }
}

pub fn translate_break(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("break")
}

pub fn translate_continue(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("continue")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn exit_with_code_passes_through() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("1")];
        assert_eq!(translate_exit(&args, &mut c).command, "exit 1");
    }
}
