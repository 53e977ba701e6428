//! source / `.` — dot-sourcing.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

pub fn translate(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first() {
        Some(path) => TranslatedCommand::new(format!(". {}", translate_path_arg(path, ctx))),
        None => TranslatedCommand::new(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolAvailability;
    use crate::TranspileOptions;

    #[test]
    fn source_dot_sources_the_script() {
        let mut c = TransformContext::new(ToolAvailability::default(), TranspileOptions::default());
        let args = vec![Word::literal("setup.ps1")];
        assert_eq!(translate(&args, &mut c).command, ". 'setup.ps1'");
    }
}
