//! cd / pwd / pushd / popd.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

pub fn translate_cd(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first() {
        None => TranslatedCommand::new("Set-Location $env:USERPROFILE"),
        Some(w) if w.as_plain_str() == Some("-") => TranslatedCommand::new("Set-Location -Path $OLDPWD"),
        Some(w) => TranslatedCommand::new(format!("Set-Location {}", translate_word(w, ctx))),
    }
}

pub fn translate_pwd(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("(Get-Location).Path")
}

pub fn translate_pushd(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first() {
        None => TranslatedCommand::new("Push-Location"),
        Some(w) => TranslatedCommand::new(format!("Push-Location {}", translate_word(w, ctx))),
    }
}

pub fn translate_popd(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("Pop-Location")
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
    fn cd_with_plain_dir_sets_location() {
        let mut c = ctx();
        let args = vec![Word::literal("frontend")];
        assert_eq!(translate_cd(&args, &mut c).command, "Set-Location frontend");
    }

    #[test]
    fn cd_with_no_args_goes_home() {
        let mut c = ctx();
        assert_eq!(translate_cd(&[], &mut c).command, "Set-Location $env:USERPROFILE");
    }

    #[test]
    fn cd_dash_returns_to_oldpwd() {
        let mut c = ctx();
        let args = vec![Word::literal("-")];
        assert_eq!(translate_cd(&args, &mut c).command, "Set-Location -Path $OLDPWD");
    }

    #[test]
    fn pwd_reads_current_location() {
        let mut c = ctx();
        assert_eq!(translate_pwd(&[], &mut c).command, "(Get-Location).Path");
    }
}
