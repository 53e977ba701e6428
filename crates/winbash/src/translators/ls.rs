//! ls, and the filesystem-mutation builtins that share its shape: rm,
//! rmdir, mkdir, cp, mv, touch, chmod.

use super::argparse::{self, FlagSpec};
use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_path_arg, TransformContext};

const LS_SPECS: &[FlagSpec] = &[
    FlagSpec::flag("l", 'l', "format"),
    FlagSpec::flag("a", 'a', "all"),
    FlagSpec::flag("R", 'R', "recursive"),
    FlagSpec::flag("t", 't', "time"),
    FlagSpec::flag("S", 'S', "size"),
    FlagSpec::flag("r", 'r', "reverse"),
];

pub fn translate_ls(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, LS_SPECS);
    let long = parsed.is_set("l");
    let all = parsed.is_set("a");
    let recurse = parsed.is_set("R");
    let by_time = parsed.is_set("t");
    let by_size = parsed.is_set("S");
    let reverse = parsed.is_set("r");

    let mut cmd = String::from("Get-ChildItem");
    if all {
        cmd.push_str(" -Force");
    }
    if recurse {
        cmd.push_str(" -Recurse");
    }
    if !parsed.positional.is_empty() {
        let paths = parsed
            .positional
            .iter()
            .map(|w| translate_path_arg(w, ctx))
            .collect::<Vec<_>>()
            .join(", ");
        cmd.push_str(&format!(" -Path {paths}"));
    }

    if by_time {
        cmd.push_str(if reverse {
            " | Sort-Object LastWriteTime"
        } else {
            " | Sort-Object LastWriteTime -Descending"
        });
    } else if by_size {
        cmd.push_str(if reverse {
            " | Sort-Object Length"
        } else {
            " | Sort-Object Length -Descending"
        });
    } else if reverse {
        cmd.push_str(" | Sort-Object Name -Descending");
    }

    if long {
        cmd.push_str(" | ForEach-Object { \"$($_.Mode) $($_.Length) $($_.LastWriteTime) $($_.Name)\" }");
    } else {
        cmd.push_str(" | Select-Object -ExpandProperty Name");
    }
    TranslatedCommand::new(cmd)
}

const RM_SPECS: &[FlagSpec] = &[
    FlagSpec::flag("r", 'r', "recursive"),
    FlagSpec::flag("R", 'R', "recursive"),
    FlagSpec::flag("f", 'f', "force"),
];

pub fn translate_rm(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, RM_SPECS);
    let recursive = parsed.is_set("r") || parsed.is_set("R");
    let force = parsed.is_set("f");
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    let mut cmd = format!("Remove-Item -Path {paths}");
    if recursive {
        cmd.push_str(" -Recurse");
    }
    if force {
        cmd.push_str(" -Force");
    }
    TranslatedCommand::new(cmd)
}

pub fn translate_rmdir(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let paths = args
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    TranslatedCommand::new(format!("Remove-Item -Path {paths} -Force"))
}

const MKDIR_SPECS: &[FlagSpec] = &[FlagSpec::flag("p", 'p', "parents")];

pub fn translate_mkdir(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, MKDIR_SPECS);
    let paths = parsed
        .positional
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    let mut cmd = String::from("New-Item -ItemType Directory");
    if parsed.is_set("p") {
        cmd.push_str(" -Force");
    }
    cmd.push_str(&format!(" -Path {paths}"));
    TranslatedCommand::new(cmd)
}

const CP_SPECS: &[FlagSpec] = &[FlagSpec::flag("r", 'r', "recursive"), FlagSpec::flag("R", 'R', "recursive")];

pub fn translate_cp(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let parsed = argparse::parse(args, CP_SPECS);
    let recursive = parsed.is_set("r") || parsed.is_set("R");
    let mut pos = parsed.positional;
    if pos.len() < 2 {
        return TranslatedCommand::new("Copy-Item");
    }
    let dest = translate_path_arg(pos.pop().unwrap(), ctx);
    let sources = pos.iter().map(|w| translate_path_arg(w, ctx)).collect::<Vec<_>>().join(", ");
    let mut cmd = format!("Copy-Item -Path {sources} -Destination {dest}");
    if recursive {
        cmd.push_str(" -Recurse");
    }
    TranslatedCommand::new(cmd)
}

pub fn translate_mv(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let mut pos: Vec<&Word> = args.iter().collect();
    if pos.len() < 2 {
        return TranslatedCommand::new("Move-Item");
    }
    let dest = translate_path_arg(pos.pop().unwrap(), ctx);
    let sources = pos.iter().map(|w| translate_path_arg(w, ctx)).collect::<Vec<_>>().join(", ");
    TranslatedCommand::new(format!("Move-Item -Path {sources} -Destination {dest}"))
}

pub fn translate_touch(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    ctx.warnings
        .push("touch approximated with New-Item -Force; existing file contents are not preserved".into());
    let paths = args
        .iter()
        .map(|w| translate_path_arg(w, ctx))
        .collect::<Vec<_>>()
        .join(", ");
    TranslatedCommand::fallback(format!("New-Item -ItemType File -Force -Path {paths}"))
}

pub fn translate_chmod(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let mode = args.first().and_then(|w| w.as_plain_str()).unwrap_or("");
    let paths = args[1..].iter().map(|w| translate_path_arg(w, ctx)).collect::<Vec<_>>().join(", ");

    if mode == "+x" {
        return TranslatedCommand::fallback(format!("Unblock-File -Path {paths}"));
    }

    ctx.unsupported.push(format!(
        "chmod mode '{mode}' has no clean Windows ACL equivalent; consider icacls manually"
    ));
    TranslatedCommand::fallback("$null")
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
    fn bare_ls_expands_name_property() {
        let mut c = ctx();
        let out = translate_ls(&[], &mut c);
        assert_eq!(out.command, "Get-ChildItem | Select-Object -ExpandProperty Name");
    }

    #[test]
    fn ls_long_renders_mode_time_name() {
        let mut c = ctx();
        let out = translate_ls(&[Word::literal("-l")], &mut c);
        assert_eq!(
            out.command,
            "Get-ChildItem | ForEach-Object { \"$($_.Mode) $($_.Length) $($_.LastWriteTime) $($_.Name)\" }"
        );
    }

    #[test]
    fn ls_la_with_path_matches_spec_scenario() {
        let mut c = ctx();
        let args = vec![Word::literal("-la"), Word::literal("src/")];
        let out = translate_ls(&args, &mut c);
        assert!(out.command.contains("Get-ChildItem"));
        assert!(out.command.contains("-Force"));
        assert!(out.command.contains("-Path 'src/'"));
        assert!(out.command.contains("$($_.Mode)"));
        assert!(out.command.contains("$($_.LastWriteTime)"));
        assert!(out.command.contains("$($_.Name)"));
    }

    #[test]
    fn rm_rf_quotes_path_and_sets_flags() {
        let mut c = ctx();
        let args = vec![Word::literal("-rf"), Word::literal("dist")];
        let out = translate_rm(&args, &mut c);
        assert_eq!(out.command, "Remove-Item -Path 'dist' -Recurse -Force");
    }

    #[test]
    fn mkdir_p_quotes_path_and_sets_force() {
        let mut c = ctx();
        let args = vec![Word::literal("-p"), Word::literal("build")];
        let out = translate_mkdir(&args, &mut c);
        assert_eq!(out.command, "New-Item -ItemType Directory -Force -Path 'build'");
    }

    #[test]
    fn cp_recursive_sets_destination() {
        let mut c = ctx();
        let args = vec![Word::literal("-r"), Word::literal("src"), Word::literal("dst")];
        let out = translate_cp(&args, &mut c);
        assert_eq!(out.command, "Copy-Item -Path 'src' -Destination 'dst' -Recurse");
    }

    #[test]
    fn chmod_numeric_mode_is_no_op_with_warning() {
        let mut c = ctx();
        let args = vec![Word::literal("755"), Word::literal("file")];
        let out = translate_chmod(&args, &mut c);
        assert_eq!(out.command, "$null");
        assert!(out.used_fallback);
        assert_eq!(c.unsupported.len(), 1);
    }

    #[test]
    fn chmod_plus_x_unblocks_file() {
        let mut c = ctx();
        let args = vec![Word::literal("+x"), Word::literal("script.sh")];
        let out = translate_chmod(&args, &mut c);
        assert_eq!(out.command, "Unblock-File -Path 'script.sh'");
    }
}
