//! date, sleep, whoami, uname, hostname, id, history, seq, mktemp, nohup,
//! sudo — loosely grouped "system facts" builtins that map to a single
//! cmdlet or expression each.

use super::TranslatedCommand;
use crate::parser::Word;
use crate::transform::{translate_word, TransformContext};

pub fn translate_date(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    match args.first().and_then(|w| w.as_plain_str()) {
        Some(fmt) if fmt.starts_with('+') => {
            let ps_fmt = strftime_to_ps(&fmt[1..]);
            TranslatedCommand::new(format!("Get-Date -Format '{ps_fmt}'"))
        }
        _ => TranslatedCommand::new("Get-Date"),
    }
}

fn strftime_to_ps(fmt: &str) -> String {
    let mut out = String::new();
    let mut chars = fmt.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('Y') => out.push_str("yyyy"),
                Some('m') => out.push_str("MM"),
                Some('d') => out.push_str("dd"),
                Some('H') => out.push_str("HH"),
                Some('M') => out.push_str("mm"),
                Some('S') => out.push_str("ss"),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

pub fn translate_sleep(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let seconds = args
        .first()
        .map(|w| translate_word(w, ctx))
        .unwrap_or_else(|| "0".to_string());
    TranslatedCommand::new(format!("Start-Sleep -Seconds {seconds}"))
}

pub fn translate_whoami(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("$env:USERNAME")
}

pub fn translate_uname(_args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    ctx.unsupported
        .push("uname has no faithful Windows equivalent; returning a fixed placeholder".into());
    TranslatedCommand::fallback("'Windows'")
}

pub fn translate_hostname(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("$env:COMPUTERNAME")
}

pub fn translate_id(_args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    ctx.unsupported
        .push("id has no uid/gid equivalent on Windows; returning the current username only".into());
    TranslatedCommand::fallback("$env:USERNAME")
}

pub fn translate_history(_args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    TranslatedCommand::new("Get-History")
}

pub fn translate_seq(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    let nums: Vec<String> = args.iter().map(|w| translate_word(w, ctx)).collect();
    match nums.len() {
        1 => TranslatedCommand::new(format!("1..{}", nums[0])),
        2 => TranslatedCommand::new(format!("{}..{}", nums[0], nums[1])),
        3 => TranslatedCommand::new(format!(
            "0..([math]::Floor(({1} - {0}) / {2})) | ForEach-Object {{ {0} + $_ * {2} }}",
            nums[0], nums[1], nums[2]
        )),
        _ => TranslatedCommand::new("1..1"),
    }
}

pub fn translate_mktemp(args: &[Word], _ctx: &mut TransformContext) -> TranslatedCommand {
    if args.iter().any(|w| w.as_plain_str() == Some("-d")) {
        TranslatedCommand::new(
            "(New-Item -ItemType Directory -Force -Path (Join-Path $env:TEMP ([System.IO.Path]::GetRandomFileName()))).FullName",
        )
    } else {
        TranslatedCommand::new("[System.IO.Path]::GetTempFileName()")
    }
}

pub fn translate_nohup(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    ctx.unsupported
        .push("nohup has no effect; the wrapped command runs as-is".into());
    if args.is_empty() {
        return TranslatedCommand::fallback(String::new());
    }
    let name = args[0].as_plain_str().map(str::to_string).unwrap_or_else(|| translate_word(&args[0], ctx));
    let rest = args[1..].iter().map(|w| translate_word(w, ctx)).collect::<Vec<_>>().join(" ");
    let cmd = if rest.is_empty() { name } else { format!("{name} {rest}") };
    TranslatedCommand::fallback(cmd)
}

pub fn translate_sudo(args: &[Word], ctx: &mut TransformContext) -> TranslatedCommand {
    ctx.unsupported
        .push("sudo has no direct equivalent; running the command without elevation".into());
    if args.is_empty() {
        return TranslatedCommand::fallback(String::new());
    }
    let name = args[0].as_plain_str().map(str::to_string).unwrap_or_else(|| translate_word(&args[0], ctx));
    let rest = args[1..].iter().map(|w| translate_word(w, ctx)).collect::<Vec<_>>().join(" ");
    let cmd = if rest.is_empty() { name } else { format!("{name} {rest}") };
    TranslatedCommand::fallback(cmd)
}
