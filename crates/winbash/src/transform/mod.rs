//! AST to PowerShell text. See spec contract in module docs on
//! [`translate_script`]; [`quoting`] holds the word-translation algorithm.

pub mod quoting;

pub use quoting::{translate_path_arg, translate_word};

use crate::parser::{Assignment, Command, LogicalOp, Redirect, RedirectOp, Script, Statement, Word};
use crate::tools::ToolAvailability;
use crate::TranspileOptions;

/// Mutable scratchpad threaded through one `transpile()` call. Translators
/// append warnings directly; `used_fallbacks` latches true the first time any
/// dual-path translator takes its non-native branch.
pub struct TransformContext {
    pub tools: ToolAvailability,
    pub options: TranspileOptions,
    pub warnings: Vec<String>,
    pub unsupported: Vec<String>,
    pub used_fallbacks: bool,
}

impl TransformContext {
    pub fn new(tools: ToolAvailability, options: TranspileOptions) -> Self {
        Self {
            tools,
            options,
            warnings: Vec::new(),
            unsupported: Vec::new(),
            used_fallbacks: false,
        }
    }
}

/// Re-lex/parse/translate a `$(...)` inner command in a child context that
/// shares only `tools`/`options` with `parent`; the child's warnings and
/// fallback usage aggregate back up (spec §9).
pub(crate) fn translate_inline(bash: &str, parent: &mut TransformContext) -> crate::error::Result<String> {
    let script = crate::parser::parse(bash)?;
    let mut child = TransformContext::new(parent.tools, parent.options.clone());
    let out = translate_script(&script, &mut child);
    parent.warnings.extend(child.warnings);
    parent.unsupported.extend(child.unsupported);
    parent.used_fallbacks = parent.used_fallbacks || child.used_fallbacks;
    Ok(out)
}

/// Entry point: joins per-statement output with `"; "`.
pub fn translate_script(script: &Script, ctx: &mut TransformContext) -> String {
    script
        .statements
        .iter()
        .map(|s| translate_statement(s, ctx))
        .collect::<Vec<_>>()
        .join("; ")
}

fn translate_statement(stmt: &Statement, ctx: &mut TransformContext) -> String {
    match stmt {
        Statement::Pipeline {
            commands,
            negated,
            background,
        } => {
            let joined = commands
                .iter()
                .map(|c| translate_command(c, ctx))
                .collect::<Vec<_>>()
                .join(" | ");
            let joined = if *negated {
                format!("!( {joined} )")
            } else {
                joined
            };
            if *background {
                format!("Start-Job -ScriptBlock {{ {joined} }}")
            } else {
                joined
            }
        }
        Statement::LogicalExpr { op, left, right } => {
            let l = translate_statement(left, ctx);
            let r = translate_statement(right, ctx);
            match op {
                LogicalOp::And => format!("{l}; if ($?) {{ {r} }}"),
                LogicalOp::Or => format!("{l}; if (-not $?) {{ {r} }}"),
                LogicalOp::Seq => format!("{l}; {r}"),
            }
        }
        Statement::AssignmentStatement { assignments } => render_assignments(assignments, ctx),
    }
}

fn translate_command(command: &Command, ctx: &mut TransformContext) -> String {
    match command {
        Command::SimpleCommand {
            assignments,
            name,
            args,
            redirects,
        } => {
            let body = translate_simple_command(assignments, name.as_ref(), args, ctx);
            append_redirects(body, redirects, ctx)
        }
        Command::Subshell { body, redirects } => {
            let inner = translate_script(body, ctx);
            let wrapped = format!("& {{ {inner} }}");
            append_redirects(wrapped, redirects, ctx)
        }
    }
}

fn translate_simple_command(
    assignments: &[Assignment],
    name: Option<&Word>,
    args: &[Word],
    ctx: &mut TransformContext,
) -> String {
    let prefix = render_assignments(assignments, ctx);
    let body = match name {
        Some(name_word) => {
            let name_text = name_word
                .as_plain_str()
                .map(str::to_string)
                .unwrap_or_else(|| quoting::translate_word(name_word, ctx));
            crate::translators::dispatch(&name_text, args, ctx).command
        }
        None => String::new(),
    };
    match (prefix.is_empty(), body.is_empty()) {
        (true, _) => body,
        (false, true) => prefix,
        (false, false) => format!("{prefix}; {body}"),
    }
}

fn render_assignments(assignments: &[Assignment], ctx: &mut TransformContext) -> String {
    assignments
        .iter()
        .map(|a| {
            let value = quoting::translate_word(&a.value, ctx);
            format!("$env:{} = {value}", a.name)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn append_redirects(body: String, redirects: &[Redirect], ctx: &mut TransformContext) -> String {
    if redirects.is_empty() {
        return body;
    }
    let mut prefix = String::new();
    let mut suffix = String::new();
    for r in redirects {
        if let Some(target_fd) = r.target_fd {
            suffix.push_str(&format!(" {}>&{}", r.fd, target_fd));
            continue;
        }
        if r.op == RedirectOp::HereString {
            let target_text = quoting::translate_word(&r.target, ctx);
            prefix.push_str(&format!("({target_text}) | "));
            continue;
        }
        let op_str = match r.op {
            RedirectOp::Out => ">",
            RedirectOp::Append => ">>",
            RedirectOp::In => "<",
            RedirectOp::HereString => unreachable!("handled above"),
        };
        match r.target.as_plain_str() {
            Some("/dev/null") => suffix.push_str(&format!(" {}{}$null", r.fd, op_str)),
            Some("/dev/stdout") | Some("/dev/stderr") => {
                suffix.push_str(&format!(" {}{}CON", r.fd, op_str))
            }
            _ => {
                let target_text = quoting::translate_word(&r.target, ctx);
                suffix.push_str(&format!(" {}{} {}", r.fd, op_str, target_text));
            }
        }
    }
    format!("{prefix}{body}{suffix}")
}
