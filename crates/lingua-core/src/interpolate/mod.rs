//! Placeholder interpolation: `{name}` tokens filled from caller arguments.

use std::fmt::Write as _;

use tracing::warn;

use crate::args::Args;


/// Substitute `{name}` tokens in `template` from `args` in a single pass.
///
/// Tokens without a matching argument are left in place, so a missing arg
/// shows up verbatim in the output instead of failing the call. There is no
/// escape syntax for literal braces; an unclosed `{` is emitted as-is.
/// Substituted values are not re-scanned, so nested substitution cannot
/// occur.
pub fn interpolate(template: &str, args: &Args) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        if !closed {
            out.push('{');
            out.push_str(&token);
            break;
        }

        match args.get(&token) {
            Some(value) => {
                let _ = write!(out, "{value}");
            }
            None => {
                warn!("no argument supplied for placeholder '{{{token}}}'");
                out.push('{');
                out.push_str(&token);
                out.push('}');
            }
        }
    }

    out
}
