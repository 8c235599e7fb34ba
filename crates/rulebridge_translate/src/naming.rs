//! Symbol and term spelling common to the clause-based targets.

use std::fmt::Write;

use rulebridge_language::{Name, Term};

use crate::translator::Target;

/// Returns true for a name both targets accept unquoted.
fn is_lower_word(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Spells a constant, quoting it when needed.
#[must_use]
pub fn constant(name: &str) -> String {
    if is_lower_word(name) {
        name.to_string()
    } else {
        quoted(name)
    }
}

/// Wraps `text` in single quotes, escaping `\`, `'` and control characters.
#[must_use]
pub fn quoted(text: &str) -> String {
    enclose(text, '\'')
}

/// Wraps `text` in double quotes, escaping `\`, `"` and control characters.
#[must_use]
pub fn distinct_object(text: &str) -> String {
    enclose(text, '"')
}

/// Quoted tokens in both targets must stay on one line.
fn enclose(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Spells a variable. `?X` becomes `QX`.
#[must_use]
pub fn variable(name: &str) -> String {
    format!("Q{name}")
}

/// Spells a predicate or function name.
///
/// Local names drop their `_` and read like ordinary constants. Global
/// names keep a `:` marker inside quotes, which no local name can carry, so
/// `_p` and `p` stay distinct symbols.
#[must_use]
pub fn symbol(name: &Name) -> String {
    match name {
        Name::Local(local) => constant(local),
        Name::Global(global) => quoted(&format!(":{global}")),
    }
}

/// Spells a term for `target`.
#[must_use]
pub fn term(term: &Term, target: Target) -> String {
    term_in(term, target, &variable)
}

/// Spells a term, spelling each variable with `rename`.
#[must_use]
pub fn term_in(term: &Term, target: Target, rename: &dyn Fn(&str) -> String) -> String {
    let mut out = String::new();
    write_term(&mut out, term, target, rename);
    out
}

/// Spells `name(args)`, or just `name` when there are no arguments.
#[must_use]
pub fn application(name: &Name, args: &[Term], target: Target) -> String {
    application_in(name, args, target, &variable)
}

/// Spells `name(args)`, spelling each variable with `rename`.
#[must_use]
pub fn application_in(
    name: &Name,
    args: &[Term],
    target: Target,
    rename: &dyn Fn(&str) -> String,
) -> String {
    let mut out = symbol(name);
    write_args(&mut out, args, target, rename);
    out
}

fn write_term(out: &mut String, term: &Term, target: Target, rename: &dyn Fn(&str) -> String) {
    match term {
        Term::Var(name, _) => out.push_str(&rename(name)),
        Term::Const(name, _) => out.push_str(&symbol(name)),
        Term::String(text, _) => match target {
            Target::Prolog => out.push_str(&quoted(text)),
            Target::Tptp => out.push_str(&distinct_object(text)),
        },
        Term::Int(n, _) => {
            let _ = write!(out, "{n}");
        }
        Term::Float(n, _) => {
            let _ = write!(out, "{n:?}");
        }
        Term::Iri(iri, _) => out.push_str(&quoted(iri)),
        Term::Apply(name, args, _) => {
            out.push_str(&symbol(name));
            write_args(out, args, target, rename);
        }
    }
}

fn write_args(out: &mut String, args: &[Term], target: Target, rename: &dyn Fn(&str) -> String) {
    if args.is_empty() {
        return;
    }
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_term(out, arg, target, rename);
    }
    out.push(')');
}
