use super::{Operation, Val};
use once_cell::sync::Lazy;
use regex::Regex;

static EXPONENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)e[+-]\d+").unwrap());

const ELLIPSIS: &str = "...";

/// Shortens `s` to `limit` characters plus an ellipsis. When `s` carries
/// an exponent marker, the marker and everything after it stay visible.
pub fn truncate(s: &str, limit: usize) -> String {
    let len = s.chars().count();
    if len <= limit {
        return s.to_string();
    }
    match EXPONENT.find(s) {
        Some(m) => {
            let index = s[..m.start()].chars().count();
            let keep = limit.saturating_sub(len - index);
            let head: String = s.chars().take(keep).collect();
            format!("{}{}{}", head, ELLIPSIS, &s[m.start()..])
        }
        None => {
            let head: String = s.chars().take(limit).collect();
            format!("{}{}", head, ELLIPSIS)
        }
    }
}

/// Rounds every number in `val` to `places` decimals.
pub fn round_numbers(val: Val, places: i64) -> Val {
    let rounded = Operation::map(val.clone(), &|v| match v {
        Val::Number(n) => Ok(Val::Number(n.round(places))),
        v => Ok(v),
    });
    rounded.unwrap_or(val)
}

/// The text shown for a result.
pub fn display(val: Val, places: i64, width: usize) -> String {
    match round_numbers(val, places) {
        Val::Boolean(b) => b.to_string(),
        v => truncate(&v.to_string(), width),
    }
}
