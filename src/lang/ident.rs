// Names shared by the line preparation, the scope, and the dispatcher.

/// What the user types for the previous result.
pub const CONTINUATION_SIGIL: &str = "@";

/// The identifier `@` is rewritten to before parsing.
pub const CONTINUATION: &str = "__at__";

/// Implementation names are never listed by `ls`.
pub fn is_internal(name: &str) -> bool {
    name.starts_with("__") && name != CONTINUATION
}

pub fn public_name(name: &str) -> &str {
    if name == CONTINUATION {
        CONTINUATION_SIGIL
    } else {
        name
    }
}
