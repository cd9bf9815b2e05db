// Line patterns for key/value assignments, tried in this order
pub const R_DOUBLE_QUOTE: &str = r#"^([^= \t]+)[ \t]*=[ \t]*"([^"]*)"$"#;
pub const R_SINGLE_QUOTE: &str = r"^([^= \t]+)[ \t]*=[ \t]*'([^']*)'$";
pub const R_NO_QUOTE: &str = r"^([^= \t]+)[ \t]*=[ \t]*([^#;]+)";
pub const R_NO_VALUE: &str = r"^([^= \t]+)[ \t]*=[ \t]*([#;].*)?";

pub const POUND: char = '#';
pub const SEMICOLON: char = ';';
pub const LEFT_BRACKET: char = '[';
pub const RIGHT_BRACKET: char = ']';
pub const CONTINUATION: char = '\\';

/// Name of the implicit section holding entries that precede any header
pub const DEFAULT_SECTION: &str = "";

/// rw-r--r--
pub const FILE_PERMISSION: u32 = 0o644;
