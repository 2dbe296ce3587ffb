const SLASH_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".java", ".cpp", ".c", ".h", ".cs", ".css", ".scss",
];
const HASH_EXTENSIONS: &[&str] = &[".py", ".sh", ".rb"];
const MARKUP_EXTENSIONS: &[&str] = &[".html", ".xml"];
const SQL_EXTENSIONS: &[&str] = &[".sql"];
const JSON_EXTENSIONS: &[&str] = &[".json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    Slash,
    Hash,
    Markup,
    Sql,
    Json,
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRule {
    Line {
        marker: &'static str,
    },
    Block {
        open: &'static str,
        close: &'static str,
    },
    BlockThenLine {
        open: &'static str,
        close: &'static str,
        line: &'static str,
    },
}

pub fn classify_extension(extension: &str) -> ExtensionClass {
    let ext = extension.to_lowercase();
    let ext = ext.as_str();
    if SLASH_EXTENSIONS.contains(&ext) {
        ExtensionClass::Slash
    } else if HASH_EXTENSIONS.contains(&ext) {
        ExtensionClass::Hash
    } else if MARKUP_EXTENSIONS.contains(&ext) {
        ExtensionClass::Markup
    } else if SQL_EXTENSIONS.contains(&ext) {
        ExtensionClass::Sql
    } else if JSON_EXTENSIONS.contains(&ext) {
        ExtensionClass::Json
    } else {
        ExtensionClass::Unsupported
    }
}

impl ExtensionClass {
    pub fn rule(self) -> Option<CommentRule> {
        match self {
            // JSON defines no comment syntax; the slash rules are applied to
            // .json files anyway, including inside string values.
            ExtensionClass::Slash | ExtensionClass::Json => Some(CommentRule::BlockThenLine {
                open: "/*",
                close: "*/",
                line: "//",
            }),
            ExtensionClass::Hash => Some(CommentRule::Line { marker: "#" }),
            ExtensionClass::Markup => Some(CommentRule::Block {
                open: "<!--",
                close: "-->",
            }),
            ExtensionClass::Sql => Some(CommentRule::Line { marker: "--" }),
            ExtensionClass::Unsupported => None,
        }
    }
}

pub fn rule_for_extension(extension: &str) -> Option<CommentRule> {
    classify_extension(extension).rule()
}
