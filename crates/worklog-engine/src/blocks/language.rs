use serde::Serialize;

/// Languages the workspace's code block recognizes.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "plain text",
    "abap",
    "arduino",
    "bash",
    "c",
    "c#",
    "c++",
    "clojure",
    "coffeescript",
    "css",
    "dart",
    "diff",
    "docker",
    "elixir",
    "elm",
    "erlang",
    "flow",
    "fortran",
    "f#",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "powershell",
    "prolog",
    "protobuf",
    "python",
    "r",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

/// Short forms and file extensions mapped onto their canonical names.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("sh", "shell"),
    ("zsh", "shell"),
    ("ps1", "powershell"),
    ("yml", "yaml"),
    ("md", "markdown"),
    ("text", "plain text"),
    ("txt", "plain text"),
    ("cs", "c#"),
    ("cpp", "c++"),
    ("cxx", "c++"),
];

/// Language tag of a code block.
///
/// Usually one of [`KNOWN_LANGUAGES`]; tags the table does not know pass
/// through lower-cased so the workspace can decide what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodeLanguage(String);

impl CodeLanguage {
    pub const PLAIN_TEXT: &'static str = "plain text";

    pub fn plain_text() -> Self {
        Self(Self::PLAIN_TEXT.to_string())
    }

    pub fn markdown() -> Self {
        Self("markdown".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the workspace lists this language.
    pub fn is_known(&self) -> bool {
        KNOWN_LANGUAGES.contains(&self.0.as_str())
    }
}

impl Default for CodeLanguage {
    fn default() -> Self {
        Self::plain_text()
    }
}

impl std::fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a fence info string onto a canonical language. Never fails.
pub fn map_code_language(raw: &str) -> CodeLanguage {
    let lang = raw.trim().to_lowercase();
    if lang.is_empty() {
        return CodeLanguage::plain_text();
    }

    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == lang)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or(lang);
    CodeLanguage(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("js", "javascript")]
    #[case("ts", "typescript")]
    #[case("TSX", "typescript")]
    #[case("py", "python")]
    #[case("rs", "rust")]
    #[case("yml", "yaml")]
    #[case("cpp", "c++")]
    #[case("txt", "plain text")]
    fn aliases_resolve_to_canonical_names(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(map_code_language(raw).as_str(), expected);
    }

    #[test]
    fn alias_and_full_name_agree() {
        assert_eq!(map_code_language("js"), map_code_language("javascript"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_tags_are_plain_text(#[case] raw: &str) {
        assert_eq!(map_code_language(raw).as_str(), "plain text");
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(map_code_language("  Rust ").as_str(), "rust");
    }

    #[test]
    fn unknown_tags_pass_through_lowercased() {
        let lang = map_code_language("Zig");
        assert_eq!(lang.as_str(), "zig");
        assert!(!lang.is_known());
    }

    #[test]
    fn every_alias_targets_a_known_language() {
        for (alias, _) in ALIASES {
            assert!(map_code_language(alias).is_known(), "{alias}");
        }
    }
}
