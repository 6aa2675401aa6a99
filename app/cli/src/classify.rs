//! Filename → (icon, style) dispatch.
//!
//! Two ordered static rule lists: well-known filenames first (these double as
//! project-environment indicators — manifests, lockfiles, dotfiles), then
//! extensions. First hit wins; extension comparison is case-insensitive.

use crate::style::Style;

pub const FOLDER_ICON: &str = "📂";
const DEFAULT_ICON: &str = "📄";

const SPECIAL_FILE_RULES: &[(&str, &str, Style)] = &[
    ("package.json", "📦", Style::Npm),
    ("package-lock.json", "🔒", Style::Lock),
    ("yarn.lock", "🔒", Style::Lock),
    ("pyproject.toml", "🐍", Style::Python),
    ("poetry.lock", "🔒", Style::Lock),
    ("Cargo.toml", "📦", Style::Rust),
    ("Cargo.lock", "🔒", Style::Lock),
    (".gitignore", "👁️", Style::Config),
    (".env", "⚙️", Style::Config),
    ("Dockerfile", "🐳", Style::Config),
    ("Makefile", "🛠️", Style::Config),
];

const EXTENSION_RULES: &[(&str, &str, Style)] = &[
    // Programmatic
    ("py", "🐍", Style::Python),
    ("rs", "🦀", Style::Rust),
    ("js", "📜", Style::Js),
    ("jsx", "⚛️", Style::Js),
    ("ts", "💠", Style::Ts),
    ("tsx", "⚛️", Style::Ts),
    ("sh", "🐚", Style::Shell),
    // Web
    ("html", "🌐", Style::Html),
    ("css", "🎨", Style::Css),
    // Data
    ("json", "📋", Style::Json),
    ("yaml", "📋", Style::Yaml),
    ("yml", "📋", Style::Yaml),
    ("sql", "💾", Style::Sql),
    ("csv", "📊", Style::Csv),
    // Configuration
    ("toml", "⚙️", Style::Config),
    ("env", "⚙️", Style::Config),
    ("lock", "🔒", Style::Lock),
    // Documentation
    ("md", "📝", Style::Docs),
    ("txt", "📝", Style::Docs),
    ("rst", "📝", Style::Docs),
    // Images
    ("png", "🖼️", Style::Image),
    ("jpg", "🖼️", Style::Image),
    ("jpeg", "🖼️", Style::Image),
    ("gif", "🖼️", Style::Image),
    ("svg", "🖼️", Style::Image),
];

/// Icon and style for one entry name.
pub fn classify(name: &str, is_dir: bool) -> (&'static str, Style) {
    if is_dir {
        return (FOLDER_ICON, Style::Folder);
    }
    for (special, icon, style) in SPECIAL_FILE_RULES {
        if name == *special {
            return (icon, *style);
        }
    }
    if let Some((_, ext)) = name.rsplit_once('.') {
        let ext = ext.to_ascii_lowercase();
        for (rule_ext, icon, style) in EXTENSION_RULES {
            if ext == *rule_ext {
                return (icon, *style);
            }
        }
    }
    (DEFAULT_ICON, Style::Default)
}

#[cfg(test)]
#[path = "classify.test.rs"]
mod tests;
