use pretty_assertions::assert_eq;

use super::*;

#[test]
fn directories_use_the_folder_icon() {
    assert_eq!(classify("src", true), (FOLDER_ICON, Style::Folder));
    // Even when the name would match a file rule.
    assert_eq!(classify("package.json", true), (FOLDER_ICON, Style::Folder));
}

#[test]
fn special_filenames_win_over_extension_rules() {
    // package.json is an npm manifest, not a generic .json file.
    let (icon, style) = classify("package.json", false);
    assert_eq!((icon, style), ("📦", Style::Npm));

    // pyproject.toml indicates a python project, not generic config.
    let (_, style) = classify("pyproject.toml", false);
    assert_eq!(style, Style::Python);
}

#[test]
fn extension_rules_apply_to_ordinary_files() {
    assert_eq!(classify("main.py", false).1, Style::Python);
    assert_eq!(classify("lib.rs", false).1, Style::Rust);
    assert_eq!(classify("notes.md", false).1, Style::Docs);
    assert_eq!(classify("data.json", false).1, Style::Json);
}

#[test]
fn extension_comparison_is_case_insensitive() {
    assert_eq!(classify("PHOTO.PNG", false).1, Style::Image);
    assert_eq!(classify("Readme.MD", false).1, Style::Docs);
}

#[test]
fn unknown_files_get_the_default_icon() {
    assert_eq!(classify("core.bin", false), ("📄", Style::Default));
    assert_eq!(classify("LICENSE", false), ("📄", Style::Default));
}
