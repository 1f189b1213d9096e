#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Every class listed here is emitted by a component in the `ui` crate. Dropping or
renaming one in `ui/assets/theme/main.css` would leave that component unstyled in
packaged builds without any compile error, so the check runs as a plain
substring search over the embedded stylesheet.

When a selector is renamed on purpose, update the component markup and this list
together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors the shared components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".dark-theme",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".badge--success",
    ".alert--error",
    ".spinner",
    // Demo form and results
    ".demo-form__input",
    ".result-card__header",
    ".sql-block__line",
    ".sql-block__gutter",
    ".data-table",
    // Docs
    ".docs-tabs__tab--active",
    ".accordion__item--open",
    // How it works
    ".process-step--active",
    ".flow__bubble--active",
    // Footer
    ".footer__link",
    // Responsive blocks
    "@media (max-width: 960px)",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn dark_theme_overrides_base_palette() {
    // The dark block must redefine the background token, not just exist.
    let dark = THEME_CSS
        .find(".dark-theme")
        .map(|idx| &THEME_CSS[idx..])
        .unwrap_or_default();
    let block_end = dark.find('}').unwrap_or(dark.len());
    assert!(
        dark[..block_end].contains("--color-bg"),
        "`.dark-theme` block does not override --color-bg"
    );
}
