//! Light/dark theme preference.
//!
//! The shell's `App` owns a single `Signal<ThemePreference>` for the whole
//! session and provides it as context; there is no global theme state. It sits
//! above the language-keyed router, so switching locale keeps the theme.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Class applied to the shell root; the stylesheet keys its palette off it.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "app app--light",
            ThemePreference::Dark => "app app--dark dark-theme",
        }
    }

    /// Glyph for the toggle button: the theme you would switch *to*.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "☾",
            ThemePreference::Dark => "☀",
        }
    }
}

/// Creates the session theme and provides it to the tree. Call once, in the
/// shell's `App`.
pub fn provide_theme() -> Signal<ThemePreference> {
    use_context_provider(|| Signal::new(ThemePreference::default()))
}

/// The session theme, or a scope-local one when no shell provided it.
pub fn use_theme() -> Signal<ThemePreference> {
    use_hook(|| {
        try_consume_context::<Signal<ThemePreference>>()
            .unwrap_or_else(|| Signal::new(ThemePreference::default()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
        assert!(!ThemePreference::default().is_dark());
    }

    #[test]
    fn toggling_twice_is_identity() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn dark_root_class_carries_dark_theme_marker() {
        assert!(ThemePreference::Dark.root_class().contains("dark-theme"));
        assert!(!ThemePreference::Light.root_class().contains("dark-theme"));
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;

    thread_local! {
        static HANDLES: RefCell<Option<(Signal<bool>, Signal<ThemePreference>)>> =
            const { RefCell::new(None) };
        static THEME_AT_MOUNT: RefCell<Vec<ThemePreference>> = const { RefCell::new(Vec::new()) };
    }

    #[component]
    fn Shell() -> Element {
        let theme = provide_theme();
        let show_page = use_signal(|| true);
        HANDLES.with(|handles| *handles.borrow_mut() = Some((show_page, theme)));

        rsx! {
            if show_page() {
                Page {}
            }
        }
    }

    #[component]
    fn Page() -> Element {
        let theme = use_theme();
        use_hook(|| THEME_AT_MOUNT.with(|seen| seen.borrow_mut().push(*theme.peek())));
        rsx! { div {} }
    }

    fn handles() -> (Signal<bool>, Signal<ThemePreference>) {
        HANDLES.with(|handles| *handles.borrow()).expect("shell rendered")
    }

    #[test]
    fn remounted_page_keeps_the_session_theme() {
        THEME_AT_MOUNT.with(|seen| seen.borrow_mut().clear());
        let mut dom = VirtualDom::new(Shell);
        dom.rebuild_in_place();

        let (mut show_page, mut theme) = handles();
        dom.in_runtime(|| {
            theme.set(ThemePreference::Dark);
            show_page.set(false);
        });
        dom.render_immediate(&mut NoOpMutations);

        dom.in_runtime(|| show_page.set(true));
        dom.render_immediate(&mut NoOpMutations);

        let seen = THEME_AT_MOUNT.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![ThemePreference::Light, ThemePreference::Dark]);
    }

    #[test]
    fn without_a_shell_the_theme_is_local_and_light() {
        THEME_AT_MOUNT.with(|seen| seen.borrow_mut().clear());
        let mut dom = VirtualDom::new(Page);
        dom.rebuild_in_place();
        let seen = THEME_AT_MOUNT.with(|seen| seen.borrow().clone());
        assert_eq!(seen, vec![ThemePreference::Light]);
    }
}
