use std::fmt;

/// Visual-only theme state; nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        let next = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        next
    }

    pub fn change_message(self) -> String {
        format!("Theme changed to: {self}")
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}
