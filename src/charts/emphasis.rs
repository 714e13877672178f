//! Search & selection emphasis for chart dots and legend entries.

/// How a single dot is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Emphasis {
    Dimmed,
    Normal,
    Highlighted,
}

/// Per-tab interaction state: search text, clicked legend entry, hovered legend entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    search: String,
    selected: Option<String>,
    hovered: Option<String>,
}

impl ViewFilter {
    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Clicking the selected country clears the selection, any other selects it.
    pub fn toggle_selected(&mut self, country: &str) {
        if self.selected.as_deref() == Some(country) {
            self.selected = None;
        } else {
            self.selected = Some(country.to_string());
        }
    }

    pub fn set_hovered(&mut self, country: Option<&str>) {
        self.hovered = country.map(str::to_string);
    }

    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Legend entries stay visible unless a search term excludes them.
    pub fn legend_visible(&self, country: &str) -> bool {
        let needle = self.needle();
        needle.is_empty() || country.to_lowercase().contains(&needle)
    }

    /// An active search wins over a selection; legend hover applies only
    /// when nothing is selected.
    pub fn emphasis(&self, country: &str) -> Emphasis {
        let needle = self.needle();
        if !needle.is_empty() {
            return if country.to_lowercase().contains(&needle) {
                Emphasis::Highlighted
            } else {
                Emphasis::Dimmed
            };
        }

        match (&self.selected, &self.hovered) {
            (Some(selected), _) if selected == country => Emphasis::Highlighted,
            (Some(_), _) => Emphasis::Dimmed,
            (None, Some(hovered)) if hovered == country => Emphasis::Highlighted,
            _ => Emphasis::Normal,
        }
    }

    /// Drop a selection that no longer exists in a freshly loaded dataset.
    pub fn retain_selection<'a>(&mut self, mut countries: impl Iterator<Item = &'a str>) {
        if let Some(selected) = &self.selected {
            if !countries.any(|c| c == selected) {
                self.selected = None;
            }
        }
        self.hovered = None;
    }
}
