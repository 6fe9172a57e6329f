use std::fmt;
use std::str::FromStr;

/// The five anchor targets of the page, in document order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Fixed order used both by the navbar and by the scroll tracker.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id `{}`", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// Everything the page mutates at runtime. Lives in a single signal for the
/// lifetime of the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub menu_open: bool,
    pub active: Section,
    pub scrolled: bool,
}

impl ViewState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Folds one scroll sample in. `None` keeps the previous highlight.
    pub fn observe(&mut self, scrolled: bool, in_view: Option<Section>) {
        self.scrolled = scrolled;
        if let Some(section) = in_view {
            self.active = section;
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.menu_open { "bi bi-x" } else { "bi bi-list" }
    }
}
