use crate::core::catalog::ItemId;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// The one-shot timer of an Add control fired.
    AddWindowElapsed(ItemId),
    /// Request to quit the application.
    Quit,
}

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Search,
    Category,
    Sort,
    Reset,
    Grid,
    ContactName,
    ContactEmail,
}

impl Focus {
    /// Tab order.
    pub const ALL: [Focus; 7] = [
        Focus::Search,
        Focus::Category,
        Focus::Sort,
        Focus::Reset,
        Focus::Grid,
        Focus::ContactName,
        Focus::ContactEmail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Search => "Search",
            Focus::Category => "Category",
            Focus::Sort => "Sort",
            Focus::Reset => "Reset",
            Focus::Grid => "Catalog",
            Focus::ContactName => "Name",
            Focus::ContactEmail => "Email",
        }
    }

    pub fn next(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + 1) % Focus::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        let idx = Focus::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Focus::ALL[(idx + Focus::ALL.len() - 1) % Focus::ALL.len()]
    }

    /// Resolve an address fragment (`#contact`) to the control it names.
    /// The leading `#` is optional. Unknown ids resolve to `None`.
    pub fn from_fragment(fragment: &str) -> Option<Focus> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        match id {
            "q" => Some(Focus::Search),
            "category" => Some(Focus::Category),
            "sort" => Some(Focus::Sort),
            "reset" => Some(Focus::Reset),
            "grid" | "catalog" => Some(Focus::Grid),
            "contact" | "contactForm" | "name" => Some(Focus::ContactName),
            "email" => Some(Focus::ContactEmail),
            _ => None,
        }
    }

    /// Whether typing goes into a text field.
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Search | Focus::ContactName | Focus::ContactEmail)
    }
}
