//! Open/closed and active-item state for disclosure menus.
//!
//! DESIGN
//! ======
//! Menus render through one generic component; this module holds the pure
//! transitions so keyboard and pointer behavior can be tested without a DOM.
//! Items are addressed by index into the list the component was given.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Icon drawn before a menu item label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Google,
    Microsoft,
}

/// Capability required of anything shown as a disclosure item.
pub trait MenuEntry {
    fn label(&self) -> &'static str;

    fn icon(&self) -> Option<MenuIcon> {
        None
    }
}

/// What the component should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    /// Key not handled; let the browser keep its default behavior.
    None,
    /// State changed; re-render only.
    Update,
    /// The item at this index was chosen. The menu is already closed.
    Select(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    pub open: bool,
    pub active: Option<usize>,
}

impl DisclosureState {
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.active = None;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    /// Highlight the item under the pointer.
    pub fn hover(&mut self, index: usize, len: usize) {
        if self.open && index < len {
            self.active = Some(index);
        }
    }

    /// Close and report the chosen index.
    pub fn select(&mut self, index: usize, len: usize) -> DisclosureAction {
        if index >= len {
            return DisclosureAction::None;
        }
        self.close();
        DisclosureAction::Select(index)
    }

    /// Apply a `KeyboardEvent.key` value to a menu with `len` items.
    pub fn on_key(&mut self, key: &str, len: usize) -> DisclosureAction {
        if len == 0 {
            return DisclosureAction::None;
        }
        let last = len - 1;

        if !self.open {
            return match key {
                "Enter" | " " | "ArrowDown" => self.open_at(0),
                "ArrowUp" => self.open_at(last),
                _ => DisclosureAction::None,
            };
        }

        match key {
            "ArrowDown" => {
                self.active = Some(match self.active {
                    Some(i) if i < last => i + 1,
                    _ => 0,
                });
                DisclosureAction::Update
            }
            "ArrowUp" => {
                self.active = Some(match self.active {
                    Some(i) if i > 0 => i - 1,
                    _ => last,
                });
                DisclosureAction::Update
            }
            "Home" => {
                self.active = Some(0);
                DisclosureAction::Update
            }
            "End" => {
                self.active = Some(last);
                DisclosureAction::Update
            }
            "Escape" | "Tab" => {
                self.close();
                DisclosureAction::Update
            }
            "Enter" | " " => match self.active {
                Some(i) => self.select(i, len),
                None => DisclosureAction::None,
            },
            _ => DisclosureAction::None,
        }
    }

    fn open_at(&mut self, index: usize) -> DisclosureAction {
        self.open = true;
        self.active = Some(index);
        DisclosureAction::Update
    }
}
