/// Navigation keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Up,
    Down,
}

/// Emitted when the highlighted suggestion actually moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub index: usize,
}

/// Highlight position inside the current suggestion list.
///
/// The list length is supplied on every transition; the navigator never holds
/// on to the list itself. `index` stays within `[0, len - 1]` and is only
/// meaningful while the list is non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    index: usize,
}

impl FocusNavigator {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Called whenever the suggestion list is rebuilt.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn move_up(&mut self) -> Option<FocusChange> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(FocusChange { index: self.index })
    }

    pub fn move_down(&mut self, len: usize) -> Option<FocusChange> {
        if self.index + 1 >= len {
            return None;
        }
        self.index += 1;
        Some(FocusChange { index: self.index })
    }

    pub fn apply(&mut self, key: NavigationKey, len: usize) -> Option<FocusChange> {
        match key {
            NavigationKey::Up => self.move_up(),
            NavigationKey::Down => self.move_down(len),
        }
    }
}
