//! Mobile navigation menu state

/// Hamburger menu. `open` maps to the `active` class on the button and link list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger clicked
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was followed
    pub fn close(&mut self) {
        self.open = false;
    }
}
