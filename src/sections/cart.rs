use crate::i18n::CartContent;

/// Cart drawer. Items are never added, so the count stays at zero and the
/// drawer always shows its empty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cart {
    open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Text shown inside the drawer.
    pub fn message(&self, content: &CartContent) -> &'static str {
        content.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{content_for, LanguageCode};

    #[test]
    fn test_cart_starts_closed_and_empty() {
        let cart = Cart::new();
        assert!(!cart.is_open());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut cart = Cart::new();
        cart.toggle();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());

        cart.open();
        cart.close();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_message_is_empty_state() {
        let content = &content_for(LanguageCode::En).cart;
        assert_eq!(Cart::new().message(content), content.empty);
    }
}
