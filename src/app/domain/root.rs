//! The root element that carries the applied theme marker.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::theme::EffectiveTheme;

/// Something that displays exactly one light/dark marker once resolved.
pub trait ThemeRoot {
    /// Replace whatever marker is present with `theme`.
    fn apply_marker(&mut self, theme: EffectiveTheme);

    fn marker(&self) -> Option<EffectiveTheme>;
}

/// A set of class names, like an element's class list.
///
/// Clones share the same underlying set, so a caller can keep a handle
/// while the provider owns another.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ThemeRoot for ClassList {
    fn apply_marker(&mut self, theme: EffectiveTheme) {
        let mut classes = self.classes.borrow_mut();
        for marker in EffectiveTheme::all() {
            classes.remove(marker.class_name());
        }
        classes.insert(theme.class_name().to_string());
    }

    fn marker(&self) -> Option<EffectiveTheme> {
        let classes = self.classes.borrow();
        EffectiveTheme::all()
            .iter()
            .copied()
            .find(|theme| classes.contains(theme.class_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_marker() {
        let list = ClassList::new();
        assert_eq!(list.marker(), None);
    }

    #[test]
    fn test_apply_marker_replaces_previous() {
        let mut list = ClassList::new();
        list.apply_marker(EffectiveTheme::Dark);
        list.apply_marker(EffectiveTheme::Light);
        assert_eq!(list.marker(), Some(EffectiveTheme::Light));
        assert!(!list.contains("dark"));
    }

    #[test]
    fn test_apply_marker_keeps_unrelated_classes() {
        let mut list = ClassList::new();
        list.add("min-h-screen");
        list.apply_marker(EffectiveTheme::Dark);
        assert_eq!(list.classes(), vec!["dark".to_string(), "min-h-screen".to_string()]);
    }

    #[test]
    fn test_clones_share_state() {
        let handle = ClassList::new();
        let mut owned = handle.clone();
        owned.apply_marker(EffectiveTheme::Dark);
        assert_eq!(handle.marker(), Some(EffectiveTheme::Dark));
    }

    #[test]
    fn test_stray_double_marker_is_cleaned_up() {
        let mut list = ClassList::new();
        list.add("light");
        list.add("dark");
        list.apply_marker(EffectiveTheme::Dark);
        assert_eq!(list.classes(), vec!["dark".to_string()]);
    }
}
