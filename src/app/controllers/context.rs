use crate::app::infrastructure::error::ThemeError;

use super::provider::ThemeProvider;

/// Scope that hands the theme provider to the parts of the UI that need it.
///
/// Owned by the composition root for the lifetime of the window.
#[derive(Default)]
pub struct ThemeContext {
    provider: Option<ThemeProvider>,
}

impl ThemeContext {
    pub fn new(provider: ThemeProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A scope with no provider installed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn use_theme(&self) -> Result<&ThemeProvider, ThemeError> {
        self.provider.as_ref().ok_or(ThemeError::OutsideProvider)
    }

    pub fn use_theme_mut(&mut self) -> Result<&mut ThemeProvider, ThemeError> {
        self.provider.as_mut().ok_or(ThemeError::OutsideProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::root::ClassList;
    use crate::app::domain::settings::ShellConfig;
    use crate::app::domain::theme::{EffectiveTheme, ThemePreference};
    use crate::app::infrastructure::platform::FixedProbe;
    use crate::app::infrastructure::storage::MemoryStore;

    fn scoped() -> ThemeContext {
        ThemeContext::new(ThemeProvider::new(
            &ShellConfig::default(),
            MemoryStore::new(),
            ClassList::new(),
            None,
            FixedProbe(true),
        ))
    }

    #[test]
    fn test_use_theme_outside_provider_fails() {
        let mut context = ThemeContext::empty();
        let err = context.use_theme().err().unwrap();
        assert_eq!(err.to_string(), "use_theme must be used within a ThemeProvider");
        assert!(matches!(context.use_theme_mut(), Err(ThemeError::OutsideProvider)));
    }

    #[test]
    fn test_use_theme_reads_preference() {
        let context = scoped();
        let provider = context.use_theme().unwrap();
        assert_eq!(provider.theme(), ThemePreference::System);
        assert_eq!(provider.effective_theme(), Some(EffectiveTheme::Dark));
    }

    #[test]
    fn test_use_theme_mut_sets_preference() {
        let mut context = scoped();
        context
            .use_theme_mut()
            .unwrap()
            .set_theme(ThemePreference::Light)
            .unwrap();
        assert_eq!(context.use_theme().unwrap().theme(), ThemePreference::Light);
    }
}
