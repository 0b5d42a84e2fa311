#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Main,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_is_comparable() {
        assert_eq!(AppMode::Main, AppMode::Main);
        assert_ne!(AppMode::Help, AppMode::Quit);
    }
}
