//! Application state — single-owner, main-thread only.
//!
//! The interactive state is the core `Model`; everything here besides it is
//! UI chrome (overlay, status line, quit flag). All model changes go through
//! `dispatch`, which folds an `Action` into the next snapshot.

use std::path::PathBuf;

use tablemap_core::directory::Directory;
use tablemap_core::store::{update, Action, Model};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Cuisine filter menu; cursor indexes `CuisineFilter::OPTIONS`.
    CuisineMenu { cursor: usize },
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub model: Model,
    pub directory: Directory,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(directory: Directory, state_path: PathBuf) -> Self {
        Self {
            model: Model::new(),
            directory,
            overlay: Overlay::None,
            status_message: None,
            running: true,
            state_path,
        }
    }

    /// Fold an action into the model, replacing the snapshot.
    pub fn dispatch(&mut self, action: Action) {
        let model = std::mem::take(&mut self.model);
        self.model = update(model, action, &self.directory);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablemap_core::domain::{Cuisine, CuisineFilter};
    use tablemap_core::store::Screen;

    fn app() -> AppState {
        AppState::new(Directory::san_marcos(), PathBuf::from("."))
    }

    #[test]
    fn dispatch_replaces_the_snapshot() {
        let mut app = app();
        app.dispatch(Action::SetFilter(CuisineFilter::Only(Cuisine::Asian)));
        assert_eq!(app.model.filter, CuisineFilter::Only(Cuisine::Asian));

        app.dispatch(Action::Open);
        assert!(matches!(app.model.screen, Screen::Detail { .. }));

        app.dispatch(Action::Back);
        assert_eq!(app.model.screen, Screen::Listing);
        assert_eq!(app.model.filter, CuisineFilter::Only(Cuisine::Asian));
    }

    #[test]
    fn status_levels() {
        let mut app = app();
        app.set_status("ok");
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Info);
        app.set_warning("hm");
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Warning);
        app.set_error("bad");
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Error);
    }
}
