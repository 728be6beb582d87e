//! TUI application module
//!
//! Contains the view store and router, the terminal wrapper, the screen
//! components and the controller that ties them together.

pub mod app;
pub mod router;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use router::{resolve, Intent};
pub use state::{NavTab, NavigationAction, Screen, Transition, ViewState, ViewStore};
pub use tui::Tui;
