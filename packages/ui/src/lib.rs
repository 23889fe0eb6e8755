//! This crate contains all shared UI for the workspace.

mod window;
pub use window::{
    use_in_view, use_pointer, use_scroll_y, use_viewport, use_window, WindowEvent,
    WindowProvider, WindowSignals,
};

mod icons;
pub use icons::Icon;

mod navbar;
pub use navbar::{AnimatedLogo, Navbar, NavbarView};

mod hero;
pub use hero::{Hero, HeroStage, Particles};

mod events;
pub use events::{EventCard, EventCatalog, EventCatalogView, EventDetailModal};

mod about;
pub use about::About;

mod theme;
pub use theme::FestivalTheme;
