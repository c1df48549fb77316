//! Custom widget components
//!
//! Chrome widgets (`NavBar`, `ProgressBar`, `NavMenu`, `HintsBar`) render
//! directly. Section content is built as [`stack::Chunk`]s for a given width
//! so the renderer can measure and scroll it.

mod api_types;
mod best_practices;
mod footer;
mod hints_bar;
mod intro;
mod json_explainer;
pub mod modal_overlay;
mod nav_bar;
mod nav_menu;
mod openapi;
mod progress_bar;
mod rest_lab;
mod section_frame;
pub mod stack;
pub mod text;
mod status_lab;

pub use api_types::ApiTypesGrid;
pub use best_practices::{AuthHeadersPanel, BestPracticesList};
pub use footer::Footer;
pub use hints_bar::HintsBar;
pub use intro::IntroHero;
pub use json_explainer::JsonExplainer;
pub use nav_bar::NavBar;
pub use nav_menu::NavMenu;
pub use openapi::OpenApiPanel;
pub use progress_bar::ProgressBar;
pub use rest_lab::{segment_color, ConceptCards, EndpointLabPanel, RestSimulatorPanel};
pub use section_frame::SectionFrame;
pub use stack::{Chunk, Panel, Stack};
pub use status_lab::{StatusGroups, StatusLabPanel};
