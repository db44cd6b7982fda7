//! Patient profile reads, completion and the public HTML card

mod render;
mod service;


pub use render::{escape_html, render_not_found, render_profile_card};
pub use service::ProfileService;
