//! Server-side HTML for the two pages. Pure functions of their inputs.

pub mod detail;
pub mod escape;
pub mod list;

pub use detail::{render_detail_page, render_not_found_page};
pub use list::render_list_page;
