// Professor tracking: schema normalization, client-side paging, debounced note saves.

pub mod autosave;
pub mod handlers;
pub mod models;
pub mod pagination;
