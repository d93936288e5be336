// Document pipeline: section model → plain text, or → HTML blocks → themed document.
// Everything here is pure string transformation with no I/O.

pub mod blocks;
pub mod escape;
pub mod handlers;
pub mod plain_text;
pub mod renderer;
pub mod sections;
