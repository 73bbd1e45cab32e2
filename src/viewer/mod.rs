pub mod cli;
pub mod content;
pub mod scene;
pub mod surfaces;
