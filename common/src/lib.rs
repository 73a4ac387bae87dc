pub mod editor;
pub mod error;
pub mod model;
pub mod preview;
pub mod requests;
