pub mod form;
pub mod palette;
pub mod question;
