//! Authorization form builder: the editing canvas, its palette and the preview dialog.

pub mod builder;
pub mod palette;
