pub mod media;
pub mod pointer;
pub mod reveal;
