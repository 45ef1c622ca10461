pub mod grouper;
pub mod youtube;
