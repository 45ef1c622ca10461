pub mod tutorial;

pub use tutorial::{PlaylistVideo, Step, Tutorial, TutorialsResponse};
