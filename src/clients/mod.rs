pub mod vocus;
pub mod wire;
