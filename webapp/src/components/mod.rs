pub mod navigation;
pub mod status;
