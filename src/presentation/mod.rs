pub mod format;
pub mod heat;
pub mod marker;
pub mod overlay;
pub mod region;
pub mod view;
