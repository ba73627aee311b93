pub mod avatar;
pub mod icon;
pub mod link_row;
pub mod spinner;
