pub mod channels;
pub mod composer;
