pub mod dynamics;
pub mod record;
pub mod session;
