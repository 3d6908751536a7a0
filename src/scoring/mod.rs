pub mod batch;
pub mod criteria;
pub mod likelihood;
pub mod session;
