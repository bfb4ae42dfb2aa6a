pub mod invocation;
pub mod lifecycle;
pub mod paths;
pub mod resolver;
pub mod store;
pub mod transfer;
