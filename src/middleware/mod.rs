//! Request middleware: session access, authorization guards and the lifecycle hooks.

pub mod auth;
pub mod hook;
pub mod session;

#[cfg(test)]
mod test;
