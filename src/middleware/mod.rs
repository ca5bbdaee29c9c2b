pub mod auth;
pub mod permission;
pub mod session;

#[cfg(test)]
mod test;
