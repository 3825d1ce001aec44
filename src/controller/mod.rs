pub mod settings;
pub mod user;

#[cfg(test)]
mod test;
