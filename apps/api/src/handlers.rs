pub mod access;
pub mod health;
pub mod navigation;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
