pub mod channels;

#[cfg(test)]
pub(crate) mod mock;
