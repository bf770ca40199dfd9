mod account;
mod serde_shape;
