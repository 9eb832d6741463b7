pub(crate) mod compositor;
pub(crate) mod disposal;
pub(crate) mod frame;
