pub(crate) mod registry;
pub(crate) mod sink;
pub(crate) mod texture;
