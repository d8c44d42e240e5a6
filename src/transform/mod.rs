pub(crate) mod chain;
pub(crate) mod crop;
pub(crate) mod encode;
pub(crate) mod overlay;
pub(crate) mod render;
