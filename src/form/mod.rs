pub(crate) mod state;
pub(crate) mod urls;
