pub(crate) mod direct;
pub(crate) mod indirect;
