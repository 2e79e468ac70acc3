pub(crate) mod eqeqeq;
