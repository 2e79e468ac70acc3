pub(crate) mod no_with;
