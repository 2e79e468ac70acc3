pub(crate) mod no_eval;
