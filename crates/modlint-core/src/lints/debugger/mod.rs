pub(crate) mod debugger;
