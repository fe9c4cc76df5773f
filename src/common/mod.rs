mod fs;
mod value;

pub(crate) use fs::*;
pub(crate) use value::*;
