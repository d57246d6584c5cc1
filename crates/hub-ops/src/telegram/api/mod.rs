mod client;
mod model;

pub(crate) use client::*;
pub(crate) use model::*;
