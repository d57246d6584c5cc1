//! Assorted utility functions (missing batteries).
mod std_ext;

pub(crate) mod slug;
pub(crate) mod url;

// We don't care if some of the imports here are not used. They may be used
// at some point. It's just convenient not to import them manually all the
// time a new extension method is needed.
#[allow(unused_imports)]
pub(crate) mod prelude {
    pub(crate) use super::std_ext::ErrorExt as _;
    pub(crate) use super::std_ext::IntoIteratorExt as _;
    pub(crate) use super::std_ext::StrExt as _;
}

pub(crate) type DynError = dyn std::error::Error + Send + Sync;
