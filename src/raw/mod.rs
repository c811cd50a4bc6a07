mod arena;
mod handle;
mod node;
mod raw_bst;
mod size;

pub(crate) use raw_bst::RawBst;
