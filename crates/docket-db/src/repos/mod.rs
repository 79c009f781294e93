//! Repository modules implementing storage operations for all Docket entities.
//!
//! Each module exposes connection-level functions (shared by `DocketDb` and
//! `UnitOfWork`) and adds methods to `DocketDb` via `impl DocketDb` blocks.

pub mod case;
pub mod document;
pub mod timeline;
