//! Switch descriptions supplied by the caller.
//!
//! A [`SwitchDescriptor`] says how one switch is spelled (short `-x`, long `--name`, or both)
//! and how many values it takes. A [`Registry`] is the validated, immutable table of
//! descriptors that every other stage reads from. Switches are referred to by [`SwitchId`],
//! the position of the descriptor inside its registry.

pub mod descriptor;
pub mod registry;

pub use descriptor::{Arity, SwitchDescriptor, SwitchId};
pub use registry::{Registry, RegistryError};
