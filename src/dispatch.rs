//! Setter dispatch on top of the typed parser.
//!
//! A [`Switchboard`] pairs each switch descriptor with a setter that writes the resolved value
//! into a caller-owned target (typically an options struct). Dispatch happens only after the
//! whole argument list has parsed, in resolution order: switches in the order written, and
//! the switches of a cluster left to right.
//!
//! Setters own value validation. An error returned by a setter stops dispatch and reaches the
//! caller unchanged; setters that already ran keep their effects.

use std::fmt;
use tracing::debug;

use crate::config::SyntaxOptions;
use crate::error::ParseError;
use crate::parser::{parse_with, SwitchValue};
use crate::switches::{Registry, RegistryError, SwitchDescriptor};

/// A setter for one switch.
pub type Setter<T, E> = Box<dyn Fn(&mut T, SwitchValue) -> Result<(), E> + Send + Sync>;

/// A validated switch table whose entries each carry a setter.
pub struct Switchboard<T, E> {
    registry: Registry,
    setters: Vec<Setter<T, E>>,
    options: SyntaxOptions,
}

impl<T, E> Switchboard<T, E> {
    pub fn builder() -> SwitchboardBuilder<T, E> {
        SwitchboardBuilder::new()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &SyntaxOptions {
        &self.options
    }

    /// Parse `args` and run the setters of every resolved switch against `target`.
    ///
    /// Grammar errors are converted into `E` before any setter runs.
    pub fn dispatch<I, S>(&self, args: I, target: &mut T) -> Result<(), E>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: From<ParseError>,
    {
        let resolved = parse_with(args, &self.registry, &self.options)?;
        for resolution in resolved {
            let setter = &self.setters[resolution.switch.index()];
            if let Some(switch) = self.registry.get(resolution.switch) {
                debug!(switch = %switch.display_name(), "dispatching switch value");
            }
            setter(target, resolution.value)?;
        }
        Ok(())
    }
}

impl<T, E> fmt::Debug for Switchboard<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switchboard")
            .field("registry", &self.registry)
            .field("setters", &self.setters.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Collects descriptors and setters, then validates them into a [`Switchboard`].
pub struct SwitchboardBuilder<T, E> {
    switches: Vec<SwitchDescriptor>,
    setters: Vec<Setter<T, E>>,
    options: SyntaxOptions,
}

impl<T, E> SwitchboardBuilder<T, E> {
    pub fn new() -> Self {
        Self {
            switches: Vec::new(),
            setters: Vec::new(),
            options: SyntaxOptions::default(),
        }
    }

    pub fn switch<F>(mut self, descriptor: SwitchDescriptor, setter: F) -> Self
    where
        F: Fn(&mut T, SwitchValue) -> Result<(), E> + Send + Sync + 'static,
    {
        self.switches.push(descriptor);
        self.setters.push(Box::new(setter));
        self
    }

    pub fn options(mut self, options: SyntaxOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Switchboard<T, E>, RegistryError> {
        Ok(Switchboard {
            registry: Registry::new(self.switches)?,
            setters: self.setters,
            options: self.options,
        })
    }
}

impl<T, E> Default for SwitchboardBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
