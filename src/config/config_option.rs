use crate::types::err::{self};

/// A configurable value, together with the name of the value and bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || value > self.max {
            log::error!("Value for {} out of bounds", self.name);
            return Err(err::ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
