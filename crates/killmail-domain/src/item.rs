//! Item module - destroyed and dropped loot entries

use serde::{Deserialize, Serialize};

/// One line of a destroyed or dropped items list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item type name
    pub name: String,

    /// Stack size, 1 when the source line has no quantity
    pub quantity: u64,

    /// Held in the cargo hold rather than fitted
    pub in_cargo: bool,

    /// Held in the drone bay rather than fitted
    pub in_drone_bay: bool,
}

impl Item {
    /// Create a single fitted item
    ///
    /// # Examples
    ///
    /// ```
    /// use killmail_domain::Item;
    ///
    /// let item = Item::new("Tritanium").with_quantity(500).in_cargo();
    /// assert_eq!(item.quantity, 500);
    /// assert!(item.in_cargo);
    /// assert!(!item.in_drone_bay);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            in_cargo: false,
            in_drone_bay: false,
        }
    }

    /// Set the stack size
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Mark as held in cargo
    pub fn in_cargo(mut self) -> Self {
        self.in_cargo = true;
        self
    }

    /// Mark as held in the drone bay
    pub fn in_drone_bay(mut self) -> Self {
        self.in_drone_bay = true;
        self
    }

    /// Fitted to the ship, i.e. neither in cargo nor in the drone bay
    pub fn is_fitted(&self) -> bool {
        !self.in_cargo && !self.in_drone_bay
    }
}
