//! Engine bay slots and the components installed in them

use serde::{Deserialize, Serialize};

use crate::stats::Stat;

/// Set of stats a slot contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Contributes to acceleration
    pub acceleration: bool,
    /// Contributes to top speed
    pub top_speed: bool,
    /// Contributes to fuel economy
    pub fuel_economy: bool,
}

impl Capabilities {
    /// A slot that boosts nothing
    pub const NONE: Capabilities = Capabilities {
        acceleration: false,
        top_speed: false,
        fuel_economy: false,
    };

    /// A slot that boosts every stat
    pub const ALL: Capabilities = Capabilities {
        acceleration: true,
        top_speed: true,
        fuel_economy: true,
    };

    /// A slot that boosts exactly one stat
    pub fn only(stat: Stat) -> Self {
        Self::NONE.with(stat)
    }

    /// Add a stat to the set
    pub fn with(mut self, stat: Stat) -> Self {
        match stat {
            Stat::Acceleration => self.acceleration = true,
            Stat::TopSpeed => self.top_speed = true,
            Stat::FuelEconomy => self.fuel_economy = true,
        }
        self
    }

    /// Check whether the set contains a stat
    pub fn contains(&self, stat: Stat) -> bool {
        match stat {
            Stat::Acceleration => self.acceleration,
            Stat::TopSpeed => self.top_speed,
            Stat::FuelEconomy => self.fuel_economy,
        }
    }

    /// True when the set is empty
    pub fn is_empty(&self) -> bool {
        !(self.acceleration || self.top_speed || self.fuel_economy)
    }
}

/// Kinds of engine parts, each fitting a dedicated slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineItemType {
    /// Top speed
    Crankshaft,
    /// Top speed and fuel economy
    Carburetor,
    /// Acceleration
    SparkPlug,
    /// Acceleration and top speed
    Piston,
    /// Fuel economy
    Valve,
}

impl EngineItemType {
    /// Stats a slot of this type contributes to
    ///
    /// - Acceleration: spark plugs, pistons
    /// - Top speed: carburetors, crankshafts, pistons
    /// - Fuel economy: carburetors, valves
    pub fn capabilities(&self) -> Capabilities {
        match self {
            EngineItemType::Crankshaft => Capabilities::only(Stat::TopSpeed),
            EngineItemType::Carburetor => {
                Capabilities::only(Stat::TopSpeed).with(Stat::FuelEconomy)
            }
            EngineItemType::SparkPlug => Capabilities::only(Stat::Acceleration),
            EngineItemType::Piston => Capabilities::only(Stat::Acceleration).with(Stat::TopSpeed),
            EngineItemType::Valve => Capabilities::only(Stat::FuelEconomy),
        }
    }
}

/// An engine part occupying a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Quality tier (1 = low, 2 = medium, 3+ = high)
    pub tier: u32,
    /// Stack size
    pub quantity: u32,
    /// Broken parts contribute nothing
    #[serde(default)]
    pub broken: bool,
}

impl Component {
    /// Create an intact component
    pub fn new(tier: u32, quantity: u32) -> Self {
        Self {
            tier,
            quantity,
            broken: false,
        }
    }

    /// Create a broken component
    pub fn broken(tier: u32, quantity: u32) -> Self {
        Self {
            tier,
            quantity,
            broken: true,
        }
    }
}

/// One slot of an engine bay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSlot {
    /// Stats this slot contributes to; fixed by the engine layout
    pub capabilities: Capabilities,
    /// Installed component, if any
    #[serde(default)]
    pub occupant: Option<Component>,
}

impl ComponentSlot {
    /// Create an empty slot
    pub fn empty(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            occupant: None,
        }
    }

    /// Create an empty slot for a part type
    pub fn for_item_type(item_type: EngineItemType) -> Self {
        Self::empty(item_type.capabilities())
    }

    /// Install a component
    pub fn with_occupant(mut self, component: Component) -> Self {
        self.occupant = Some(component);
        self
    }

    /// Raw value of the installed component: `quantity * tier value`, or 0 when
    /// the slot is empty or the component is broken
    pub fn item_value<F>(&self, tier_value_of: F) -> f32
    where
        F: Fn(u32) -> f32,
    {
        match self.occupant {
            Some(component) if !component.broken => {
                component.quantity as f32 * tier_value_of(component.tier)
            }
            _ => 0.0,
        }
    }
}
