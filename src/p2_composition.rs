// Pattern 2: Composition over Inheritance
// A transport is assembled from an engine and a driver rather than derived
// from a vehicle base class. Each part is swappable behind its own trait.

use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// Example: Engine Variants Behind a Trait
// ============================================================================

trait Engine {
    fn propel(&self) -> String;
}

struct Combustion;

impl Engine for Combustion {
    fn propel(&self) -> String {
        "Burning fuel to move".to_string()
    }
}

struct Electric;

impl Engine for Electric {
    fn propel(&self) -> String {
        "Drawing on the battery to move".to_string()
    }
}

// ============================================================================
// Example: Factory Enum for Engine Construction
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineKind {
    Combustion,
    Electric,
}

impl EngineKind {
    fn build(self) -> Box<dyn Engine> {
        match self {
            EngineKind::Combustion => Box::new(Combustion),
            EngineKind::Electric => Box::new(Electric),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown engine kind: {0}")]
struct UnknownEngineKind(String);

impl FromStr for EngineKind {
    type Err = UnknownEngineKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "combustion" => Ok(EngineKind::Combustion),
            "electric" => Ok(EngineKind::Electric),
            _ => Err(UnknownEngineKind(s.to_string())),
        }
    }
}

// ============================================================================
// Example: Driver Variants Behind a Trait
// ============================================================================

trait Driver {
    fn navigate(&self) -> String;
}

struct Human;

impl Driver for Human {
    fn navigate(&self) -> String {
        "Steering by hand".to_string()
    }
}

struct Robot;

impl Driver for Robot {
    fn navigate(&self) -> String {
        "Plotting the route autonomously".to_string()
    }
}

// ============================================================================
// Example: The Composed Transport
// ============================================================================

struct Transport {
    engine: Box<dyn Engine>,
    driver: Box<dyn Driver>,
}

impl Transport {
    fn new(kind: EngineKind, driver: Box<dyn Driver>) -> Self {
        Transport {
            engine: kind.build(),
            driver,
        }
    }

    fn deliver(&self, destination: &str, cargo: &str) {
        println!("Moving to {} to deliver {}", destination, cargo);
        println!("  {}", self.driver.navigate());
        println!("  {}", self.engine.propel());
    }
}

fn main() {
    println!("=== Composition Demo ===\n");

    let transport = Transport::new(EngineKind::Electric, Box::new(Robot));
    transport.deliver("Osaka", "beer");

    println!();
    let transport = Transport::new(EngineKind::Combustion, Box::new(Human));
    transport.deliver("Kyoto", "furniture");

    // Engine kinds parse from their legacy tags
    println!("\n=== Engine Factory ===");
    let kind: EngineKind = "electric".parse().expect("known engine tag");
    println!("Built from tag: {}", kind.build().propel());

    if let Err(err) = "warp".parse::<EngineKind>() {
        println!("Rejected: {}", err);
    }
}

// ============================================================================
// Tests
// ============================================================================
