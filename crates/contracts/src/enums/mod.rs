pub mod chemical_resistance;
pub mod choice;
pub mod grease_compatibility;
pub mod low_friction;
pub mod wear_resistance;
pub mod yes_no;

pub use chemical_resistance::ChemicalResistance;
pub use choice::Choice;
pub use grease_compatibility::GreaseCompatibility;
pub use low_friction::LowFriction;
pub use wear_resistance::WearResistance;
pub use yes_no::YesNo;
