//! TypeScript code generation modules.

pub mod custom_attributes;
pub mod interfaces;
pub mod properties;
pub mod registry;
pub mod types;

pub use custom_attributes::CustomAttributeNarrowing;
pub use interfaces::InterfaceGenerator;
pub use properties::PropertyGenerator;
pub use registry::RegistryGenerator;
pub use types::{TsType, TypeOutcome};
