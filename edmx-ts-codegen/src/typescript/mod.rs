//! TypeScript declaration generation modules.

pub mod aliases;
pub mod enums;
pub mod interfaces;
pub mod namespaces;

pub use aliases::AliasGenerator;
pub use enums::EnumGenerator;
pub use interfaces::InterfaceGenerator;
pub use namespaces::NamespaceGenerator;
