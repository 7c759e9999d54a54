//! Enum declaration generation.

use edmx_ts_schema::EnumType;

/// Generator for enum declarations.
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates an enum declaration.
    ///
    /// Members are comma-separated in declaration order, with no trailing
    /// comma after the last one.
    #[must_use]
    pub fn generate_enum(&self, enum_type: &EnumType) -> String {
        let mut output = String::new();

        output.push_str(&format!("export enum {} {{\n", enum_type.name));
        let members: Vec<String> = enum_type
            .members
            .iter()
            .map(|member| format!("{} = {}", member.name, member.value))
            .collect();
        output.push_str(&members.join(","));
        output.push_str("}\n");

        output
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}
