//! Generator configuration.

/// Default name of the emitted primitive namespace.
pub const DEFAULT_PRIMITIVE_NAMESPACE: &str = "Edm";

/// Default target type registered for unknown primitives.
pub const DEFAULT_FALLBACK_TYPE: &str = "any";

/// How member types that reference EDM primitives are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveStyle {
    /// Substitute the mapped target type (`Id: string;`).
    #[default]
    Inline,
    /// Keep the namespace-qualified alias (`Id: Edm.Guid;`).
    Qualified,
}

/// Options for a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name of the emitted primitive namespace block.
    pub primitive_namespace: String,
    /// Target type for primitives missing from the built-in table.
    pub fallback_type: String,
    /// Member type rendering for primitives.
    pub primitive_style: PrimitiveStyle,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            primitive_namespace: DEFAULT_PRIMITIVE_NAMESPACE.to_string(),
            fallback_type: DEFAULT_FALLBACK_TYPE.to_string(),
            primitive_style: PrimitiveStyle::default(),
        }
    }
}

impl GeneratorOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primitive namespace name.
    #[must_use]
    pub fn primitive_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.primitive_namespace = namespace.into();
        self
    }

    /// Sets the fallback type for unknown primitives.
    #[must_use]
    pub fn fallback_type(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_type = fallback.into();
        self
    }

    /// Sets the primitive rendering style.
    #[must_use]
    pub const fn primitive_style(mut self, style: PrimitiveStyle) -> Self {
        self.primitive_style = style;
        self
    }
}
