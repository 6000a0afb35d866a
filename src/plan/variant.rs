//! Export variants
//!
//! Every subject is exported three times. Variants only change what is
//! hidden at export time; the plan's numbers are never recomputed.

/// Which export of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Everything drawn
    Full,
    /// Circles plus the decorative overlay
    Var2,
    /// Circles only
    Var1,
}

/// Suppression profile applied before one export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportVariant {
    pub kind: VariantKind,
    /// Hide text annotations and all tendency/makeup arrows
    pub suppress_annotations: bool,
    /// Hide the decorative overlay
    pub suppress_overlay: bool,
}

impl ExportVariant {
    pub const FULL: Self = Self {
        kind: VariantKind::Full,
        suppress_annotations: false,
        suppress_overlay: false,
    };

    pub const VAR2: Self = Self {
        kind: VariantKind::Var2,
        suppress_annotations: true,
        suppress_overlay: false,
    };

    pub const VAR1: Self = Self {
        kind: VariantKind::Var1,
        suppress_annotations: true,
        suppress_overlay: true,
    };

    /// Export order
    pub const ALL: [Self; 3] = [Self::FULL, Self::VAR2, Self::VAR1];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.kind {
            VariantKind::Full => "full",
            VariantKind::Var2 => "var2",
            VariantKind::Var1 => "var1",
        }
    }

    /// Appended to the exported file name
    #[must_use]
    pub const fn file_suffix(&self) -> &'static str {
        match self.kind {
            VariantKind::Full => "",
            VariantKind::Var2 => "-var2",
            VariantKind::Var1 => "-var1",
        }
    }
}
