//! The product's configurable options, as declared to the billing panel.

/// A configurable option slot on the panel product.
///
/// The panel may deliver a value keyed by friendly name, by short id,
/// through a custom field, or positionally as `configoptionN`; resolution
/// tries all of them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    /// Free-form notes copied onto the license record.
    Notes,
    /// Upper bound on stored validation points.
    ValidationLimit,
    /// Concurrent IP limit.
    IpLimit,
    /// Validation points granted per replenish.
    ValidationTokens,
    /// License scope string.
    Scope,
    /// Replenish cadence.
    ReplenishInterval,
}

impl ConfigOption {
    /// All options in panel declaration order.
    pub const ALL: [Self; 6] = [
        Self::Notes,
        Self::ValidationLimit,
        Self::IpLimit,
        Self::ValidationTokens,
        Self::Scope,
        Self::ReplenishInterval,
    ];

    /// Short id used in option keys.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::ValidationLimit => "vlimit",
            Self::IpLimit => "limit",
            Self::ValidationTokens => "vtokens",
            Self::Scope => "scope",
            Self::ReplenishInterval => "rinterval",
        }
    }

    /// Label the panel shows operators; also accepted as a lookup key.
    #[must_use]
    pub const fn friendly_name(self) -> &'static str {
        match self {
            Self::Notes => "License Notes",
            Self::ValidationLimit => "Max Tokens",
            Self::IpLimit => "IP Limit",
            Self::ValidationTokens => "Validation Tokens",
            Self::Scope => "License Scope",
            Self::ReplenishInterval => "Replenish Interval",
        }
    }

    /// 1-based position in the declaration, matching the panel's positional
    /// `configoptionN` parameters.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map_or(0, |index| index + 1)
    }
}
