//! Population figures used for per-capita conversion.

use govspend_shared::Jurisdiction;
use rust_decimal::Decimal;

use super::error::BudgetError;

/// Populations the dashboard was built with. `Federal` carries the national
/// population.
const DEFAULT_POPULATIONS: [(Jurisdiction, u64); 9] = [
    (Jurisdiction::Nsw, 7_618_200),
    (Jurisdiction::Vic, 5_938_100),
    (Jurisdiction::Qld, 4_779_400),
    (Jurisdiction::Wa, 2_591_600),
    (Jurisdiction::Sa, 1_698_600),
    (Jurisdiction::Tas, 516_600),
    (Jurisdiction::Act, 390_800),
    (Jurisdiction::Nt, 244_600),
    (Jurisdiction::Federal, 23_781_200),
];

/// Population per jurisdiction.
///
/// A table always holds a positive population for every jurisdiction, so a
/// per-capita figure exists for every record that can be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationTable {
    populations: [u64; 9],
}

impl PopulationTable {
    /// Builds a table from explicit entries.
    ///
    /// Later entries for the same jurisdiction replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::MissingPopulation` if a jurisdiction has no entry
    /// and `BudgetError::ZeroPopulation` if an entry is zero.
    pub fn new(
        entries: impl IntoIterator<Item = (Jurisdiction, u64)>,
    ) -> Result<Self, BudgetError> {
        let mut populations = [0u64; 9];
        for (jurisdiction, population) in entries {
            if population == 0 {
                return Err(BudgetError::ZeroPopulation(jurisdiction));
            }
            populations[jurisdiction.index()] = population;
        }

        if let Some(missing) = Jurisdiction::ALL
            .into_iter()
            .find(|j| populations[j.index()] == 0)
        {
            return Err(BudgetError::MissingPopulation(missing));
        }

        Ok(Self { populations })
    }

    /// Returns a copy with some populations replaced.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::ZeroPopulation` if an override is zero.
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (Jurisdiction, u64)>,
    ) -> Result<Self, BudgetError> {
        for (jurisdiction, population) in overrides {
            if population == 0 {
                return Err(BudgetError::ZeroPopulation(jurisdiction));
            }
            tracing::debug!(%jurisdiction, population, "Population override applied");
            self.populations[jurisdiction.index()] = population;
        }
        Ok(self)
    }

    /// Population of `jurisdiction`.
    #[must_use]
    pub const fn get(&self, jurisdiction: Jurisdiction) -> u64 {
        self.populations[jurisdiction.index()]
    }

    /// Population of `jurisdiction` as a divisor.
    #[must_use]
    pub fn divisor(&self, jurisdiction: Jurisdiction) -> Decimal {
        Decimal::from(self.get(jurisdiction))
    }

    /// Number of jurisdictions in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.populations.len()
    }

    /// Returns false; a table always holds every jurisdiction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates `(jurisdiction, population)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Jurisdiction, u64)> + '_ {
        Jurisdiction::ALL.into_iter().map(|j| (j, self.get(j)))
    }
}

impl Default for PopulationTable {
    fn default() -> Self {
        let mut populations = [0u64; 9];
        for (jurisdiction, population) in DEFAULT_POPULATIONS {
            populations[jurisdiction.index()] = population;
        }
        Self { populations }
    }
}
