use thiserror::Error;

use crate::Cell;

/// An elementary cellular automaton rule, derived from its Wolfram code.
///
/// # Representation
/// The table holds the output bit for each of the 8 neighbor configurations,
/// in decreasing significance order:
/// ```notrust
/// configuration: 111 110 101 100 011 010 001 000
/// entry index:     0   1   2   3   4   5   6   7
/// ```
/// Entry `i` is bit `7 - i` of the rule number, so rule 170 yields
/// `[1, 0, 1, 0, 1, 0, 1, 0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rule: u8,
    entries: [Cell; 8],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("invalid neighbor configuration {0:?}, cells must be 0 or 1")]
    InvalidConfiguration([Cell; 3]),
}

impl RuleTable {
    pub const fn new(rule: u8) -> Self {
        let mut entries = [0; 8];

        let mut i = 0;
        while i < 8 {
            entries[i] = (rule >> (7 - i)) & 1;
            i += 1;
        }

        Self { rule, entries }
    }

    /// The Wolfram code this table was built from.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    pub fn entries(&self) -> &[Cell; 8] {
        &self.entries
    }

    /// Next state of the center cell for the `(left, center, right)`
    /// configuration.
    ///
    /// The configuration is read as a 3-bit number and indexes the table
    /// directly. Any component outside `{0, 1}` is a caller bug; there is no
    /// safe fallback state, so it surfaces as an error instead of a wrong
    /// cell value.
    pub fn transition(&self, config: [Cell; 3]) -> Result<Cell, TransitionError> {
        let [left, center, right] = config;

        if left > 1 || center > 1 || right > 1 {
            return Err(TransitionError::InvalidConfiguration(config));
        }

        let index = (left << 2 | center << 1 | right) as usize;

        Ok(self.entries[7 - index])
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::RuleTable;
    use super::TransitionError;

    #[test]
    fn rule_170_is_the_shift_rule() {
        let table = RuleTable::new(170);

        assert_eq!(table.entries(), &[1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn valid_configurations_map_to_their_entries() {
        // Rule 30: only 100, 011, 010 and 001 produce a live cell.
        let table = RuleTable::new(30);

        assert_eq!(table.transition([1, 1, 1]), Ok(0));
        assert_eq!(table.transition([1, 1, 0]), Ok(0));
        assert_eq!(table.transition([1, 0, 1]), Ok(0));
        assert_eq!(table.transition([1, 0, 0]), Ok(1));
        assert_eq!(table.transition([0, 1, 1]), Ok(1));
        assert_eq!(table.transition([0, 1, 0]), Ok(1));
        assert_eq!(table.transition([0, 0, 1]), Ok(1));
        assert_eq!(table.transition([0, 0, 0]), Ok(0));
    }

    #[test]
    fn malformed_configuration_is_rejected() {
        let table = RuleTable::new(30);

        assert_eq!(
            table.transition([1, 1, 2]),
            Err(TransitionError::InvalidConfiguration([1, 1, 2]))
        );
    }

    proptest! {
        #[test]
        fn table_is_the_big_endian_bit_expansion(rule in any::<u8>()) {
            let table = RuleTable::new(rule);

            let mut reassembled: u8 = 0;
            for &entry in table.entries() {
                prop_assert!(entry <= 1);
                reassembled = reassembled << 1 | entry;
            }

            prop_assert_eq!(reassembled, rule);
            prop_assert_eq!(table.rule(), rule);
        }

        #[test]
        fn every_configuration_indexes_its_entry(rule in any::<u8>(), index in 0u8..8) {
            let table = RuleTable::new(rule);
            let config = [index >> 2 & 1, index >> 1 & 1, index & 1];

            prop_assert_eq!(
                table.transition(config),
                Ok(table.entries()[7 - index as usize])
            );
        }
    }
}
