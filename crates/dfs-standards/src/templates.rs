//! Slot templates for the two contest formats.

use dfs_model::{Accepts, ContestMode, LineupState, Position, SlotKind, SlotSpec, SlotTemplate};

const QB: &[Position] = &[Position::Qb];
const RB: &[Position] = &[Position::Rb];
const WR: &[Position] = &[Position::Wr];
const TE: &[Position] = &[Position::Te];
const DST: &[Position] = &[Position::Dst];
const FLEX: &[Position] = &[Position::Rb, Position::Wr, Position::Te];

const CLASSIC_SLOTS: &[SlotSpec] = &[
    SlotSpec::new("QB", "QB", SlotKind::Dedicated, Accepts::Positions(QB)),
    SlotSpec::new("RB1", "RB", SlotKind::Dedicated, Accepts::Positions(RB)),
    SlotSpec::new("RB2", "RB", SlotKind::Dedicated, Accepts::Positions(RB)),
    SlotSpec::new("WR1", "WR", SlotKind::Dedicated, Accepts::Positions(WR)),
    SlotSpec::new("WR2", "WR", SlotKind::Dedicated, Accepts::Positions(WR)),
    SlotSpec::new("WR3", "WR", SlotKind::Dedicated, Accepts::Positions(WR)),
    SlotSpec::new("TE", "TE", SlotKind::Dedicated, Accepts::Positions(TE)),
    SlotSpec::new("FLEX", "FLEX", SlotKind::Flex, Accepts::Positions(FLEX)),
    SlotSpec::new("DST", "DST", SlotKind::Dedicated, Accepts::Positions(DST)),
];

const SHOWDOWN_SLOTS: &[SlotSpec] = &[
    SlotSpec::new("CPT", "CPT", SlotKind::Captain, Accepts::Any),
    SlotSpec::new("FLEX1", "FLEX", SlotKind::Flex, Accepts::Any),
    SlotSpec::new("FLEX2", "FLEX", SlotKind::Flex, Accepts::Any),
    SlotSpec::new("FLEX3", "FLEX", SlotKind::Flex, Accepts::Any),
    SlotSpec::new("FLEX4", "FLEX", SlotKind::Flex, Accepts::Any),
    SlotSpec::new("FLEX5", "FLEX", SlotKind::Flex, Accepts::Any),
];

/// QB, RB x2, WR x3, TE, FLEX (RB/WR/TE), DST.
pub const CLASSIC_TEMPLATE: SlotTemplate = SlotTemplate::new(CLASSIC_SLOTS);

/// Captain followed by five any-position flex slots.
pub const SHOWDOWN_TEMPLATE: SlotTemplate = SlotTemplate::new(SHOWDOWN_SLOTS);

pub fn template_for(mode: ContestMode) -> &'static SlotTemplate {
    match mode {
        ContestMode::Classic => &CLASSIC_TEMPLATE,
        ContestMode::Showdown => &SHOWDOWN_TEMPLATE,
    }
}

/// Fresh lineup for a contest mode, one empty slot per template slot.
pub fn empty_lineup(mode: ContestMode) -> LineupState {
    LineupState::empty(template_for(mode).len())
}

/// Classic position minimums, counted over dedicated slots only.
pub fn required_minimums() -> [(Position, usize); 5] {
    [
        (Position::Qb, 1),
        (Position::Rb, 2),
        (Position::Wr, 3),
        (Position::Te, 1),
        (Position::Dst, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_template_layout() {
        let keys: Vec<&str> = CLASSIC_TEMPLATE.iter().map(|slot| slot.key).collect();
        assert_eq!(
            keys,
            vec!["QB", "RB1", "RB2", "WR1", "WR2", "WR3", "TE", "FLEX", "DST"]
        );
        let flex = CLASSIC_TEMPLATE.get(7).unwrap();
        assert_eq!(flex.kind, SlotKind::Flex);
        assert!(flex.accepts.accepts(&Position::Te));
        assert!(!flex.accepts.accepts(&Position::Qb));
        assert!(!flex.accepts.accepts(&Position::Dst));
    }

    #[test]
    fn showdown_template_layout() {
        assert_eq!(SHOWDOWN_TEMPLATE.len(), 6);
        assert_eq!(SHOWDOWN_TEMPLATE.position_of(SlotKind::Captain), Some(0));
        assert_eq!(SHOWDOWN_TEMPLATE.indices_of(SlotKind::Flex).count(), 5);
        assert!(
            SHOWDOWN_TEMPLATE
                .iter()
                .all(|slot| slot.accepts == Accepts::Any)
        );
    }

    #[test]
    fn minimums_match_dedicated_slots() {
        for (position, minimum) in required_minimums() {
            let dedicated = CLASSIC_TEMPLATE
                .iter()
                .filter(|slot| slot.kind == SlotKind::Dedicated)
                .filter(|slot| slot.accepts.accepts(&position))
                .count();
            assert_eq!(dedicated, minimum, "{position}");
        }
    }

    #[test]
    fn empty_lineup_matches_template() {
        assert_eq!(empty_lineup(ContestMode::Classic).len(), 9);
        assert_eq!(empty_lineup(ContestMode::Showdown).len(), 6);
        assert_eq!(empty_lineup(ContestMode::Showdown).filled_count(), 0);
    }
}
