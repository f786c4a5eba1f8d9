//! Peg/disk state and the move validator.
use std::fmt;

use serde::Serialize;

use crate::error::{MoveError, ToolError};

/// Largest disk count accepted by [`Towers::new`]; `2^64 - 1` moves is
/// already far beyond anything that finishes.
pub const MAX_DISKS: u32 = 64;

/// One of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Peg {
    /// Starting peg.
    A,
    /// Auxiliary peg.
    B,
    /// Target peg.
    C,
}

impl Peg {
    /// All pegs in display order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}

/// A single applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    /// Size of the disk that moved.
    pub disk: u32,
    /// Peg the disk left.
    pub from: Peg,
    /// Peg the disk landed on.
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from {} to {}",
            self.disk, self.from, self.to
        )
    }
}

/// Three pegs, each a stack of disk sizes with the top at the end.
///
/// Every stack is strictly decreasing from bottom to top; no public method
/// can leave the towers in a state that breaks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<u32>; 3],
}

impl Towers {
    /// All `disks` on peg A, largest at the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] if `disks` is zero or above
    /// [`MAX_DISKS`].
    pub fn new(disks: u32) -> Result<Self, ToolError> {
        if disks < 1 {
            return Err(ToolError::invalid_input(
                "Number of disks must be at least 1",
            ));
        }
        if disks > MAX_DISKS {
            return Err(ToolError::invalid_input(format!(
                "Number of disks must be at most {MAX_DISKS}"
            )));
        }
        Ok(Self {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
        })
    }

    /// Build an arbitrary state from bottom-to-top stacks for A, B and C.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] if a stack is not strictly
    /// decreasing, contains a zero-sized disk, or a disk appears twice.
    pub fn from_pegs(a: Vec<u32>, b: Vec<u32>, c: Vec<u32>) -> Result<Self, ToolError> {
        let pegs = [a, b, c];
        for (peg, stack) in Peg::ALL.iter().zip(&pegs) {
            if stack.contains(&0) {
                return Err(ToolError::invalid_input(format!(
                    "peg {peg} holds a disk of size 0"
                )));
            }
            if stack.windows(2).any(|w| matches!(w, [below, above] if below <= above)) {
                return Err(ToolError::invalid_input(format!(
                    "peg {peg} is not strictly decreasing from bottom to top"
                )));
            }
        }
        let mut all: Vec<u32> = pegs.iter().flatten().copied().collect();
        all.sort_unstable();
        if all.windows(2).any(|w| matches!(w, [x, y] if x == y)) {
            return Err(ToolError::invalid_input("a disk size appears more than once"));
        }
        Ok(Self { pegs })
    }

    /// Disks on `peg`, bottom first.
    #[must_use]
    pub fn peg(&self, peg: Peg) -> &[u32] {
        self.stack(peg)
    }

    /// Top disk of `peg`, if any.
    #[must_use]
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.stack(peg).last().copied()
    }

    /// Total number of disks across all pegs.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// `true` when every disk sits on `target`.
    #[must_use]
    pub fn is_solved(&self, target: Peg) -> bool {
        self.stack(target).len() == self.disk_count()
    }

    /// Move the top disk of `source` onto `destination`.
    ///
    /// Returns the size of the disk moved. State is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptySource`] if `source` is empty and
    /// [`MoveError::SizeViolation`] if the top of `destination` is smaller
    /// than the disk being moved.
    pub fn move_disk(&mut self, source: Peg, destination: Peg) -> Result<u32, MoveError> {
        let disk = self
            .top(source)
            .ok_or(MoveError::EmptySource { peg: source })?;
        if let Some(onto) = self.top(destination)
            && onto <= disk
        {
            return Err(MoveError::SizeViolation {
                disk,
                onto,
                peg: destination,
            });
        }
        self.stack_mut(source).pop();
        self.stack_mut(destination).push(disk);
        Ok(disk)
    }

    fn stack(&self, peg: Peg) -> &[u32] {
        let [a, b, c] = &self.pegs;
        match peg {
            Peg::A => a,
            Peg::B => b,
            Peg::C => c,
        }
    }

    fn stack_mut(&mut self, peg: Peg) -> &mut Vec<u32> {
        let [a, b, c] = &mut self.pegs;
        match peg {
            Peg::A => a,
            Peg::B => b,
            Peg::C => c,
        }
    }
}

impl fmt::Display for Towers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Peg::ALL
            .iter()
            .map(|peg| format!("{peg}: {:?}", self.stack(*peg)))
            .collect();
        f.write_str(&parts.join("  "))
    }
}

impl Serialize for Towers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;
        let mut map = serializer.serialize_map(Some(Peg::ALL.len()))?;
        for peg in Peg::ALL {
            map.serialize_entry(&peg, self.stack(peg))?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn new_stacks_all_disks_on_a() {
        let towers = Towers::new(3).unwrap();
        assert_eq!(towers.peg(Peg::A), &[3, 2, 1]);
        assert!(towers.peg(Peg::B).is_empty());
        assert!(towers.peg(Peg::C).is_empty());
        assert_eq!(towers.disk_count(), 3);
    }

    #[test]
    fn new_rejects_zero_disks() {
        let err = Towers::new(0).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn new_rejects_too_many_disks() {
        assert!(Towers::new(MAX_DISKS).is_ok());
        assert!(matches!(
            Towers::new(MAX_DISKS + 1),
            Err(ToolError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_pegs_rejects_increasing_stack() {
        let err = Towers::from_pegs(vec![1, 2], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("peg A"));
    }

    #[test]
    fn from_pegs_rejects_duplicate_disk() {
        assert!(Towers::from_pegs(vec![2], vec![2], vec![]).is_err());
    }

    #[test]
    fn from_pegs_rejects_zero_disk() {
        assert!(Towers::from_pegs(vec![], vec![], vec![1, 0]).is_err());
    }

    #[test]
    fn move_onto_empty_peg() {
        let mut towers = Towers::new(2).unwrap();
        assert_eq!(towers.move_disk(Peg::A, Peg::B).unwrap(), 1);
        assert_eq!(towers.peg(Peg::A), &[2]);
        assert_eq!(towers.peg(Peg::B), &[1]);
    }

    #[test]
    fn move_onto_larger_disk() {
        let mut towers = Towers::from_pegs(vec![1], vec![3], vec![]).unwrap();
        assert_eq!(towers.move_disk(Peg::A, Peg::B).unwrap(), 1);
        assert_eq!(towers.peg(Peg::B), &[3, 1]);
    }

    #[test]
    fn move_from_empty_peg_fails_without_mutation() {
        let mut towers = Towers::new(2).unwrap();
        let before = towers.clone();
        let err = towers.move_disk(Peg::C, Peg::A).unwrap_err();
        assert_eq!(err, MoveError::EmptySource { peg: Peg::C });
        assert_eq!(towers, before);
    }

    #[test]
    fn move_larger_onto_smaller_fails_without_mutation() {
        let mut towers = Towers::from_pegs(vec![3], vec![1], vec![]).unwrap();
        let before = towers.clone();
        let err = towers.move_disk(Peg::A, Peg::B).unwrap_err();
        assert_eq!(
            err,
            MoveError::SizeViolation {
                disk: 3,
                onto: 1,
                peg: Peg::B
            }
        );
        assert_eq!(towers, before);
    }

    #[test]
    fn move_to_same_peg_is_a_size_violation() {
        let mut towers = Towers::new(1).unwrap();
        assert!(matches!(
            towers.move_disk(Peg::A, Peg::A),
            Err(MoveError::SizeViolation { .. })
        ));
        assert_eq!(towers.peg(Peg::A), &[1]);
    }

    #[test]
    fn is_solved_only_when_all_on_target() {
        let solved = Towers::from_pegs(vec![], vec![], vec![2, 1]).unwrap();
        assert!(solved.is_solved(Peg::C));
        assert!(!solved.is_solved(Peg::A));
        let partial = Towers::from_pegs(vec![], vec![1], vec![2]).unwrap();
        assert!(!partial.is_solved(Peg::C));
    }

    #[test]
    fn display_lists_each_peg() {
        let towers = Towers::new(3).unwrap();
        assert_eq!(towers.to_string(), "A: [3, 2, 1]  B: []  C: []");
    }

    #[test]
    fn move_display() {
        let mv = Move {
            disk: 1,
            from: Peg::A,
            to: Peg::C,
        };
        assert_eq!(mv.to_string(), "Move disk 1 from A to C");
    }

    #[test]
    fn towers_serialize_as_peg_map() {
        let towers = Towers::from_pegs(vec![], vec![], vec![2, 1]).unwrap();
        let json = serde_json::to_string(&towers).unwrap();
        assert_eq!(json, r#"{"A":[],"B":[],"C":[2,1]}"#);
    }
}
