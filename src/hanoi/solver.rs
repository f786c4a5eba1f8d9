//! Recursive transfer of disk stacks between pegs.
use crate::error::ToolError;

use super::towers::{Move, Peg, Towers};

/// Number of moves needed to transfer `disks` disks: `2^disks - 1`.
#[must_use]
pub fn total_moves(disks: u32) -> u128 {
    if disks >= u128::BITS {
        return u128::MAX;
    }
    (1u128 << disks) - 1
}

/// Move the top `count` disks of `source` onto `destination`, using
/// `auxiliary` as scratch space.
///
/// `on_move` sees every applied move together with the resulting state; it
/// cannot influence the move sequence. Returns the number of moves applied,
/// always `2^count - 1`.
///
/// The whole transfer is checked before the first move, so an invalid
/// request never leaves the towers half-moved.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] if `count` is zero, the pegs are not
/// distinct, `source` holds fewer than `count` disks, or the moving stack is
/// not smaller than the tops of the other two pegs.
pub fn transfer<F>(
    count: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    towers: &mut Towers,
    on_move: &mut F,
) -> Result<u64, ToolError>
where
    F: FnMut(Move, &Towers),
{
    check_transfer(count, source, destination, auxiliary, towers)?;
    let mut moves = 0u64;
    transfer_unchecked(
        count,
        source,
        destination,
        auxiliary,
        towers,
        on_move,
        &mut moves,
    )?;
    Ok(moves)
}

/// Solve the puzzle for `disks` disks, moving the full stack from A to C.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] if `disks` is zero or too large.
pub fn solve<F>(disks: u32, on_move: &mut F) -> Result<Towers, ToolError>
where
    F: FnMut(Move, &Towers),
{
    let mut towers = Towers::new(disks)?;
    transfer(disks, Peg::A, Peg::C, Peg::B, &mut towers, on_move)?;
    Ok(towers)
}

fn check_transfer(
    count: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    towers: &Towers,
) -> Result<(), ToolError> {
    if count < 1 {
        return Err(ToolError::invalid_input(
            "Number of disks must be at least 1",
        ));
    }
    if source == destination || source == auxiliary || destination == auxiliary {
        return Err(ToolError::invalid_input(format!(
            "source, destination and auxiliary must be distinct pegs (got {source}, {destination}, {auxiliary})"
        )));
    }
    let stack = towers.peg(source);
    let available = stack.len();
    let count_usize = usize::try_from(count).unwrap_or(usize::MAX);
    let Some(bottom) = available
        .checked_sub(count_usize)
        .and_then(|i| stack.get(i))
        .copied()
    else {
        return Err(ToolError::invalid_input(format!(
            "peg {source} holds {available} disks, cannot transfer {count}"
        )));
    };
    for other in [destination, auxiliary] {
        if let Some(top) = towers.top(other)
            && top < bottom
        {
            return Err(ToolError::invalid_input(format!(
                "disk {bottom} on peg {source} is larger than disk {top} on peg {other}"
            )));
        }
    }
    Ok(())
}

fn transfer_unchecked<F>(
    count: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    towers: &mut Towers,
    on_move: &mut F,
    moves: &mut u64,
) -> Result<(), ToolError>
where
    F: FnMut(Move, &Towers),
{
    if count > 1 {
        transfer_unchecked(
            count - 1,
            source,
            auxiliary,
            destination,
            towers,
            on_move,
            moves,
        )?;
    }
    let disk = towers.move_disk(source, destination)?;
    *moves += 1;
    on_move(
        Move {
            disk,
            from: source,
            to: destination,
        },
        towers,
    );
    if count > 1 {
        transfer_unchecked(
            count - 1,
            auxiliary,
            destination,
            source,
            towers,
            on_move,
            moves,
        )?;
    }
    Ok(())
}
