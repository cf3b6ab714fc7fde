//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format cell characters into a numbered grid with the given edge length.
/// `piece_iter` must yield exactly `edge_length * edge_length` items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    edge_length: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "\n ")?;
    for col in 0..edge_length {
        write!(f, " {}", col + 1)?;
    }

    for row in 0..edge_length {
        write!(f, "\n{}", row + 1)?;
        for _ in 0..edge_length {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }
    writeln!(f)?;

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
