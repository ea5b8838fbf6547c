// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a [`Table`], describing how a row is turned into a cell.
pub trait TableColumn<T> {
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table, with columns padded to the widest cell.
#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }

    fn widths(&self, cells: &[Vec<Cow<'a, str>>]) -> Vec<usize> {
        let mut widths = vec![0; self.columns.len()];
        for row in cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        widths: &[usize],
        row: impl Iterator<Item = (String, Option<Color>)>,
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, ((cell, color), col)) in row.zip(self.columns).enumerate() {
            let pad = widths[i].saturating_sub(cell.width());
            let cell = match col.padding_direction() {
                PaddingDirection::Left if i == last => cell,
                PaddingDirection::Left => format!("{cell}{}", " ".repeat(pad)),
                PaddingDirection::Right => format!("{}{cell}", " ".repeat(pad)),
            };
            match color {
                Some(color) => write!(f, "{}", cell.color(color))?,
                None => write!(f, "{cell}")?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let widths = self.widths(&cells);

        for (row, data) in cells.into_iter().zip(self.data) {
            let row = row
                .into_iter()
                .zip(self.columns)
                .map(|(cell, col)| (cell.into_owned(), col.get_color(data)));
            self.write_row(f, &widths, row)?;
        }
        Ok(())
    }
}
