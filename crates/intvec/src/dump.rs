// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Delimiter-bracketed dump format.
//!
//! ```text
//! --------------------------------------------------------------------------------
//! <value_0>
//! ...
//! <value_n-1>
//! --------------------------------------------------------------------------------
//!
//! ```
//!
//! An empty sequence renders as nothing at all.

use core::fmt;

use crate::int_vector::IntVector;

/// The 80-character line written before and after the values.
pub const DELIMITER: &str =
    "--------------------------------------------------------------------------------";

/// `Display` adapter rendering a slice of integers in the dump format.
///
/// # Example
///
/// ```rust
/// use intvec::{DELIMITER, Dump};
///
/// let rendered = Dump(&[5, -1, 7]).to_string();
/// assert_eq!(rendered, format!("{DELIMITER}\n5\n-1\n7\n{DELIMITER}\n\n"));
///
/// assert!(Dump(&[]).to_string().is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a>(pub &'a [i32]);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        writeln!(f, "{DELIMITER}")?;

        for value in self.0 {
            writeln!(f, "{value}")?;
        }

        writeln!(f, "{DELIMITER}")?;
        writeln!(f)
    }
}

#[cfg(any(test, feature = "std"))]
impl Dump<'_> {
    /// Writes the dump to standard output.
    pub fn print(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();

        self.print_to(&mut lock)
    }

    /// Writes the dump to `out`. Writes nothing for an empty slice.
    pub fn print_to<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write + ?Sized,
    {
        if self.0.is_empty() {
            return Ok(());
        }

        write!(out, "{self}")
    }
}

impl IntVector {
    /// Returns a `Display` adapter over the current contents.
    pub fn dump(&self) -> Dump<'_> {
        Dump(self.as_slice())
    }

    /// Writes the vector to standard output in the dump format.
    ///
    /// Does nothing for an empty vector.
    #[cfg(any(test, feature = "std"))]
    pub fn print(&self) -> std::io::Result<()> {
        self.dump().print()
    }

    /// Writes the vector to `out` in the dump format.
    ///
    /// Does nothing for an empty vector: not even the delimiters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intvec::IntVector;
    ///
    /// fn example() -> Result<(), Box<dyn std::error::Error>> {
    ///     let mut vec = IntVector::new();
    ///     let mut out = Vec::new();
    ///
    ///     vec.print_to(&mut out)?;
    ///     assert!(out.is_empty());
    ///
    ///     vec.push(42)?;
    ///     vec.print_to(&mut out)?;
    ///     assert!(String::from_utf8(out)?.contains("\n42\n"));
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    #[cfg(any(test, feature = "std"))]
    pub fn print_to<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write + ?Sized,
    {
        self.dump().print_to(out)
    }
}

impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dump(), f)
    }
}
