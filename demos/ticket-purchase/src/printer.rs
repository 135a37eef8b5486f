//! Fixed-layout purchase summaries.
//!
//! [`SummaryPrinter`] holds no state; it formats a purchase together with the
//! already-joined description of its products:
//!
//! ```text
//! Cliente: Juan
//! Película: John Wick
//! Sala de Cine: 1
//! Asiento: C2
//! Aperitivos Gratis: Canguil, Hot-dog, Bebidas
//! Productos Comestibles: Canguil con: Bebida con: Postre
//! ```

use crate::purchase::Purchase;
use std::io::{self, Write};

/// Renders purchase summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryPrinter;

impl SummaryPrinter {
    /// Formats the summary block.
    #[must_use]
    pub fn render(purchase: &Purchase, products_description: &str) -> String {
        let hall = purchase.hall();
        format!(
            "Cliente: {}\n\
             Película: {}\n\
             Sala de Cine: {}\n\
             Asiento: {}\n\
             Aperitivos Gratis: {}\n\
             Productos Comestibles: {}\n",
            purchase.customer().name(),
            purchase.movie().title(),
            hall.number(),
            purchase.seat(),
            hall.free_snacks().join(", "),
            products_description,
        )
    }

    /// Writes the summary block surrounded by blank lines.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_to<W: Write>(
        out: &mut W,
        purchase: &Purchase,
        products_description: &str,
    ) -> io::Result<()> {
        writeln!(out)?;
        out.write_all(Self::render(purchase, products_description).as_bytes())?;
        writeln!(out)
    }

    /// Prints the summary block to stdout.
    ///
    /// Write errors are logged, not propagated. Use [`Self::write_to`] to
    /// handle them.
    pub fn print(purchase: &Purchase, products_description: &str) {
        if let Err(error) = Self::write_to(&mut io::stdout().lock(), purchase, products_description) {
            tracing::error!(error = %error, "Failed to print purchase summary");
        }
    }
}
