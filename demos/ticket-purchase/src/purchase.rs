//! Purchase records.
//!
//! A [`Purchase`] ties a customer, a movie, a hall, the assigned seat and the
//! food bought with the ticket. It also carries a notification channel so
//! callers can attach listeners to it; nothing in the purchase flow
//! broadcasts on that channel.

use crate::hall::Hall;
use crate::printer::SummaryPrinter;
use crate::types::{Customer, Movie, PurchaseAction, SeatAssignment};
use chrono::{DateTime, Utc};
use cinema_core::channel::{NotificationChannel, SharedListener, SubscriptionId};
use cinema_core::combo::{EXTRAS_SEPARATOR, FoodItem};
use cinema_core::describable::Describable;
use cinema_core::environment::Clock;
use std::io::{self, Write};

/// Listener type accepted by a purchase.
pub type PurchaseListener = SharedListener<PurchaseAction, Purchase>;

/// A completed ticket purchase.
#[derive(Clone, Debug)]
pub struct Purchase {
    customer: Customer,
    movie: Movie,
    hall: Hall,
    seat: SeatAssignment,
    items: Vec<FoodItem>,
    purchased_at: DateTime<Utc>,
    listeners: NotificationChannel<PurchaseAction, Purchase>,
}

impl Purchase {
    /// Records a purchase for an already assigned seat.
    ///
    /// The hall is copied as it is now; later seat assignments do not show up
    /// in this record.
    #[must_use]
    pub fn new(
        customer: Customer,
        movie: Movie,
        hall: &Hall,
        seat: SeatAssignment,
        items: Vec<FoodItem>,
        clock: &dyn Clock,
    ) -> Self {
        let purchase = Self {
            customer,
            movie,
            hall: hall.clone(),
            seat,
            items,
            purchased_at: clock.now(),
            listeners: NotificationChannel::new(),
        };
        tracing::info!(
            customer = purchase.customer.name(),
            movie = purchase.movie.title(),
            hall = %purchase.hall.number(),
            seat = %purchase.seat,
            items = purchase.items.len(),
            "Purchase recorded"
        );
        purchase
    }

    /// Takes the next seat from `hall` and records the purchase.
    #[must_use]
    pub fn book(
        customer: Customer,
        movie: Movie,
        hall: &mut Hall,
        items: Vec<FoodItem>,
        clock: &dyn Clock,
    ) -> Self {
        let seat = hall.pop_seat();
        Self::new(customer, movie, hall, seat, items, clock)
    }

    /// The buyer
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// The movie the ticket is for
    #[must_use]
    pub const fn movie(&self) -> &Movie {
        &self.movie
    }

    /// The hall as it was when the purchase was recorded
    #[must_use]
    pub const fn hall(&self) -> &Hall {
        &self.hall
    }

    /// The seat handed out, or [`SeatAssignment::Unavailable`]
    #[must_use]
    pub const fn seat(&self) -> &SeatAssignment {
        &self.seat
    }

    /// Food bought with the ticket, in order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// When the purchase was recorded.
    ///
    /// Kept as data only; the printed summary does not show it.
    #[must_use]
    pub const fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    /// Descriptions of all purchased items joined with `", "`.
    #[must_use]
    pub fn products_description(&self) -> String {
        self.items
            .iter()
            .map(Describable::description)
            .collect::<Vec<_>>()
            .join(EXTRAS_SEPARATOR)
    }

    /// The summary block as text.
    #[must_use]
    pub fn render_summary(&self) -> String {
        SummaryPrinter::render(self, &self.products_description())
    }

    /// Writes the summary block to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        SummaryPrinter::write_to(out, self, &self.products_description())
    }

    /// Prints the summary block to stdout.
    ///
    /// Write errors are logged, not propagated. Use [`Self::write_summary`]
    /// to handle them.
    pub fn show_summary(&self) {
        SummaryPrinter::print(self, &self.products_description());
    }

    /// Attaches a listener to this purchase.
    pub fn subscribe(&mut self, listener: PurchaseListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Detaches a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of listeners attached to this purchase.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
