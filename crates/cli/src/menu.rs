//! The interactive main menu.
//!
//! A single-threaded, blocking read-eval-print loop: render the card
//! balance and the numbered options, read one choice, dispatch, repeat
//! until a confirmed exit.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};

use drinkbox_core::{ProductId, Yen};
use drinkbox_inventory::{Drink, StockEntry};
use drinkbox_machine::VendingMachine;
use drinkbox_payments::PrepaidCard;

use crate::prompt::{self, Prompt};
use crate::style;

const APP_NAME: &str = "Drinkbox";
const CANCEL_GUIDE: &str = "(press Enter or q to cancel)";
const RETURN_PROMPT: &str = "Press Enter to return ";
const MSG_CANCELLED: &str = "Cancelled.";

/// One successful purchase, as remembered by the menu.
///
/// The log is append-only; records are never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub product_id: ProductId,
    pub drink: Drink,
    pub purchased_at: DateTime<Utc>,
}

/// What a handler did, deciding the post-action flow.
enum Outcome {
    /// Ran to completion; pause before redrawing the menu.
    Done,
    /// The user backed out; no state changed.
    Cancelled,
    /// Confirmed exit.
    Quit,
}

/// The menu controller: dispatches numbered choices to the vending service
/// and the card, and renders results.
pub struct MainMenu {
    machine: VendingMachine,
    card: PrepaidCard,
    purchases: Vec<PurchaseRecord>,
    running: bool,
}

impl MainMenu {
    pub fn new(machine: VendingMachine, card: PrepaidCard) -> Self {
        Self {
            machine,
            card,
            purchases: Vec::new(),
            running: true,
        }
    }

    pub fn card(&self) -> &PrepaidCard {
        &self.card
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    /// Purchase history in insertion order.
    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    /// Run the menu loop until a confirmed exit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", style::RULE_HEAVY)?;
        writeln!(out, "{APP_NAME} vending machine simulator")?;
        writeln!(out, "{}", style::RULE_HEAVY)?;
        writeln!(out)?;

        while self.running {
            match self.step(input, out) {
                Ok(()) => {}
                // Closed stdin: nothing more will arrive, leave quietly.
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn step<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        self.render_menu(out)?;

        let choice = match prompt::read_parsed::<u32, _, _>(input, out, |n| *n <= 8)? {
            Prompt::Value(n) => n,
            Prompt::Cancelled => {
                style::rule(out)?;
                return Ok(());
            }
        };
        writeln!(out)?;

        let outcome = match choice {
            1 => self.show_balance(out)?,
            2 => self.charge(input, out)?,
            3 => self.show_all_drinks(out)?,
            4 => self.show_purchasable_drinks(out)?,
            5 => self.purchase(input, out)?,
            6 => self.restock(input, out)?,
            7 => self.show_sales(out)?,
            8 => self.show_history(out)?,
            _ => self.confirm_exit(input, out)?,
        };

        match outcome {
            Outcome::Quit => self.running = false,
            Outcome::Cancelled => {
                writeln!(out)?;
                writeln!(out, "{MSG_CANCELLED}")?;
                style::rule(out)?;
                writeln!(out)?;
            }
            Outcome::Done => {
                writeln!(out)?;
                write!(out, "{RETURN_PROMPT}")?;
                out.flush()?;
                wait_for_enter(input)?;
                style::rule(out)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn render_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "[{APP_NAME} menu]  card balance: {}",
            self.card.balance()
        )?;
        writeln!(out)?;
        writeln!(out, "1: Show card balance")?;
        writeln!(out, "2: Charge the card")?;
        writeln!(out, "3: List all drinks")?;
        writeln!(out, "4: List purchasable drinks")?;
        writeln!(out, "5: Purchase a drink")?;
        writeln!(out, "6: Restock a drink")?;
        writeln!(out, "7: Show total sales")?;
        writeln!(out, "8: Show purchase history")?;
        writeln!(out, "0: Exit")?;
        writeln!(out)?;
        writeln!(out, "Enter the number of the function to use.")?;
        Ok(())
    }

    fn show_balance<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        self.print_balance(out)?;
        Ok(Outcome::Done)
    }

    fn print_balance<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Card balance: {}", self.card.balance())
    }

    fn charge<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Outcome> {
        let headroom = PrepaidCard::MAX_BALANCE.saturating_sub(self.card.balance());
        writeln!(out, "Enter the amount to charge.")?;
        writeln!(
            out,
            "Charges from {} up to {} are accepted.",
            PrepaidCard::MIN_CHARGE,
            headroom
        )?;
        writeln!(out, "{CANCEL_GUIDE}")?;

        let amount = match prompt::read_parsed::<u32, _, _>(input, out, |n| *n > 0)? {
            Prompt::Value(n) => Yen::new(n),
            Prompt::Cancelled => return Ok(Outcome::Cancelled),
        };

        writeln!(out)?;
        match self.card.charge(amount) {
            Ok(()) => {
                writeln!(out, "Charged {amount}.")?;
                self.print_balance(out)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(Outcome::Done)
    }

    fn show_all_drinks<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        writeln!(out, "All drinks")?;
        render_catalog(out, &self.machine.brands())?;
        Ok(Outcome::Done)
    }

    fn show_purchasable_drinks<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        let available = self.machine.available_brands(&self.card);
        if available.is_empty() {
            writeln!(out, "No drinks can be purchased right now.")?;
        } else {
            writeln!(out, "Purchasable drinks")?;
            render_catalog(out, &available)?;
        }
        Ok(Outcome::Done)
    }

    fn purchase<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Outcome> {
        render_catalog(out, &self.machine.brands())?;
        writeln!(out)?;
        writeln!(out, "Enter the number of the drink to purchase.")?;
        writeln!(out, "{CANCEL_GUIDE}")?;

        let product_id =
            match prompt::read_parsed::<ProductId, _, _>(input, out, |id| id.get() > 0)? {
                Prompt::Value(id) => id,
                Prompt::Cancelled => return Ok(Outcome::Cancelled),
            };

        writeln!(out)?;
        match self.machine.vend(product_id, &mut self.card) {
            Ok((product_id, drink)) => {
                writeln!(out, "Purchased {}.", drink.brand())?;
                self.purchases.push(PurchaseRecord {
                    product_id,
                    drink,
                    purchased_at: Utc::now(),
                });
                self.print_balance(out)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(Outcome::Done)
    }

    fn restock<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<Outcome> {
        writeln!(out, "Enter the number of the drink to restock.")?;
        writeln!(out, "{CANCEL_GUIDE}")?;
        writeln!(out)?;
        render_catalog(out, &self.machine.brands())?;

        let product_id =
            match prompt::read_parsed::<ProductId, _, _>(input, out, |id| id.get() > 0)? {
                Prompt::Value(id) => id,
                Prompt::Cancelled => return Ok(Outcome::Cancelled),
            };

        writeln!(out)?;
        writeln!(out, "Enter how many units to add.")?;
        writeln!(out, "{CANCEL_GUIDE}")?;
        let quantity = match prompt::read_parsed::<NonZeroU32, _, _>(input, out, |_| true)? {
            Prompt::Value(q) => q,
            Prompt::Cancelled => return Ok(Outcome::Cancelled),
        };

        writeln!(out)?;
        match self.machine.restock(product_id, quantity) {
            Ok(()) => {
                if let Some(entry) = self.machine.brands().get(&product_id) {
                    writeln!(out, "Restocked {} with {} units.", entry.brand(), quantity)?;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(Outcome::Done)
    }

    fn show_sales<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        writeln!(out, "Total sales: {}", self.machine.total_sales())?;
        Ok(Outcome::Done)
    }

    fn show_history<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        if self.purchases.is_empty() {
            writeln!(out, "No purchases yet.")?;
            return Ok(Outcome::Done);
        }

        writeln!(out, "Purchased drinks (by product id)")?;
        let mut counts: BTreeMap<ProductId, (&str, u32)> = BTreeMap::new();
        for record in &self.purchases {
            counts
                .entry(record.product_id)
                .and_modify(|(_, n)| *n += 1)
                .or_insert((record.drink.brand(), 1));
        }
        for (product_id, (brand, count)) in counts {
            writeln!(out, "{product_id}: {brand} x{count}")?;
        }
        Ok(Outcome::Done)
    }

    fn confirm_exit<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Outcome> {
        writeln!(out, "Exit {APP_NAME}?")?;
        writeln!(out, "Confirm with y; anything else returns to the menu.")?;
        if prompt::read_yes(input, out)? {
            writeln!(out)?;
            writeln!(out, "Thank you, see you next time.")?;
            Ok(Outcome::Quit)
        } else {
            Ok(Outcome::Cancelled)
        }
    }
}

fn render_catalog<W: Write>(
    out: &mut W,
    catalog: &BTreeMap<ProductId, StockEntry>,
) -> io::Result<()> {
    for (product_id, entry) in catalog {
        writeln!(
            out,
            "[{product_id}] {}: {} / {} in stock",
            entry.brand(),
            entry.price(),
            entry.on_hand()
        )?;
    }
    Ok(())
}

fn wait_for_enter<R: BufRead>(input: &mut R) -> io::Result<()> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(())
}
