use std::io;

use anyhow::Result;
use tracing::info;

use drinkbox_cli::menu::MainMenu;
use drinkbox_cli::seed;
use drinkbox_inventory::DrinkRepository;
use drinkbox_machine::VendingMachine;
use drinkbox_payments::PrepaidCard;

fn main() -> Result<()> {
    drinkbox_observability::init();

    let inventory = seed::initial_inventory()?;
    info!(products = inventory.len(), "catalog seeded");

    let machine = VendingMachine::new(DrinkRepository::new(inventory));
    let card = PrepaidCard::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = MainMenu::new(machine, card);
    menu.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
