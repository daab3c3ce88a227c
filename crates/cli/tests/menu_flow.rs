//! Black-box menu flow tests: scripted input drives the full loop.

use std::io::Cursor;

use drinkbox_cli::menu::MainMenu;
use drinkbox_cli::seed;
use drinkbox_core::{ProductId, Yen};
use drinkbox_inventory::{DrinkRepository, StockEntry};
use drinkbox_machine::VendingMachine;
use drinkbox_payments::PrepaidCard;

fn run_default(script: &str) -> (MainMenu, String) {
    let machine = VendingMachine::new(DrinkRepository::new(seed::default_inventory()));
    run(machine, script)
}

fn run(machine: VendingMachine, script: &str) -> (MainMenu, String) {
    let mut menu = MainMenu::new(machine, PrepaidCard::new());
    let mut input = Cursor::new(script.to_string());
    let mut out = Vec::new();
    menu.run(&mut input, &mut out).expect("menu loop failed");
    (menu, String::from_utf8(out).expect("menu output is utf-8"))
}

#[test]
fn charge_purchase_sales_and_exit() {
    // charge 1000, buy product 1, show sales, confirmed exit.
    let script = "2\n1000\n\n5\n1\n\n7\n\n0\ny\n";
    let (menu, out) = run_default(script);

    assert!(out.contains("Charged ¥1000."));
    assert!(out.contains("Purchased Pepsi."));
    assert!(out.contains("Total sales: ¥150"));
    assert!(out.contains("Thank you, see you next time."));

    assert_eq!(menu.card().balance(), Yen::new(850));
    assert_eq!(menu.machine().total_sales(), Yen::new(150));
    assert_eq!(menu.purchases().len(), 1);
    assert_eq!(menu.purchases()[0].product_id, ProductId::new(1));
}

#[test]
fn cancelled_charge_leaves_no_trace() {
    // enter the charge dialog, cancel with an empty line, then exit.
    let script = "2\n\n0\ny\n";
    let (menu, out) = run_default(script);

    assert!(out.contains("Cancelled."));
    assert_eq!(menu.card().balance(), Yen::ZERO);
}

#[test]
fn invalid_menu_input_reprompts() {
    // non-integer, then out-of-range, then a valid choice.
    let script = "banana\n9\n1\n\n0\ny\n";
    let (_, out) = run_default(script);

    assert!(out.contains("Invalid input."));
    assert!(out.contains("Card balance: ¥0"));
}

#[test]
fn declined_exit_returns_to_menu() {
    let script = "0\nn\n0\ny\n";
    let (_, out) = run_default(script);

    // The first confirmation is declined; the menu comes back and the
    // second one terminates.
    assert_eq!(out.matches("Exit Drinkbox?").count(), 2);
    assert!(out.contains("Thank you, see you next time."));
}

#[test]
fn sold_out_purchase_refunds_the_card() {
    let sold_out = StockEntry::new(ProductId::new(1), "Pepsi", Yen::new(150), 0);
    let machine = VendingMachine::new(DrinkRepository::new([sold_out]));

    let script = "2\n1000\n\n5\n1\n\n0\ny\n";
    let (menu, out) = run(machine, script);

    assert!(out.contains("Pepsi is sold out"));
    assert_eq!(menu.card().balance(), Yen::new(1000));
    assert_eq!(menu.machine().total_sales(), Yen::ZERO);
    assert!(menu.purchases().is_empty());
}

#[test]
fn purchasable_list_is_empty_on_a_fresh_card() {
    let script = "4\n\n0\ny\n";
    let (_, out) = run_default(script);

    assert!(out.contains("No drinks can be purchased right now."));
}

#[test]
fn restock_flow_adds_units() {
    let script = "6\n1\n3\n\n0\ny\n";
    let (menu, out) = run_default(script);

    assert!(out.contains("Restocked Pepsi with 3 units."));
    assert_eq!(menu.machine().brands()[&ProductId::new(1)].on_hand(), 8);
}

#[test]
fn history_groups_purchases_by_product_id() {
    // buy product 1 twice and product 3 once, then show history.
    let script = "2\n1000\n\n5\n1\n\n5\n1\n\n5\n3\n\n8\n\n0\ny\n";
    let (menu, out) = run_default(script);

    assert!(out.contains("Purchased drinks (by product id)"));
    assert!(out.contains("1: Pepsi x2"));
    assert!(out.contains("3: Irohasu x1"));
    assert_eq!(menu.purchases().len(), 3);
}

#[test]
fn end_of_input_terminates_cleanly() {
    // Script ends mid-session; the loop must wind down without error.
    let script = "1\n";
    let (menu, out) = run_default(script);

    assert!(out.contains("Card balance: ¥0"));
    assert_eq!(menu.card().balance(), Yen::ZERO);
}
