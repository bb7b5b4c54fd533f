//! Shop Session
//!
//! This example prices an order the way a shop owner would at the till:
//! a few line totals, a margin on one item, a discount on another, then a
//! grand total with VAT. The session is checkpointed halfway and resumed.
//!
//! Key concepts:
//! - Driving `Calculator` with key scripts
//! - Percent entry for margin and discount
//! - Checkpoint and resume of a session
//! - Rendering the display snapshot
//!
//! Run with: cargo run --example shop_session

use shopcalc::checkpoint::Checkpoint;
use shopcalc::script::{parse_line, Action};
use shopcalc::{Calculator, Settings};

fn run(calc: &mut Calculator, line: &str) {
    println!("> {line}");
    let actions = match parse_line(line) {
        Ok(actions) => actions,
        Err(err) => {
            println!("  error: {err}");
            return;
        }
    };

    for action in actions {
        match action {
            Action::Press(input) => {
                if let Err(err) = calc.press(input) {
                    println!("  error: {err}");
                }
            }
            Action::Delete(index) => {
                if let Some(entry) = calc.delete_history(index) {
                    println!("  removed '{}'", entry.label);
                }
            }
            Action::Quit => return,
        }
    }

    if let Some(result) = calc.session().result() {
        println!("  result = {result}");
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== Morning orders ===\n");

    let mut calc = Calculator::default();
    run(&mut calc, "12*3500=");
    run(&mut calc, "margin 20 Enter");
    run(&mut calc, "8*1200=");
    run(&mut calc, "discount 15 Enter");

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("till.json");
    calc.checkpoint().save(&path)?;
    println!("\n  [Checkpoint] Saved to {}", path.display());

    println!("\n=== Afternoon: resume and close the day ===\n");

    let mut calc = Calculator::resume(Checkpoint::load(&path)?, Settings::default());
    run(&mut calc, "4500=");
    run(&mut calc, "del 0");
    run(&mut calc, "sum-vat");

    println!("\n{}", calc.snapshot());
    Ok(())
}
