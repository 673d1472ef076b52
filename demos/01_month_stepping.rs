/// month stepping - savings interest accrual and balance history
use bank_simulator_rs::{BankSimulator, Customer, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut sim = BankSimulator::new(Customer::new("79845123", "Luis Rojas")?);

    sim.deposit_savings(Money::from_major(1_000))?;

    // run the simulation for half a year
    for _ in 0..6 {
        sim.advance_month();
    }

    println!("month {} reached", sim.current_month());
    println!("savings balance: ${}", sim.savings().balance());

    println!("\nrecorded close-of-month balances:");
    for (i, balance) in sim.savings().history().iter().enumerate() {
        println!("  month {}: ${}", i + 1, balance);
    }

    // projected average over the next year, starting from the live balance
    let average = sim.average_savings_balance(sim.current_month() + 11)?;
    println!("\nprojected 12-month average balance: ${}", average);

    Ok(())
}
