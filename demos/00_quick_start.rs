/// quick start - minimal example to get started
use bank_simulator_rs::{BankSimulator, Customer, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // one customer, three accounts, month 1
    let mut sim = BankSimulator::new(Customer::new("1020304050", "Ana Gómez")?);

    sim.deposit_checking(Money::from_major(500))?;
    sim.deposit_savings(Money::from_major(1_000))?;

    // step the simulation forward one month; savings accrue interest
    sim.advance_month();

    println!("{}", sim.month_summary());
    println!("\ntotal balance: ${}", sim.total_balance());

    Ok(())
}
