/// json state - export a serializable view of the whole simulation
use bank_simulator_rs::{BankSimulator, Customer, Money, Rate, SimulatorView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut sim = BankSimulator::new(Customer::new("1020304050", "Ana Gómez")?);

    sim.deposit_checking(Money::from_major(250))?;
    sim.deposit_savings(Money::from_major(1_000))?;
    sim.open_term_deposit(Money::from_major(5_000), Rate::from_percentage(1))?;
    sim.advance_month();

    let view = SimulatorView::from_simulator(&sim);
    println!("{}", view.to_json_pretty()?);

    Ok(())
}
