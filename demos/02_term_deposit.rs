/// term deposit lifecycle - open, value growth, close-and-credit
use bank_simulator_rs::{BankSimulator, Customer, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut sim = BankSimulator::new(Customer::new("52789456", "María Pardo")?);

    // invest $5,000 at 1% monthly, simple interest
    sim.open_term_deposit(Money::from_major(5_000), Rate::from_percentage(1))?;

    for _ in 0..3 {
        sim.advance_month();
        println!(
            "month {}: deposit worth ${}",
            sim.current_month(),
            sim.term_deposit().present_value(sim.current_month())
        );
    }

    // close the deposit; the proceeds land in checking
    let value = sim.close_term_deposit();
    println!("\nclosed for ${}", value);
    println!("checking balance: ${}", sim.checking().balance());
    println!("deposit open: {}", sim.term_deposit().is_open());

    Ok(())
}
