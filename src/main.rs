use log::{error, info};
use number_guessing::{
    driver::{direct::DirectDriver, terminal::TerminalDriver, Driver},
    game::GameController,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let mut args = std::env::args().skip(1);
    let mut bot = false;
    let mut rounds = 1;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bot" => bot = true,
            "--rounds" => {
                rounds = args
                    .next()
                    .ok_or("--rounds needs a value")?
                    .parse::<u32>()?;
            }
            other => {
                error!("Unknown argument {:?}", other);
                return Err(format!("usage: main [--bot [--rounds N]], got {:?}", other).into());
            }
        }
    }

    if !bot {
        TerminalDriver::stdio(GameController::default()).play()?;
        return Ok(());
    }

    let mut total = 0;
    for round in 1..=rounds {
        let mut driver = DirectDriver::new(GameController::default());
        let view = driver.play()?;
        info!("Round {} won after {} misses", round, view.attempts);
        total += view.attempts;
    }
    println!("Bot won {} rounds with {} misses in total", rounds, total);

    Ok(())
}
