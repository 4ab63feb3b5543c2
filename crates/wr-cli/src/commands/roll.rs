use wr_core::roll_once;

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut rng = super::config_for(seed).rng();
    let outcome = roll_once(&mut rng).map_err(|e| e.to_string())?;

    if json {
        println!("{}", super::to_json(&outcome)?);
    } else {
        super::print_outcome(&outcome);
    }

    Ok(())
}
