use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    squads::example_apps::run_partition_demo(std::env::args().skip(1))
}
