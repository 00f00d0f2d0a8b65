use anyhow::Result;

fn main() -> Result<()> {
    geomancy_cli::main_entry()
}
