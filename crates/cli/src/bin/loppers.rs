use anyhow::Result;

fn main() -> Result<()> {
    loppers_cli::main_entry()
}
