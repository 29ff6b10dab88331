use roster::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
