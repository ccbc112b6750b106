fn main() -> anyhow::Result<()> {
    modbuilder::cli::run_cli()
}
