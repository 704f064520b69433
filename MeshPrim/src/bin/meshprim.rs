fn main() -> anyhow::Result<()> {
    meshprim::cli::run_cli()
}
